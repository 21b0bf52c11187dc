//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::{Footer, Header};
use crate::components::route_guards::{RequireAdmin, RequireAuth};
use crate::net::{API_BASE, ApiClient, FetchBackend};
use crate::pages::{
    admin_dashboard::AdminDashboardPage, categories::CategoriesPage, home::HomePage,
    login::LoginPage, my_news::MyNewsPage, news_detail::NewsDetailPage, news_list::NewsListPage,
    not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::session::{BrowserVault, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Rehydrates the session from storage, wires the API client to it, and
/// provides both as contexts before setting up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(Arc::new(BrowserVault));
    let api = ApiClient::new(FetchBackend, session.clone(), API_BASE);

    provide_context(session);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/newsdesk.css"/>
        <Title text="Newsdesk"/>

        <Router>
            <Header/>
            <main class="content">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("news") view=NewsListPage/>
                    <Route path=(StaticSegment("news"), ParamSegment("id")) view=NewsDetailPage/>
                    <Route
                        path=StaticSegment("categories")
                        view=|| view! { <RequireAuth><CategoriesPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("my-news")
                        view=|| view! { <RequireAuth><MyNewsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

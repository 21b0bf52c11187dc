//! Application chrome: header with session-aware navigation and footer.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Top navigation bar. Links adapt to the session: guests get login and
/// register, signed-in users get their workspaces, admins get the
/// dashboard.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let whoami = session.clone();
    let admin = session.clone();
    let authed = session.clone();

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                "Newsdesk"
            </a>
            <nav class="site-header__nav">
                <a href="/news">"News"</a>
                <Show when=move || authed.is_authenticated() fallback=|| ()>
                    <a href="/categories">"Categories"</a>
                    <a href="/my-news">"My News"</a>
                </Show>
                <Show when=move || admin.is_admin() fallback=|| ()>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <div class="site-header__session">
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login" class="btn">
                                "Sign in"
                            </a>
                            <a href="/register" class="btn btn--primary">
                                "Register"
                            </a>
                        }
                    }
                >
                    <span class="site-header__user">
                        {
                            let whoami = whoami.clone();
                            move || whoami.current_user().map(|user| user.username).unwrap_or_default()
                        }
                    </span>
                    <button class="btn" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>"Newsdesk, a small newsroom CMS"</span>
        </footer>
    }
}

//! Landing page with feature overview and session-aware quick actions.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let authed = session.clone();
    let admin = session.clone();
    let admin_card = session.clone();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Welcome to Newsdesk"</h1>
                <p>"A small, fast newsroom content-management system."</p>
                <Show when=move || !session.is_authenticated()>
                    <div class="hero__actions">
                        <a href="/login" class="btn btn--primary">
                            "Sign in"
                        </a>
                        <a href="/register" class="btn">
                            "Register"
                        </a>
                    </div>
                </Show>
            </section>

            <section class="feature-grid">
                <div class="card">
                    <h2>"News"</h2>
                    <p>"Write, edit and publish articles."</p>
                    <a href="/news">"Browse news"</a>
                </div>
                <div class="card">
                    <h2>"Categories"</h2>
                    <p>"Organize articles by topic."</p>
                    <a href="/categories">"Browse categories"</a>
                </div>
                <div class="card">
                    <h2>"Roles"</h2>
                    <p>"User and admin roles gate who can do what."</p>
                    {move || {
                        if admin_card.is_admin() {
                            view! { <a href="/admin">"Admin dashboard"</a> }.into_any()
                        } else {
                            view! { <span class="muted">"Admins only"</span> }.into_any()
                        }
                    }}
                </div>
            </section>

            <Show when=move || authed.is_authenticated()>
                <section class="quick-actions card">
                    <h2>"Quick actions"</h2>
                    <div class="quick-actions__row">
                        <a href="/my-news" class="btn btn--primary">
                            "My news"
                        </a>
                        <a href="/categories" class="btn">
                            "Manage categories"
                        </a>
                        <Show when={
                            let admin = admin.clone();
                            move || admin.is_admin()
                        }>
                            <a href="/admin" class="btn">
                                "Admin dashboard"
                            </a>
                        </Show>
                    </div>
                </section>
            </Show>
        </div>
    }
}

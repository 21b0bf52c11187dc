use leptos::prelude::*;

/// Catch-all for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/" class="btn">
                "Back home"
            </a>
        </div>
    }
}

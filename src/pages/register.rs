//! Registration page with client-side validation.

use leptos::prelude::*;

/// Account-creation form. Password confirmation and minimum length are
/// checked locally before anything goes over the wire; a successful
/// registration lands on the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::Api>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        // Validation failures never reach the backend.
        if password.get() != confirm.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        if password.get().chars().count() < 6 {
            error.set(Some("Password must be at least 6 characters".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::RegisterRequest;

            let api = api.clone();
            let navigate = navigate.clone();
            let request = RegisterRequest {
                username: username.get(),
                email: email.get(),
                password: password.get(),
            };
            pending.set(true);
            leptos::task::spawn_local(async move {
                match api.register(&request).await {
                    Ok(_) => navigate("/login", leptos_router::NavigateOptions::default()),
                    Err(_) => {
                        pending.set(false);
                        error.set(Some("Registration failed. Please try again.".to_owned()));
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>"Create an account"</h1>
                <form on:submit=submit>
                    <Show when=move || error.get().is_some()>
                        <p class="alert alert--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <label class="field">
                        "Username"
                        <input
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Email"
                        <input
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Password (at least 6 characters)"
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Confirm password"
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

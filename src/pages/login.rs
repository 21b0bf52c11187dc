//! Login page: credential form feeding the session store.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Sign-in form. A successful login establishes the session and returns
/// the visitor to wherever a guard bounced them from (the `from` query
/// parameter), or home. Failures surface a single generic message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let loading = session.clone();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::Api>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let query = leptos_router::hooks::use_query_map();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::LoginRequest;

            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            let request =
                LoginRequest { username: username.get(), password: password.get() };
            let destination = query
                .get()
                .get("from")
                .filter(|from| from.starts_with('/'))
                .unwrap_or_else(|| "/".to_owned());
            session.set_loading(true);
            leptos::task::spawn_local(async move {
                match api.login(&request).await {
                    Ok(response) => {
                        let user = response.user.clone();
                        session.login(&response, user);
                        navigate(&destination, leptos_router::NavigateOptions::default());
                    }
                    Err(_) => {
                        // Generic on purpose: no credential detail leaks.
                        session.set_loading(false);
                        error.set(Some("Invalid username or password".to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__hint">"Enter your account details to continue"</p>
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
                        "Password"
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled={
                        let loading = loading.clone();
                        move || loading.is_loading()
                    }>
                        {
                            let loading = loading.clone();
                            move || if loading.is_loading() { "Signing in..." } else { "Sign in" }
                        }
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}

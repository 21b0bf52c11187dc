//! Router-facing guard wrappers.
//!
//! Thin components that consult the pure decisions in [`crate::guards`] on
//! every navigation and apply redirects through the router. They read only
//! the already-hydrated session store; no network I/O happens here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::guards::{require_admin, require_auth};
use crate::state::session::SessionStore;

/// Renders its children only for authenticated visitors; everyone else is
/// redirected to `/login` with the blocked location carried along.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let gate = session.clone();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let decision = require_auth(&session.get(), &location.pathname.get());
        if let Some(target) = decision.redirect_target() {
            navigate(&target, NavigateOptions::default());
        }
    });

    view! { {move || gate.is_authenticated().then(|| children())} }
}

/// Admin gate: authentication first, then the admin role. Role mismatch is
/// a silent redirect home, not an error.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let gate = session.clone();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let decision = require_admin(&session.get(), &location.pathname.get());
        if let Some(target) = decision.redirect_target() {
            navigate(&target, NavigateOptions::default());
        }
    });

    view! { {move || (gate.is_authenticated() && gate.is_admin()).then(|| children())} }
}

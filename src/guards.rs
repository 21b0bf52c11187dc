//! Route-guard decisions.
//!
//! Pure, synchronous functions over the current [`Session`] and the
//! navigation target. They never touch the network or storage; the session
//! they inspect comes from the already-hydrated store, and role checks go
//! through [`User::is_admin`] rather than re-reading persisted state.
//! The router-facing wrappers live in [`crate::components::route_guards`].

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::net::types::User;
use crate::state::session::Session;

/// Outcome of consulting a guard for a navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the target.
    Allow,
    /// Send the visitor to the login view, remembering where they were
    /// headed so a successful login can return them there.
    ToLogin { from: String },
    /// Silent downgrade to the home route (authorization failure is not
    /// surfaced as an error).
    ToHome,
}

impl RouteDecision {
    /// The path to navigate to, if the decision is a redirect.
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::ToLogin { from } => Some(format!("/login?from={from}")),
            Self::ToHome => Some("/".to_owned()),
        }
    }
}

/// Gate for routes that require a signed-in user.
pub fn require_auth(session: &Session, target: &str) -> RouteDecision {
    if session.is_authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::ToLogin { from: target.to_owned() }
    }
}

/// Gate for admin-only routes: authentication first, then the admin role.
pub fn require_admin(session: &Session, target: &str) -> RouteDecision {
    match require_auth(session, target) {
        RouteDecision::Allow => {
            if session.user.as_ref().is_some_and(User::is_admin) {
                RouteDecision::Allow
            } else {
                RouteDecision::ToHome
            }
        }
        redirect => redirect,
    }
}

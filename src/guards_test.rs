use super::*;
use crate::net::types::UserStatus;

fn authed_session(roles: &[&str]) -> Session {
    Session {
        user: Some(User {
            id: 1,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            status: UserStatus::Active,
            roles: roles.iter().map(|r| (*r).to_owned()).collect(),
        }),
        access_token: Some("T1".to_owned()),
        refresh_token: None,
        is_authenticated: true,
        is_loading: false,
    }
}

// =============================================================
// require_auth
// =============================================================

#[test]
fn unauthenticated_visitor_is_sent_to_login() {
    let decision = require_auth(&Session::default(), "/my-news");
    assert_eq!(decision, RouteDecision::ToLogin { from: "/my-news".to_owned() });
    assert_eq!(decision.redirect_target().as_deref(), Some("/login?from=/my-news"));
}

#[test]
fn authenticated_visitor_may_render() {
    assert_eq!(require_auth(&authed_session(&[]), "/my-news"), RouteDecision::Allow);
}

// =============================================================
// require_admin
// =============================================================

#[test]
fn admin_guard_requires_authentication_first() {
    let decision = require_admin(&Session::default(), "/admin");
    assert_eq!(decision, RouteDecision::ToLogin { from: "/admin".to_owned() });
}

#[test]
fn authenticated_without_roles_is_downgraded_home() {
    let decision = require_admin(&authed_session(&[]), "/admin");
    assert_eq!(decision, RouteDecision::ToHome);
    assert_eq!(decision.redirect_target().as_deref(), Some("/"));
}

#[test]
fn plain_user_role_is_not_enough() {
    assert_eq!(require_admin(&authed_session(&["ROLE_USER"]), "/admin"), RouteDecision::ToHome);
}

#[test]
fn admin_role_allows_rendering() {
    assert_eq!(
        require_admin(&authed_session(&["ROLE_USER", "ROLE_ADMIN"]), "/admin"),
        RouteDecision::Allow
    );
}

#[test]
fn allow_carries_no_redirect() {
    assert!(require_auth(&authed_session(&[]), "/categories").redirect_target().is_none());
}

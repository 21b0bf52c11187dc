use std::sync::Arc;

use super::*;
use crate::net::types::UserStatus;

fn vault() -> Arc<MemoryVault> {
    Arc::new(MemoryVault::default())
}

fn store(vault: &Arc<MemoryVault>) -> SessionStore {
    SessionStore::new(Arc::clone(vault) as Arc<dyn SessionVault>)
}

fn sample_user(roles: &[&str]) -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        status: UserStatus::Active,
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

fn login_response(token: &str, user: &User) -> LoginResponse {
    LoginResponse {
        token: token.to_owned(),
        token_type: "Bearer".to_owned(),
        expires_in: 3600,
        user: user.clone(),
    }
}

fn persisted(vault: &Arc<MemoryVault>) -> serde_json::Value {
    let raw = vault.load().expect("snapshot written");
    serde_json::from_str(&raw).expect("snapshot is JSON")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn fresh_store_is_unauthenticated() {
    let session = store(&vault()).get();
    assert!(session.user.is_none());
    assert!(session.access_token.is_none());
    assert!(session.refresh_token.is_none());
    assert!(!session.is_authenticated);
    assert!(!session.is_loading);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_sets_user_token_and_flag_atomically() {
    let vault = vault();
    let store = store(&vault);
    let user = sample_user(&["ROLE_USER"]);

    store.set_loading(true);
    store.login(&login_response("T1", &user), user.clone());

    let session = store.get();
    assert_eq!(session.user, Some(user));
    assert_eq!(session.access_token.as_deref(), Some("T1"));
    assert!(session.is_authenticated);
    assert!(!session.is_loading);
}

#[test]
fn login_persists_snapshot_matching_memory() {
    let vault = vault();
    let store = store(&vault);
    let user = sample_user(&["ROLE_USER"]);

    store.login(&login_response("T1", &user), user);

    let snapshot = persisted(&vault);
    assert_eq!(snapshot["accessToken"], "T1");
    assert_eq!(snapshot["isAuthenticated"], true);
    assert_eq!(snapshot["user"]["username"], "alice");
    // Transient field is excluded from persistence.
    assert!(snapshot.get("isLoading").is_none());
}

#[test]
fn login_does_not_touch_refresh_token() {
    let vault = vault();
    let store = store(&vault);
    let user = sample_user(&[]);

    store.set_tokens("old".to_owned(), Some("R1".to_owned()));
    store.login(&login_response("T1", &user), user);

    assert_eq!(store.refresh_token().as_deref(), Some("R1"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_resets_every_field_and_snapshot() {
    let vault = vault();
    let store = store(&vault);
    let user = sample_user(&["ROLE_ADMIN"]);
    store.login(&login_response("T1", &user), user);
    store.set_tokens("T2".to_owned(), Some("R1".to_owned()));

    store.logout();

    assert_eq!(store.get(), Session::default());
    let snapshot = persisted(&vault);
    assert_eq!(snapshot["user"], serde_json::Value::Null);
    assert_eq!(snapshot["accessToken"], serde_json::Value::Null);
    assert_eq!(snapshot["refreshToken"], serde_json::Value::Null);
    assert_eq!(snapshot["isAuthenticated"], false);
}

#[test]
fn logout_from_baseline_is_harmless() {
    let store = store(&vault());
    store.logout();
    assert_eq!(store.get(), Session::default());
}

// =============================================================
// Token updates
// =============================================================

#[test]
fn set_tokens_leaves_identity_alone() {
    let vault = vault();
    let store = store(&vault);
    let user = sample_user(&["ROLE_USER"]);
    store.login(&login_response("T1", &user), user.clone());

    store.set_tokens("T2".to_owned(), None);

    let session = store.get();
    assert_eq!(session.access_token.as_deref(), Some("T2"));
    assert!(session.refresh_token.is_none());
    assert_eq!(session.user, Some(user));
    assert!(session.is_authenticated);
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn is_admin_reads_role_set_through_store() {
    let store = store(&vault());
    let admin = sample_user(&["ROLE_USER", "ROLE_ADMIN"]);
    store.login(&login_response("T1", &admin), admin);
    assert!(store.is_admin());

    store.logout();
    assert!(!store.is_admin());
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn new_store_rehydrates_from_same_vault() {
    let vault = vault();
    let user = sample_user(&["ROLE_USER"]);
    store(&vault).login(&login_response("T1", &user), user.clone());

    let revived = store(&vault);
    let session = revived.get();
    assert!(session.is_authenticated);
    assert_eq!(session.user, Some(user));
    assert_eq!(session.access_token.as_deref(), Some("T1"));
    assert!(!session.is_loading);
}

#[test]
fn corrupt_snapshot_falls_back_to_baseline() {
    let vault = vault();
    vault.save("not json at all");
    assert_eq!(store(&vault).get(), Session::default());
}

#[test]
fn snapshot_claiming_auth_without_token_is_demoted() {
    let vault = vault();
    vault.save(r#"{"user": null, "accessToken": null, "refreshToken": null, "isAuthenticated": true}"#);
    assert!(!store(&vault).is_authenticated());
}

//! Session store: the single owner of authentication state.
//!
//! Holds the current user, bearer credentials, and derived flags in a
//! reactive signal so the UI re-renders on every transition. A serialized
//! snapshot of the durable fields is written through a [`SessionVault`] on
//! every mutation and read back at startup, so a reload keeps the user
//! signed in.
//!
//! INVARIANT
//! =========
//! `is_authenticated` is true exactly when both a user and an access token
//! are present. Mutations set the affected fields in one signal update, so
//! readers never observe a partially-authenticated state. All mutation is
//! synchronous; there is no interleaving between the read-modify-persist
//! steps of a single call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, RwLock};

use leptos::prelude::*;

use crate::net::types::{LoginResponse, User};

/// Durable-storage key for the persisted session snapshot.
pub const SESSION_STORAGE_KEY: &str = "newsdesk-session";

/// In-memory session state. `is_loading` is a UI affordance for an
/// in-flight login attempt and is never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// The persisted subset of [`Session`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snapshot {
    user: Option<User>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    is_authenticated: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self { user: None, access_token: None, refresh_token: None, is_authenticated: false }
    }
}

/// Where session snapshots are kept between page loads.
///
/// The browser implementation is [`BrowserVault`] (localStorage);
/// [`MemoryVault`] backs native/SSR builds and tests.
pub trait SessionVault: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, snapshot: &str);
}

/// localStorage-backed vault. Outside the browser every call is a no-op,
/// mirroring how the rest of the crate stubs browser-only code.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserVault;

impl SessionVault for BrowserVault {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(SESSION_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, snapshot: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(SESSION_STORAGE_KEY, snapshot);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = snapshot;
        }
    }
}

/// In-memory vault for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryVault {
    cell: RwLock<Option<String>>,
}

impl SessionVault for MemoryVault {
    fn load(&self) -> Option<String> {
        self.cell.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, snapshot: &str) {
        if let Ok(mut guard) = self.cell.write() {
            *guard = Some(snapshot.to_owned());
        }
    }
}

/// Handle to the process-wide session. Cheap to clone; all clones share
/// the same signal and vault. Provided to the component tree via context
/// by [`crate::app::App`].
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<Session>,
    vault: Arc<dyn SessionVault>,
}

impl SessionStore {
    /// Build a store, rehydrating any snapshot the vault holds. Runs before
    /// the first render that depends on session state.
    pub fn new(vault: Arc<dyn SessionVault>) -> Self {
        let session = vault.load().map_or_else(Session::default, |raw| Self::rehydrate(&raw));
        Self { state: RwSignal::new(session), vault }
    }

    fn rehydrate(raw: &str) -> Session {
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap_or_default();
        // A corrupt snapshot must not produce a half-authenticated session.
        let is_authenticated = snapshot.is_authenticated
            && snapshot.user.is_some()
            && snapshot.access_token.is_some();
        Session {
            user: snapshot.user,
            access_token: snapshot.access_token,
            refresh_token: snapshot.refresh_token,
            is_authenticated,
            is_loading: false,
        }
    }

    /// Current session state (reactive read).
    pub fn get(&self) -> Session {
        self.state.get()
    }

    /// Reactive view: is anyone signed in?
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    /// Reactive view: does the signed-in user hold the admin role?
    pub fn is_admin(&self) -> bool {
        self.state.with(|s| s.user.as_ref().is_some_and(User::is_admin))
    }

    /// Reactive view: login attempt in flight?
    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Untracked token read for the request pipeline.
    pub fn access_token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    /// Untracked refresh-token read for the request pipeline.
    pub fn refresh_token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.refresh_token.clone())
    }

    /// Establish an authenticated session from a successful login or
    /// registration. Leaves the refresh token untouched; the backend's
    /// login response does not carry one.
    pub fn login(&self, response: &LoginResponse, user: User) {
        self.write(|s| {
            s.user = Some(user);
            s.access_token = Some(response.token.clone());
            s.is_authenticated = true;
            s.is_loading = false;
        });
    }

    /// Swap credentials after a refresh call. Identity and the
    /// authenticated flag are unaffected.
    pub fn set_tokens(&self, access_token: String, refresh_token: Option<String>) {
        self.write(|s| {
            s.access_token = Some(access_token);
            s.refresh_token = refresh_token;
        });
    }

    /// Drop back to the unauthenticated baseline. Never fails and makes no
    /// network call.
    pub fn logout(&self) {
        self.write(|s| *s = Session::default());
    }

    pub fn set_loading(&self, loading: bool) {
        self.write(|s| s.is_loading = loading);
    }

    /// Apply a mutation and synchronously re-persist the snapshot, keeping
    /// storage and in-memory state consistent.
    fn write(&self, mutate: impl FnOnce(&mut Session)) {
        self.state.update(mutate);
        self.persist();
    }

    fn persist(&self) {
        let snapshot = self.state.with_untracked(|s| Snapshot {
            user: s.user.clone(),
            access_token: s.access_token.clone(),
            refresh_token: s.refresh_token.clone(),
            is_authenticated: s.is_authenticated,
        });
        if let Ok(json) = serde_json::to_string(&snapshot) {
            self.vault.save(&json);
        }
    }
}

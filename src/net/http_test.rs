use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::net::types::{LoginResponse, User, UserStatus};
use crate::state::session::{MemoryVault, SessionStore, SessionVault};

// =============================================================
// Fake backend
// =============================================================

#[derive(Default)]
struct FakeInner {
    queue: VecDeque<Result<HttpResponse, ApiError>>,
    sent: Vec<HttpRequest>,
}

/// Records every request and replays canned responses in order.
#[derive(Clone, Default)]
struct FakeBackend {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeBackend {
    fn push(&self, response: Result<HttpResponse, ApiError>) {
        self.inner.lock().unwrap().queue.push_back(response);
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().sent.clone()
    }
}

impl HttpBackend for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.sent.push(request);
        inner
            .queue
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("fake backend queue empty".to_owned())))
    }
}

// =============================================================
// Fixtures
// =============================================================

fn sample_user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        status: UserStatus::Active,
        roles: vec!["ROLE_USER".to_owned()],
    }
}

fn session() -> SessionStore {
    SessionStore::new(Arc::new(MemoryVault::default()) as Arc<dyn SessionVault>)
}

fn authed_session(access: &str, refresh: Option<&str>) -> SessionStore {
    let store = session();
    let user = sample_user();
    let response = LoginResponse {
        token: access.to_owned(),
        token_type: "Bearer".to_owned(),
        expires_in: 3600,
        user: user.clone(),
    };
    store.login(&response, user);
    if let Some(refresh) = refresh {
        store.set_tokens(access.to_owned(), Some(refresh.to_owned()));
    }
    store
}

struct Harness {
    backend: FakeBackend,
    client: ApiClient<FakeBackend>,
    expirations: Arc<AtomicUsize>,
}

fn harness(store: SessionStore) -> Harness {
    let backend = FakeBackend::default();
    let expirations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&expirations);
    let client = ApiClient::new(backend.clone(), store, "/api")
        .on_session_expired(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    Harness { backend, client, expirations }
}

fn ok(body: serde_json::Value) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse { status: 200, body: body.to_string() })
}

fn status(code: u16, message: &str) -> Result<HttpResponse, ApiError> {
    let body = serde_json::json!({
        "timestamp": "t", "status": code, "message": message, "data": null
    });
    Ok(HttpResponse { status: code, body: body.to_string() })
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "timestamp": "t", "status": 200, "message": "OK", "data": data })
}

fn get_news() -> HttpRequest {
    HttpRequest::new(HttpMethod::Get, "v1/news")
}

// =============================================================
// Bearer attachment
// =============================================================

#[test]
fn unauthenticated_request_carries_no_bearer() {
    let h = harness(session());
    h.backend.push(ok(envelope(serde_json::json!({}))));

    block_on(h.client.execute(get_news())).expect("success");

    let sent = h.backend.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].bearer.is_none());
    assert_eq!(sent[0].path, "/api/v1/news");
}

#[test]
fn stored_token_is_attached_verbatim() {
    let h = harness(authed_session("T1", None));
    h.backend.push(ok(envelope(serde_json::json!({}))));

    block_on(h.client.execute(get_news())).expect("success");

    assert_eq!(h.backend.sent()[0].bearer.as_deref(), Some("T1"));
}

// =============================================================
// Refresh-and-retry
// =============================================================

#[test]
fn expired_token_is_refreshed_and_request_retried_once() {
    let h = harness(authed_session("T1", Some("R1")));
    h.backend.push(status(401, "token expired"));
    h.backend.push(ok(envelope(serde_json::json!({ "token": "T2" }))));
    h.backend.push(ok(envelope(serde_json::json!({ "items": [] }))));

    let outcome = block_on(h.client.execute(get_news())).expect("retried outcome");
    assert_eq!(outcome.status, 200);

    let sent = h.backend.sent();
    assert_eq!(sent.len(), 3);
    // Original attempt with the stale token.
    assert_eq!(sent[0].bearer.as_deref(), Some("T1"));
    // Refresh call: no bearer, refresh token in the body.
    assert_eq!(sent[1].path, "/api/auth/refresh");
    assert_eq!(sent[1].method, HttpMethod::Post);
    assert!(sent[1].bearer.is_none());
    assert_eq!(sent[1].body.as_ref().unwrap()["refreshToken"], "R1");
    // Retry with the new token against the original path.
    assert_eq!(sent[2].path, "/api/v1/news");
    assert_eq!(sent[2].bearer.as_deref(), Some("T2"));

    assert_eq!(h.client.session().access_token().as_deref(), Some("T2"));
    assert_eq!(h.expirations.load(Ordering::SeqCst), 0);
}

#[test]
fn caller_observes_the_retried_outcome_even_when_it_fails() {
    let h = harness(authed_session("T1", Some("R1")));
    h.backend.push(status(401, "token expired"));
    h.backend.push(ok(envelope(serde_json::json!({ "token": "T2" }))));
    h.backend.push(status(500, "boom"));

    let err = block_on(h.client.execute(get_news())).expect_err("retried failure");
    assert_eq!(err, ApiError::Status { status: 500, message: "boom".to_owned() });
}

// =============================================================
// No refresh token
// =============================================================

#[test]
fn missing_refresh_token_forces_logout_and_surfaces_original_401() {
    let h = harness(authed_session("T1", None));
    h.backend.push(status(401, "token expired"));

    let err = block_on(h.client.execute(get_news())).expect_err("original failure");
    assert_eq!(err, ApiError::Status { status: 401, message: "token expired".to_owned() });

    // No retry was attempted.
    assert_eq!(h.backend.sent().len(), 1);
    // logout() ran exactly once and the expiry hook fired.
    assert!(!h.client.session().get().is_authenticated);
    assert_eq!(h.expirations.load(Ordering::SeqCst), 1);
}

// =============================================================
// One-shot retry
// =============================================================

#[test]
fn second_401_after_retry_propagates_immediately() {
    let h = harness(authed_session("T1", Some("R1")));
    h.backend.push(status(401, "token expired"));
    h.backend.push(ok(envelope(serde_json::json!({ "token": "T2" }))));
    h.backend.push(status(401, "still unauthorized"));

    let err = block_on(h.client.execute(get_news())).expect_err("terminal 401");
    assert_eq!(err, ApiError::Status { status: 401, message: "still unauthorized".to_owned() });
    // Exactly one refresh and one retry; never a second loop.
    assert_eq!(h.backend.sent().len(), 3);
}

// =============================================================
// Refresh failure
// =============================================================

#[test]
fn refresh_failure_forces_logout_and_surfaces_refresh_error() {
    let h = harness(authed_session("T1", Some("R1")));
    h.backend.push(status(401, "token expired"));
    h.backend.push(status(403, "refresh rejected"));

    let err = block_on(h.client.execute(get_news())).expect_err("refresh failure");
    // The refresh failure, not the original 401, reaches the caller.
    assert_eq!(err, ApiError::Status { status: 403, message: "refresh rejected".to_owned() });
    assert!(!h.client.session().get().is_authenticated);
    assert_eq!(h.expirations.load(Ordering::SeqCst), 1);
}

// =============================================================
// Pass-through of other failures
// =============================================================

#[test]
fn non_401_errors_pass_through_unmodified() {
    let h = harness(authed_session("T1", Some("R1")));
    h.backend.push(status(500, "server error"));

    let err = block_on(h.client.execute(get_news())).expect_err("server error");
    assert_eq!(err, ApiError::Status { status: 500, message: "server error".to_owned() });
    // The refresh token was never consulted.
    assert_eq!(h.backend.sent().len(), 1);
    assert!(h.client.session().get().is_authenticated);
    assert_eq!(h.expirations.load(Ordering::SeqCst), 0);
}

#[test]
fn transport_errors_pass_through_unmodified() {
    let h = harness(authed_session("T1", Some("R1")));
    h.backend.push(Err(ApiError::Network("connection reset".to_owned())));

    let err = block_on(h.client.execute(get_news())).expect_err("transport error");
    assert_eq!(err, ApiError::Network("connection reset".to_owned()));
    assert!(h.client.session().get().is_authenticated);
}

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn request_data_decodes_envelope_payload() {
    let h = harness(session());
    h.backend.push(ok(envelope(serde_json::json!({
        "id": 3, "name": "World", "slug": "world", "createdAt": "2024-05-01T00:00:00"
    }))));

    let category: crate::net::types::Category =
        block_on(h.client.request_data(HttpRequest::new(HttpMethod::Get, "v1/categories/3")))
            .expect("decoded");
    assert_eq!(category.name, "World");
}

#[test]
fn request_data_without_payload_is_missing_data() {
    let h = harness(session());
    h.backend.push(status(200, "OK"));

    let err: ApiError = block_on(
        h.client.request_data::<crate::net::types::Category>(HttpRequest::new(
            HttpMethod::Get,
            "v1/categories/3",
        )),
    )
    .expect_err("no data");
    assert_eq!(err, ApiError::MissingData);
}

// =============================================================
// Scenario from the session contract
// =============================================================

#[test]
fn login_then_expired_call_without_refresh_token_logs_out() {
    let store = session();
    let h = harness(store);

    // Login succeeds and establishes the session.
    h.backend.push(ok(envelope(serde_json::json!({
        "token": "T1", "tokenType": "Bearer", "expiresIn": 3600,
        "user": {"id": 1, "username": "alice", "email": "a@b.c",
                 "status": "ACTIVE", "roles": ["ROLE_USER"]}
    }))));
    let login: LoginResponse = block_on(h.client.request_data(
        HttpRequest::new(HttpMethod::Post, "auth/login")
            .with_body(serde_json::json!({ "username": "alice", "password": "secret" })),
    ))
    .expect("login");
    let user = login.user.clone();
    h.client.session().login(&login, user);
    assert!(h.client.session().get().is_authenticated);
    assert_eq!(h.client.session().access_token().as_deref(), Some("T1"));

    // A later call 401s; with no refresh token stored the session ends.
    h.backend.push(status(401, "token expired"));
    let err = block_on(h.client.execute(get_news())).expect_err("forced logout");
    assert_eq!(err, ApiError::Status { status: 401, message: "token expired".to_owned() });
    assert_eq!(h.backend.sent().len(), 2);
    assert!(!h.client.session().get().is_authenticated);
    assert_eq!(h.expirations.load(Ordering::SeqCst), 1);
}

// A successful refresh replaces the credential pair wholesale; the reply
// carries no rotated refresh token, so the stored one is consumed.
#[test]
fn refresh_consumes_the_stored_refresh_token() {
    let h = harness(authed_session("T1", Some("R1")));
    // First request: 401, refresh to T2, retry ok.
    h.backend.push(status(401, "token expired"));
    h.backend.push(ok(envelope(serde_json::json!({ "token": "T2" }))));
    h.backend.push(ok(envelope(serde_json::json!({}))));

    block_on(h.client.execute(get_news())).expect("first");
    assert_eq!(h.client.session().access_token().as_deref(), Some("T2"));
    assert!(h.client.session().refresh_token().is_none());

    // When T2 later expires there is nothing left to refresh with, so the
    // session ends instead of looping.
    h.backend.push(status(401, "token expired"));
    let err = block_on(h.client.execute(get_news())).expect_err("forced logout");
    assert_eq!(err, ApiError::Status { status: 401, message: "token expired".to_owned() });
    assert_eq!(h.expirations.load(Ordering::SeqCst), 1);

    let refreshes = h
        .backend
        .sent()
        .iter()
        .filter(|request| request.path.ends_with("auth/refresh"))
        .count();
    assert_eq!(refreshes, 1);
}

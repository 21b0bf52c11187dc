//! Authenticated request pipeline.
//!
//! Every REST call flows through [`ApiClient::execute`]: attach the stored
//! bearer token, send, and on a 401 perform one refresh-and-retry before
//! forcing a logout. The pipeline is expressed as plain sequential awaits
//! over a [`HttpBackend`] so each step is testable against a fake backend;
//! the browser backend lives in [`crate::net::fetch`].
//!
//! Refresh attempts are not coalesced across concurrent requests: each
//! expired request consults the store on its own. The stored refresh
//! token is consumed by the first successful refresh, so a racing second
//! request finds none and ends the session instead of looping.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use crate::net::types::ApiResponse;
use crate::state::session::SessionStore;

/// Error surface of the pipeline and the gateways built on it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("response envelope carried no data")]
    MissingData,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One outbound call. `path` is absolute by the time a backend sees it;
/// `bearer` is filled in by the pipeline, not by callers.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, bearer: None }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response: any HTTP status is an `Ok`; `Err` is transport failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam. Implemented by the gloo-net fetch backend in the
/// browser and by a recording fake in tests.
#[allow(async_fn_in_trait)]
pub trait HttpBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Refresh responses only need to yield the new access token; whatever
/// else the backend sends alongside is ignored.
#[derive(serde::Deserialize)]
struct RefreshedCredential {
    token: String,
}

/// REST client wired to the session store. Clones share the store, so any
/// clone observes credential updates made by another.
#[derive(Clone)]
pub struct ApiClient<B: HttpBackend + Clone> {
    backend: B,
    session: SessionStore,
    base: String,
    on_session_expired: Arc<dyn Fn() + Send + Sync>,
}

impl<B: HttpBackend + Clone> ApiClient<B> {
    pub fn new(backend: B, session: SessionStore, base: impl Into<String>) -> Self {
        Self {
            backend,
            session,
            base: base.into(),
            on_session_expired: Arc::new(crate::net::fetch::redirect_to_login),
        }
    }

    /// Replace the forced-logout hook (default: redirect to `/login`).
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Arc::new(hook);
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Run one request through the pipeline.
    ///
    /// Success statuses return the raw response; everything else becomes
    /// [`ApiError::Status`]. A 401 triggers at most one refresh-and-retry:
    /// the retried outcome, whatever it is, is what the caller observes.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut retried = false;
        loop {
            let mut attempt = request.clone();
            attempt.path = format!("{}/{}", self.base, request.path);
            attempt.bearer = self.session.access_token();

            let response = self.backend.send(attempt).await?;

            if response.status == 401 && !retried {
                retried = true;
                let Some(refresh_token) = self.session.refresh_token() else {
                    self.expire_session();
                    return Err(Self::status_error(&response));
                };
                match self.refresh_access_token(&refresh_token).await {
                    Ok(token) => {
                        // No rotated refresh token in this backend's reply.
                        self.session.set_tokens(token, None);
                        continue;
                    }
                    Err(err) => {
                        leptos::logging::warn!("token refresh failed: {err}");
                        self.expire_session();
                        return Err(err);
                    }
                }
            }

            if response.is_success() {
                return Ok(response);
            }
            return Err(Self::status_error(&response));
        }
    }

    /// Execute and decode the envelope, requiring a `data` payload.
    pub async fn request_data<T>(&self, request: HttpRequest) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.execute(request).await?;
        let envelope: ApiResponse<T> = serde_json::from_str(&response.body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Execute a call whose envelope carries no payload (e.g. DELETE).
    pub async fn request_empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    /// Exchange the refresh token for a new access token. Goes straight to
    /// the backend with no bearer header and no retry of its own.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ApiError> {
        let request = HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/auth/refresh", self.base),
            query: Vec::new(),
            body: Some(serde_json::json!({ "refreshToken": refresh_token })),
            bearer: None,
        };
        let response = self.backend.send(request).await?;
        if !response.is_success() {
            return Err(Self::status_error(&response));
        }
        let envelope: ApiResponse<RefreshedCredential> = serde_json::from_str(&response.body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.data.ok_or(ApiError::MissingData)?.token)
    }

    fn expire_session(&self) {
        self.session.logout();
        (self.on_session_expired)();
    }

    /// Turn a non-success response into an error, preferring the server's
    /// envelope message when the body parses.
    fn status_error(response: &HttpResponse) -> ApiError {
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&response.body)
            .map(|envelope| envelope.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "request failed".to_owned());
        ApiError::Status { status: response.status, message }
    }
}

//! Browser transport for the request pipeline.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side: a
//! stub returning an error, since REST calls are only meaningful in the
//! browser.

use crate::net::http::{ApiError, HttpBackend, HttpRequest, HttpResponse};

/// `gloo-net` fetch backend. Stateless; the pipeline owns credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchBackend;

impl HttpBackend for FetchBackend {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match request.method {
                crate::net::http::HttpMethod::Get => Method::GET,
                crate::net::http::HttpMethod::Post => Method::POST,
                crate::net::http::HttpMethod::Put => Method::PUT,
                crate::net::http::HttpMethod::Delete => Method::DELETE,
            };

            let mut builder = RequestBuilder::new(&request.path)
                .method(method)
                .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }

            let built = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|err| ApiError::Network(err.to_string()))?;

            let response = built.send().await.map_err(|err| ApiError::Network(err.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|err| ApiError::Network(err.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

/// Default forced-logout behavior: hard redirect to the login view.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

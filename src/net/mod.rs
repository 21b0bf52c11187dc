//! Networking: backend DTOs, the authenticated request pipeline, the
//! browser fetch transport, and the typed resource gateways.

pub mod api;
pub mod fetch;
pub mod http;
pub mod types;

pub use fetch::FetchBackend;
pub use http::{ApiClient, ApiError};

/// Base path of the REST backend, proxied by the host.
pub const API_BASE: &str = "/api";

/// The client type the component tree receives from context.
pub type Api = ApiClient<FetchBackend>;

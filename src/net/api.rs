//! Typed gateways over the request pipeline, one group per backend
//! resource. Each method translates one REST endpoint into a function
//! call; all of them inherit bearer attachment and refresh-and-retry from
//! [`ApiClient::execute`](crate::net::http::ApiClient).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::http::{ApiClient, ApiError, HttpBackend, HttpMethod, HttpRequest};
use crate::net::types::{
    Category, CategoryRequest, DashboardStats, ListQuery, LoginRequest, LoginResponse, News,
    NewsDetail, NewsQuery, NewsRequest, Paginated, RegisterRequest,
};

fn json_body<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|err| ApiError::Decode(err.to_string()))
}

// =============================================================
// Auth
// =============================================================

impl<B: HttpBackend + Clone> ApiClient<B> {
    /// `POST auth/login`. Callers hand the response to
    /// [`SessionStore::login`](crate::state::session::SessionStore::login).
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.request_data(
            HttpRequest::new(HttpMethod::Post, "auth/login").with_body(json_body(request)?),
        )
        .await
    }

    /// `POST auth/register`. Same response shape as login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.request_data(
            HttpRequest::new(HttpMethod::Post, "auth/register").with_body(json_body(request)?),
        )
        .await
    }
}

// =============================================================
// News
// =============================================================

impl<B: HttpBackend + Clone> ApiClient<B> {
    pub async fn news_list(&self, query: &NewsQuery) -> Result<Paginated<News>, ApiError> {
        self.request_data(HttpRequest::new(HttpMethod::Get, "v1/news").with_query(query.pairs()))
            .await
    }

    pub async fn news_detail(&self, id: i64) -> Result<NewsDetail, ApiError> {
        self.request_data(HttpRequest::new(HttpMethod::Get, format!("v1/news/{id}"))).await
    }

    pub async fn create_news(&self, request: &NewsRequest) -> Result<News, ApiError> {
        self.request_data(
            HttpRequest::new(HttpMethod::Post, "v1/news").with_body(json_body(request)?),
        )
        .await
    }

    pub async fn update_news(&self, id: i64, request: &NewsRequest) -> Result<News, ApiError> {
        self.request_data(
            HttpRequest::new(HttpMethod::Put, format!("v1/news/{id}"))
                .with_body(json_body(request)?),
        )
        .await
    }

    pub async fn delete_news(&self, id: i64) -> Result<(), ApiError> {
        self.request_empty(HttpRequest::new(HttpMethod::Delete, format!("v1/news/{id}"))).await
    }

    /// Admin: `PUT v1/admin/news/{id}/publish`.
    pub async fn publish_news(&self, id: i64) -> Result<News, ApiError> {
        self.request_data(HttpRequest::new(HttpMethod::Put, format!("v1/admin/news/{id}/publish")))
            .await
    }

    /// Admin: `GET v1/admin/dashboard`.
    pub async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        self.request_data(HttpRequest::new(HttpMethod::Get, "v1/admin/dashboard")).await
    }
}

// =============================================================
// Categories
// =============================================================

impl<B: HttpBackend + Clone> ApiClient<B> {
    pub async fn categories_list(&self, query: &ListQuery) -> Result<Paginated<Category>, ApiError> {
        self.request_data(
            HttpRequest::new(HttpMethod::Get, "v1/categories").with_query(query.pairs()),
        )
        .await
    }

    pub async fn category(&self, id: i64) -> Result<Category, ApiError> {
        self.request_data(HttpRequest::new(HttpMethod::Get, format!("v1/categories/{id}"))).await
    }

    pub async fn create_category(&self, request: &CategoryRequest) -> Result<Category, ApiError> {
        self.request_data(
            HttpRequest::new(HttpMethod::Post, "v1/categories").with_body(json_body(request)?),
        )
        .await
    }

    pub async fn update_category(
        &self,
        id: i64,
        request: &CategoryRequest,
    ) -> Result<Category, ApiError> {
        self.request_data(
            HttpRequest::new(HttpMethod::Put, format!("v1/categories/{id}"))
                .with_body(json_body(request)?),
        )
        .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.request_empty(HttpRequest::new(HttpMethod::Delete, format!("v1/categories/{id}")))
            .await
    }
}

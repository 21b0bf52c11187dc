//! Data shapes for the REST backend contract.
//!
//! Every response arrives wrapped in the backend's `ApiResponse` envelope
//! (`{timestamp, status, message, data}`); list endpoints put a `Paginated`
//! page inside `data`. Field names are camelCase on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

/// Role string the backend assigns to administrators.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// Generic response envelope returned by every backend endpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub timestamp: String,
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// One page of a paginated list endpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paginated<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            page_number: 0,
            page_size: 0,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
            has_next: false,
            has_previous: false,
        }
    }
}

/// Account state as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Authenticated user identity carried in the session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub status: UserStatus,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Whether the user's role set grants administrative access.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ADMIN_ROLE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Credential payload of `POST auth/login` and `auth/register`.
///
/// The backend never populates a refresh token here; the session store
/// leaves its refresh slot untouched on login.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    pub user: User,
}

/// Publication state of an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NewsStatus {
    Draft,
    Published,
}

impl NewsStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
        }
    }
}

/// News list item (the backend's `NewsResponseDTO`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: i64,
    pub title: String,
    pub status: NewsStatus,
    pub category_id: i64,
    pub category_name: String,
    pub author_id: i64,
    pub author_name: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full article (the backend's `NewsDetailDTO`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: NewsStatus,
    pub category_id: i64,
    pub category_name: String,
    #[serde(default)]
    pub category_slug: String,
    pub author_id: i64,
    pub author_name: String,
    #[serde(default)]
    pub author_email: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload for an article.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Aggregate numbers for the admin dashboard.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_news: u64,
    #[serde(default)]
    pub news_by_status: HashMap<String, u64>,
    #[serde(default)]
    pub top_categories: Vec<CategoryStat>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category_id: i64,
    pub category_name: String,
    pub article_count: u64,
}

/// Sort direction for list queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameters shared by paginated list endpoints. `page` is zero-based.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
    pub keyword: Option<String>,
}

impl ListQuery {
    /// Encode the set parameters as query-string pairs.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size".to_owned(), size.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".to_owned(), sort_by.clone()));
        }
        if let Some(sort_dir) = self.sort_dir {
            pairs.push(("sortDir".to_owned(), sort_dir.as_str().to_owned()));
        }
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword".to_owned(), keyword.clone()));
        }
        pairs
    }
}

/// News list parameters: the shared list query plus status/category filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub list: ListQuery,
    pub status: Option<NewsStatus>,
    pub category_id: Option<i64>,
}

impl NewsQuery {
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.list.pairs();
        if let Some(status) = self.status {
            pairs.push(("status".to_owned(), status.as_str().to_owned()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryId".to_owned(), category_id.to_string()));
        }
        pairs
    }
}

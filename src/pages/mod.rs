//! Route-level page components.
//!
//! - [`home`]: landing page
//! - [`login`] / [`register`]: auth forms
//! - [`news_list`] / [`news_detail`]: public reading surface
//! - [`my_news`]: authenticated author workspace
//! - [`categories`]: category browsing and admin management
//! - [`admin_dashboard`]: admin-only stats and moderation
//! - [`not_found`]: catch-all

pub mod admin_dashboard;
pub mod categories;
pub mod home;
pub mod login;
pub mod my_news;
pub mod news_detail;
pub mod news_list;
pub mod not_found;
pub mod register;

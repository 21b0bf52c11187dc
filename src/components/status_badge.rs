//! Publication-state badge for article rows.

use leptos::prelude::*;

use crate::net::types::NewsStatus;

#[component]
pub fn StatusBadge(status: NewsStatus) -> impl IntoView {
    let class = match status {
        NewsStatus::Draft => "badge badge--draft",
        NewsStatus::Published => "badge badge--published",
    };
    let label = match status {
        NewsStatus::Draft => "Draft",
        NewsStatus::Published => "Published",
    };
    view! { <span class=class>{label}</span> }
}

//! Admin dashboard: aggregate counters plus a moderation view over all
//! news with publish and delete controls.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::status_badge::StatusBadge;
use crate::net::Api;
use crate::net::types::{ListQuery, NewsQuery, NewsStatus, SortDir};
use crate::util::format::format_timestamp;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();

    let page = RwSignal::new(1_u32);
    let status_filter = RwSignal::new(Option::<NewsStatus>::None);

    let stats_api = api.clone();
    let stats = LocalResource::new(move || {
        let api = stats_api.clone();
        async move { api.dashboard().await }
    });

    let list_api = api.clone();
    let news = LocalResource::new(move || {
        let api = list_api.clone();
        let page = page.get();
        let status = status_filter.get();
        async move {
            let query = NewsQuery {
                list: ListQuery {
                    page: Some(page.saturating_sub(1)),
                    size: Some(10),
                    sort_by: Some("createdAt".to_owned()),
                    sort_dir: Some(SortDir::Desc),
                    keyword: None,
                },
                status,
                category_id: None,
            };
            api.news_list(&query).await
        }
    });

    let total_pages = Signal::derive(move || {
        news.get().and_then(Result::ok).map_or(1, |data| data.total_pages.max(1))
    });

    let publish_api = api.clone();
    let publish = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let api = publish_api.clone();
            leptos::task::spawn_local(async move {
                if api.publish_news(id).await.is_ok() {
                    news.refetch();
                    stats.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&publish_api, id);
        }
    };

    let delete_api = api.clone();
    let delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let api = delete_api.clone();
            leptos::task::spawn_local(async move {
                if api.delete_news(id).await.is_ok() {
                    news.refetch();
                    stats.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&delete_api, id);
        }
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Admin dashboard"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                let published =
                                    data.news_by_status.get("PUBLISHED").copied().unwrap_or(0);
                                let drafts =
                                    data.news_by_status.get("DRAFT").copied().unwrap_or(0);
                                let entries = data.top_categories.clone();
                                view! {
                                    <div class="stat-grid">
                                        <div class="card stat-card">
                                            <span class="stat-card__value">{data.total_news}</span>
                                            <span class="stat-card__label">"Articles"</span>
                                        </div>
                                        <div class="card stat-card">
                                            <span class="stat-card__value">{published}</span>
                                            <span class="stat-card__label">"Published"</span>
                                        </div>
                                        <div class="card stat-card">
                                            <span class="stat-card__value">{drafts}</span>
                                            <span class="stat-card__label">"Drafts"</span>
                                        </div>
                                    </div>
                                    <Show when={
                                        let has_entries = !entries.is_empty();
                                        move || has_entries
                                    }>
                                        <div class="card">
                                            <h2>"Top categories"</h2>
                                            <ul class="stat-list">
                                                {entries
                                                    .iter()
                                                    .map(|entry| {
                                                        view! {
                                                            <li>
                                                                <span>{entry.category_name.clone()}</span>
                                                                <span>{entry.article_count}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </div>
                                    </Show>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p class="alert alert--error">"Could not load dashboard stats."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="admin-news">
                <header class="page-header">
                    <h2>"All news"</h2>
                    <select on:change=move |ev| {
                        let picked = match event_target_value(&ev).as_str() {
                            "DRAFT" => Some(NewsStatus::Draft),
                            "PUBLISHED" => Some(NewsStatus::Published),
                            _ => None,
                        };
                        status_filter.set(picked);
                        page.set(1);
                    }>
                        <option value="">"All statuses"</option>
                        <option value="DRAFT">"Draft"</option>
                        <option value="PUBLISHED">"Published"</option>
                    </select>
                </header>

                <Suspense fallback=move || view! { <p>"Loading news..."</p> }>
                    {move || {
                        let publish = publish.clone();
                        let delete = delete.clone();
                        news.get()
                            .map(|result| match result {
                                Ok(data) => {
                                    view! {
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th>"Title"</th>
                                                    <th>"Author"</th>
                                                    <th>"Category"</th>
                                                    <th>"Status"</th>
                                                    <th>"Created"</th>
                                                    <th class="table__actions">"Actions"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {data
                                                    .content
                                                    .into_iter()
                                                    .map(|item| {
                                                        let publish = publish.clone();
                                                        let delete = delete.clone();
                                                        let status = item.status;
                                                        view! {
                                                            <tr>
                                                                <td>
                                                                    <a href=format!("/news/{}", item.id)>{item.title}</a>
                                                                </td>
                                                                <td>{item.author_name}</td>
                                                                <td>{item.category_name}</td>
                                                                <td>
                                                                    <StatusBadge status=item.status/>
                                                                </td>
                                                                <td>{format_timestamp(&item.created_at)}</td>
                                                                <td class="table__actions">
                                                                    <Show when=move || status == NewsStatus::Draft>
                                                                        <button
                                                                            class="btn btn--small"
                                                                            on:click={
                                                                                let publish = publish.clone();
                                                                                move |_| publish(item.id)
                                                                            }
                                                                        >
                                                                            "Publish"
                                                                        </button>
                                                                    </Show>
                                                                    <button
                                                                        class="btn btn--small btn--danger"
                                                                        on:click={
                                                                            let delete = delete.clone();
                                                                            move |_| delete(item.id)
                                                                        }
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(_) => {
                                    view! { <p class="alert alert--error">"Could not load news."</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                <Pagination page=page total_pages=total_pages/>
            </section>
        </div>
    }
}

//! Public news list with keyword search and pagination.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::status_badge::StatusBadge;
use crate::net::Api;
use crate::net::types::{ListQuery, NewsQuery, SortDir};
use crate::util::format::format_timestamp;

#[component]
pub fn NewsListPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let page = RwSignal::new(1_u32);
    let keyword = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());

    // Refetches whenever the page or the committed keyword changes.
    let news = LocalResource::new(move || {
        let api = api.clone();
        let page = page.get();
        let keyword = keyword.get();
        async move {
            let query = NewsQuery {
                list: ListQuery {
                    page: Some(page.saturating_sub(1)),
                    size: Some(10),
                    sort_by: Some("createdAt".to_owned()),
                    sort_dir: Some(SortDir::Desc),
                    keyword: (!keyword.is_empty()).then_some(keyword),
                },
                ..NewsQuery::default()
            };
            api.news_list(&query).await
        }
    });

    let total_pages = Signal::derive(move || {
        news.get().and_then(Result::ok).map_or(1, |data| data.total_pages.max(1))
    });

    let run_search = move || {
        keyword.set(search_input.get());
        page.set(1);
    };

    view! {
        <div class="news-list-page">
            <header class="page-header">
                <h1>"News"</h1>
                <div class="search">
                    <input
                        type="text"
                        placeholder="Search news..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                run_search();
                            }
                        }
                    />
                    <button class="btn" on:click=move |_| run_search()>
                        "Search"
                    </button>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading news..."</p> }>
                {move || {
                    news.get()
                        .map(|result| match result {
                            Ok(data) => {
                                if data.content.is_empty() {
                                    view! { <p class="muted">"No news found."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="news-cards">
                                            {data
                                                .content
                                                .into_iter()
                                                .map(|item| {
                                                    view! {
                                                        <article class="card news-card">
                                                            <h2>
                                                                <a href=format!("/news/{}", item.id)>{item.title}</a>
                                                            </h2>
                                                            <div class="news-card__meta">
                                                                <StatusBadge status=item.status/>
                                                                <span>{item.category_name}</span>
                                                                <span>{item.author_name}</span>
                                                                <span>{format_timestamp(&item.created_at)}</span>
                                                            </div>
                                                        </article>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(_) => {
                                view! { <p class="alert alert--error">"Could not load news."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Pagination page=page total_pages=total_pages/>
        </div>
    }
}

//! Full-article view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status_badge::StatusBadge;
use crate::net::Api;
use crate::util::format::format_timestamp;

#[component]
pub fn NewsDetailPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();

    let detail = LocalResource::new(move || {
        let api = api.clone();
        let id = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
        async move {
            match id {
                Some(id) => api.news_detail(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="news-detail-page">
            <Suspense fallback=move || view! { <p>"Loading article..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(Some(article)) => {
                                view! {
                                    <article class="card article">
                                        <h1>{article.title}</h1>
                                        <div class="article__meta">
                                            <StatusBadge status=article.status/>
                                            <span>{article.category_name}</span>
                                            <span>{article.author_name}</span>
                                            <span>{format_timestamp(&article.created_at)}</span>
                                        </div>
                                        <div class="article__body">{article.content}</div>
                                    </article>
                                }
                                    .into_any()
                            }
                            Ok(None) => {
                                view! { <p class="alert alert--error">"Article not found."</p> }
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p class="alert alert--error">"Could not load the article."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <a href="/news" class="back-link">
                "Back to news"
            </a>
        </div>
    }
}

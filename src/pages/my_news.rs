//! Author workspace: list, create, edit, delete (and for admins publish)
//! your articles.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::status_badge::StatusBadge;
use crate::net::Api;
use crate::net::types::{ListQuery, News, NewsQuery, NewsStatus, SortDir};
use crate::state::session::SessionStore;
use crate::util::format::format_timestamp;

#[component]
pub fn MyNewsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<SessionStore>();

    let page = RwSignal::new(1_u32);
    let keyword = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());
    let status_filter = RwSignal::new(Option::<NewsStatus>::None);

    // Editor dialog state.
    let show_editor = RwSignal::new(false);
    let editing = RwSignal::new(Option::<i64>::None);
    let form_title = RwSignal::new(String::new());
    let form_content = RwSignal::new(String::new());
    let form_category = RwSignal::new(0_i64);
    let form_error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let delete_target = RwSignal::new(Option::<News>::None);

    let list_api = api.clone();
    let news = LocalResource::new(move || {
        let api = list_api.clone();
        let page = page.get();
        let keyword = keyword.get();
        let status = status_filter.get();
        async move {
            let query = NewsQuery {
                list: ListQuery {
                    page: Some(page.saturating_sub(1)),
                    size: Some(10),
                    sort_by: Some("createdAt".to_owned()),
                    sort_dir: Some(SortDir::Desc),
                    keyword: (!keyword.is_empty()).then_some(keyword),
                },
                status,
                category_id: None,
            };
            api.news_list(&query).await
        }
    });

    let categories_api = api.clone();
    let categories = LocalResource::new(move || {
        let api = categories_api.clone();
        async move {
            let query = ListQuery { size: Some(100), ..ListQuery::default() };
            api.categories_list(&query).await
        }
    });

    let total_pages = Signal::derive(move || {
        news.get().and_then(Result::ok).map_or(1, |data| data.total_pages.max(1))
    });

    let run_search = move || {
        keyword.set(search_input.get());
        page.set(1);
    };

    let open_create = move |_| {
        editing.set(None);
        form_title.set(String::new());
        form_content.set(String::new());
        form_category.set(0);
        form_error.set(None);
        show_editor.set(true);
    };

    let edit_api = api.clone();
    let open_edit = move |id: i64| {
        editing.set(Some(id));
        form_error.set(None);
        show_editor.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = edit_api.clone();
            leptos::task::spawn_local(async move {
                if let Ok(detail) = api.news_detail(id).await {
                    form_title.set(detail.title);
                    form_content.set(detail.content);
                    form_category.set(detail.category_id);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &edit_api;
        }
    };

    let save_api = api.clone();
    let save = move |_| {
        if form_title.get().trim().is_empty() || form_content.get().trim().is_empty() {
            form_error.set(Some("Title and content are required".to_owned()));
            return;
        }
        if form_category.get() <= 0 {
            form_error.set(Some("Pick a category".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::NewsRequest;

            let api = save_api.clone();
            let request = NewsRequest {
                title: form_title.get().trim().to_owned(),
                content: form_content.get().trim().to_owned(),
                category_id: form_category.get(),
            };
            let target = editing.get();
            saving.set(true);
            leptos::task::spawn_local(async move {
                let outcome = match target {
                    Some(id) => api.update_news(id, &request).await,
                    None => api.create_news(&request).await,
                };
                saving.set(false);
                match outcome {
                    Ok(_) => {
                        show_editor.set(false);
                        news.refetch();
                    }
                    Err(_) => form_error.set(Some("Could not save the article".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &save_api;
        }
    };

    let delete_api = api.clone();
    let confirm_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = delete_target.get() {
                let api = delete_api.clone();
                leptos::task::spawn_local(async move {
                    if api.delete_news(target.id).await.is_ok() {
                        delete_target.set(None);
                        news.refetch();
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &delete_api;
        }
    };

    let publish_api = api.clone();
    let publish = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let api = publish_api.clone();
            leptos::task::spawn_local(async move {
                if api.publish_news(id).await.is_ok() {
                    news.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&publish_api, id);
        }
    };

    let is_admin = session.clone();

    view! {
        <div class="my-news-page">
            <header class="page-header">
                <h1>"My news"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ New article"
                </button>
            </header>

            <div class="filters">
                <input
                    type="text"
                    placeholder="Search..."
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
            </div>

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    let publish = publish.clone();
                    news.get()
                        .map(|result| match result {
                            Ok(data) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Title"</th>
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
                                                    let open_edit = open_edit.clone();
                                                    let publish = publish.clone();
                                                    let admin = is_admin.clone();
                                                    let row = item.clone();
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                <a href=format!("/news/{}", item.id)>{item.title}</a>
                                                            </td>
                                                            <td>{item.category_name}</td>
                                                            <td>
                                                                <StatusBadge status=item.status/>
                                                            </td>
                                                            <td>{format_timestamp(&item.created_at)}</td>
                                                            <td class="table__actions">
                                                                <button class="btn btn--small" on:click=move |_| open_edit(item.id)>
                                                                    "Edit"
                                                                </button>
                                                                <Show when=move || {
                                                                    admin.is_admin() && row.status == NewsStatus::Draft
                                                                }>
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
                                                                        let target = row.clone();
                                                                        move |_| delete_target.set(Some(target.clone()))
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
                                view! { <p class="alert alert--error">"Could not load your news."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Pagination page=page total_pages=total_pages/>

            <Show when=move || show_editor.get()>
                <div class="dialog-backdrop" on:click=move |_| show_editor.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || if editing.get().is_some() { "Edit article" } else { "New article" }}</h2>
                        <Show when=move || form_error.get().is_some()>
                            <p class="alert alert--error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <label class="field">
                            "Title"
                            <input
                                type="text"
                                prop:value=move || form_title.get()
                                on:input=move |ev| form_title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Category"
                            <select on:change=move |ev| {
                                form_category.set(event_target_value(&ev).parse().unwrap_or(0));
                            }>
                                <option value="0" selected=move || form_category.get() == 0>
                                    "Pick a category"
                                </option>
                                {move || {
                                    categories
                                        .get()
                                        .and_then(Result::ok)
                                        .map(|data| {
                                            data.content
                                                .into_iter()
                                                .map(|category| {
                                                    view! {
                                                        <option
                                                            value=category.id.to_string()
                                                            selected=move || form_category.get() == category.id
                                                        >
                                                            {category.name}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                            </select>
                        </label>
                        <label class="field">
                            "Content"
                            <textarea
                                prop:value=move || form_content.get()
                                on:input=move |ev| form_content.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_editor.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" disabled=move || saving.get() on:click=save.clone()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| delete_target.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete article"</h2>
                        <p>
                            {move || {
                                delete_target
                                    .get()
                                    .map(|target| format!("Delete \"{}\"? This cannot be undone.", target.title))
                                    .unwrap_or_default()
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| delete_target.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=confirm_delete.clone()>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

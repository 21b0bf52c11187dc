//! Category listing, with admin-only create, edit and delete.

use leptos::prelude::*;

use crate::net::Api;
use crate::net::types::{Category, ListQuery};
use crate::state::session::SessionStore;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<SessionStore>();

    let show_editor = RwSignal::new(false);
    let editing = RwSignal::new(Option::<i64>::None);
    let form_name = RwSignal::new(String::new());
    let form_error = RwSignal::new(Option::<String>::None);
    let delete_target = RwSignal::new(Option::<Category>::None);

    let list_api = api.clone();
    let categories = LocalResource::new(move || {
        let api = list_api.clone();
        async move {
            let query = ListQuery { size: Some(100), ..ListQuery::default() };
            api.categories_list(&query).await
        }
    });

    let open_create = move |_| {
        editing.set(None);
        form_name.set(String::new());
        form_error.set(None);
        show_editor.set(true);
    };

    let open_edit = move |category: &Category| {
        editing.set(Some(category.id));
        form_name.set(category.name.clone());
        form_error.set(None);
        show_editor.set(true);
    };

    let save_api = api.clone();
    let save = move |_| {
        if form_name.get().trim().is_empty() {
            form_error.set(Some("Name is required".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::CategoryRequest;

            let api = save_api.clone();
            // The backend derives the slug from the name.
            let request = CategoryRequest { name: form_name.get().trim().to_owned() };
            let target = editing.get();
            leptos::task::spawn_local(async move {
                let outcome = match target {
                    Some(id) => api.update_category(id, &request).await,
                    None => api.create_category(&request).await,
                };
                match outcome {
                    Ok(_) => {
                        show_editor.set(false);
                        categories.refetch();
                    }
                    Err(_) => form_error.set(Some("Could not save the category".to_owned())),
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
                    if api.delete_category(target.id).await.is_ok() {
                        delete_target.set(None);
                        categories.refetch();
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &delete_api;
        }
    };

    let admin_header = session.clone();
    let admin_rows = session.clone();

    view! {
        <div class="categories-page">
            <header class="page-header">
                <h1>"Categories"</h1>
                <Show when=move || admin_header.is_admin()>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ New category"
                    </button>
                </Show>
            </header>

            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    let open_edit = open_edit.clone();
                    let admin = admin_rows.clone();
                    categories
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                view! {
                                    <div class="category-grid">
                                        {data
                                            .content
                                            .into_iter()
                                            .map(|category| {
                                                let open_edit = open_edit.clone();
                                                let admin = admin.clone();
                                                let edit_source = category.clone();
                                                let delete_source = category.clone();
                                                view! {
                                                    <div class="card category-card">
                                                        <h2>{category.name.clone()}</h2>
                                                        <p class="muted">{category.slug.clone()}</p>
                                                        <Show when=move || admin.is_admin()>
                                                            <div class="category-card__actions">
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click={
                                                                        let open_edit = open_edit.clone();
                                                                        let source = edit_source.clone();
                                                                        move |_| open_edit(&source)
                                                                    }
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click={
                                                                        let source = delete_source.clone();
                                                                        move |_| delete_target.set(Some(source.clone()))
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </div>
                                                        </Show>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p class="alert alert--error">"Could not load categories."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_editor.get()>
                <div class="dialog-backdrop" on:click=move |_| show_editor.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || if editing.get().is_some() { "Edit category" } else { "New category" }}</h2>
                        <Show when=move || form_error.get().is_some()>
                            <p class="alert alert--error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <label class="field">
                            "Name"
                            <input
                                type="text"
                                prop:value=move || form_name.get()
                                on:input=move |ev| form_name.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_editor.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" on:click=save.clone()>
                                "Save"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| delete_target.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete category"</h2>
                        <p>
                            {move || {
                                delete_target
                                    .get()
                                    .map(|target| format!("Delete \"{}\"?", target.name))
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

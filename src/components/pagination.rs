//! Previous/next page control for paginated lists.

use leptos::prelude::*;

/// Pager over a one-based page signal. Hidden entirely when there is only
/// one page.
#[component]
pub fn Pagination(page: RwSignal<u32>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    let has_previous = move || page.get() > 1;
    let has_next = move || page.get() < total_pages.get().max(1);

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination">
                <button
                    class="btn"
                    disabled=move || !has_previous()
                    on:click=move |_| {
                        if has_previous() {
                            page.update(|p| *p -= 1);
                        }
                    }
                >
                    "Previous"
                </button>
                <span class="pagination__label">
                    {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
                </span>
                <button
                    class="btn"
                    disabled=move || !has_next()
                    on:click=move |_| {
                        if has_next() {
                            page.update(|p| *p += 1);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

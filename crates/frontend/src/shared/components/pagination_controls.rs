use leptos::prelude::*;

/// PaginationControls component - нумерованная полоса страниц + выбор размера
///
/// Страницы 1-базные: одна кнопка на страницу от 1 до total_pages,
/// текущая помечена как активная. При нуле страниц полоса пустая.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items in the derived list
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [5, 10, 20, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![5, 10, 20, 50]);

    view! {
        <div class="pagination-controls">
            <For
                each=move || 1..=total_pages.get()
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class=move || if current_page.get() == page {
                                "pagination-btn pagination-btn--active"
                            } else {
                                "pagination-btn"
                            }
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page.to_string()}
                        </button>
                    }
                }
            />
            <span class="pagination-info">
                {move || format!("Всего: {}", total_count.get())}
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(5);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

mod state;

use contracts::catalog::Product;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::product::api;
use crate::domain::product::ui::details::ProductDetails;
use crate::domain::product::ui::view::ProductView;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::export::{build_csv, download_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::shared::number_format::format_price;
use state::create_state;

const EXPORT_FILENAME: &str = "products_view.csv";

/// Фиксированный формат выгрузки: title и category в кавычках,
/// id и price без кавычек. Вложенные кавычки не экранируются.
impl CsvExportable for Product {
    fn csv_header() -> &'static str {
        "id,title,price,category"
    }

    fn to_csv_line(&self) -> String {
        format!(
            "{},\"{}\",{},\"{}\"",
            self.id,
            self.title,
            self.price,
            self.category_name()
        )
    }
}

/// Одно блокирующее уведомление об ошибке
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_product: RwSignal<Option<Product>> = RwSignal::new(None);
    let viewing_product: RwSignal<Option<Product>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_products().await;
            // Ошибка не мутирует состояние, повторов нет
            let mut failure = None;
            state.update(|s| failure = s.apply_load_result(result));
            if let Some(e) = failure {
                log::error!("Не удалось загрузить товары: {}", e);
                notify(&format!("Не удалось загрузить товары: {}", e));
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let apply_search = move |text: String| {
        state.update(|s| s.apply_search(text));
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| s.sort_by(field));
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.goto_page(page));
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
    };

    // Поиск по полному списку: просмотр/редактирование не зависят от фильтра
    let open_view = move |id: i64| {
        viewing_product.set(state.with_untracked(|s| s.find(id).cloned()));
    };

    let open_edit = move |id: i64| {
        editing_product.set(state.with_untracked(|s| s.find(id).cloned()));
    };

    // Экспортируется только видимая страница, не весь отфильтрованный список
    let export_csv = move |_| {
        let rows = state.with_untracked(|s| s.visible_page());
        if rows.is_empty() {
            notify("Нет данных для экспорта");
            return;
        }
        let content = build_csv(&rows);
        if let Err(e) = download_csv(&content, EXPORT_FILENAME) {
            log::error!("Экспорт не удался: {}", e);
            notify(&format!("Экспорт не удался: {}", e));
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Товары"</h1>
                    <Badge>
                        {move || state.with(|s| s.filtered.len().to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Новый"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export_csv
                    >
                        {icon("download")}
                        " Экспорт CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                on_change=Callback::new(apply_search)
                                placeholder="Поиск по названию..."
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=Signal::derive(move || state.with(|s| s.page_count()))
                                total_count=Signal::derive(move || state.with(|s| s.filtered.len()))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                    </div>
                </div>

                {move || if loading.get() {
                    view! {
                        <div class="table-loading">
                            <Spinner size=SpinnerSize::Small />
                            <span>"Загрузка товаров..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Фото"</TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("title")>
                                        "Название"
                                        <span>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "title", s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("price")>
                                        "Цена"
                                        <span>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "price", s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"Категория"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible_page())
                                key=|p| p.id
                                children=move |product| {
                                    let product_id = product.id;
                                    let image = product.first_image().to_string();
                                    let category = product.category_name().to_string();
                                    let description = product.description.clone();
                                    view! {
                                        // Тултип с описанием, клик по строке - просмотр
                                        <TableRow
                                            attr:title=description
                                            on:click=move |_| open_view(product_id)
                                        >
                                            <TableCell>
                                                <TableCellLayout>{product.id.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <img class="table__thumb" src=image alt="" />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product.title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("${}", format_price(product.price))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |ev: MouseEvent| {
                                                        ev.stop_propagation();
                                                        open_edit(product_id);
                                                    }
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_create_form.get() {
                    view! {
                        <ProductDetails
                            product=None
                            on_close=Callback::new(move |_| set_show_create_form.set(false))
                            on_saved=Callback::new(move |_| {
                                set_show_create_form.set(false);
                                load_data();
                            })
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing_product.get().map(|product| view! {
                    <ProductDetails
                        product=Some(product)
                        on_close=Callback::new(move |_| editing_product.set(None))
                        on_saved=Callback::new(move |_| {
                            editing_product.set(None);
                            load_data();
                        })
                    />
                })}

                {move || viewing_product.get().map(|product| {
                    let product_id = product.id;
                    view! {
                        <ProductView
                            product=product
                            on_close=Callback::new(move |_| viewing_product.set(None))
                            on_edit=Callback::new(move |_| {
                                viewing_product.set(None);
                                open_edit(product_id);
                            })
                        />
                    }
                })}
            </div>
        </div>
    }
}

use contracts::catalog::Product;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_timestamp_opt;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_price;

/// Диалог просмотра товара: только чтение плюс переход к редактированию
#[component]
pub fn ProductView(
    product: Product,
    on_close: Callback<()>,
    on_edit: Callback<()>,
) -> impl IntoView {
    let title = format!("Товар №{}", product.id);
    let image = product.first_image().to_string();
    let category = if product.category_name().is_empty() {
        "-".to_string()
    } else {
        product.category_name().to_string()
    };

    view! {
        <Modal title=title on_close=on_close>
            <div class="product-view">
                {if image.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! { <img class="product-view__image" src=image alt="" /> }.into_any()
                }}

                <div class="product-view__row">
                    <span class="product-view__label">"Название"</span>
                    <span>{product.title.clone()}</span>
                </div>
                <div class="product-view__row">
                    <span class="product-view__label">"Цена"</span>
                    <span>{format!("${}", format_price(product.price))}</span>
                </div>
                <div class="product-view__row">
                    <span class="product-view__label">"Категория"</span>
                    <span>{category}</span>
                </div>
                <div class="product-view__row">
                    <span class="product-view__label">"Описание"</span>
                    <span>{product.description.clone()}</span>
                </div>
                <div class="product-view__row">
                    <span class="product-view__label">"Создан"</span>
                    <span>{format_timestamp_opt(&product.creation_at)}</span>
                </div>
                <div class="product-view__row">
                    <span class="product-view__label">"Обновлён"</span>
                    <span>{format_timestamp_opt(&product.updated_at)}</span>
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                >
                    "Закрыть"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_edit.run(())
                >
                    {icon("edit")}
                    " Редактировать"
                </Button>
            </div>
        </Modal>
    }
}

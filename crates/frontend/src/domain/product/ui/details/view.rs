use contracts::catalog::Product;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ProductDetailsViewModel;
use crate::shared::modal::Modal;

/// Модальная форма создания/редактирования товара.
/// `product = None` — создание, `Some` — редактирование.
#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = match &product {
        Some(p) => ProductDetailsViewModel::from_product(p),
        None => ProductDetailsViewModel::new(),
    };

    let title = if vm.is_edit_mode() {
        "Редактирование товара"
    } else {
        "Новый товар"
    };

    let error = vm.error;
    let saving = vm.saving;
    let image_url = vm.image_url;

    view! {
        <Modal title=title.to_string() on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Название"</Label>
                <Input
                    value=vm.title
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>"Цена"</Label>
                <Input
                    value=vm.price
                    placeholder="0.00"
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>"Описание"</Label>
                <Textarea
                    value=vm.description
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>"ID категории"</Label>
                <Input
                    value=vm.category_id
                    placeholder="1"
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>"URL картинки"</Label>
                <Input
                    value=vm.image_url
                    placeholder="https://..."
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            {move || {
                let url = image_url.get();
                if url.trim().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <div class="form__group">
                            <img class="form__image-preview" src=url alt="Превью" />
                        </div>
                    }.into_any()
                }
            }}

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </Button>
            </div>
        </Modal>
    }
}

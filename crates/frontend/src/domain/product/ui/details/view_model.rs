use contracts::catalog::{Product, ProductPayload};
use leptos::prelude::*;

use crate::domain::product::api;

/// ViewModel формы создания/редактирования товара.
///
/// Поля формы хранятся сырыми строками, приведение типов происходит
/// только при сборке payload (правила приведения живут в contracts).
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: Option<i64>,
    pub title: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    /// Пустая форма создания, категория по умолчанию 1
    pub fn new() -> Self {
        Self {
            id: None,
            title: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category_id: RwSignal::new("1".to_string()),
            image_url: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Форма редактирования: отсутствующая категория становится 1,
    /// отсутствующая картинка — пустой строкой
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            title: RwSignal::new(product.title.clone()),
            price: RwSignal::new(product.price.to_string()),
            description: RwSignal::new(product.description.clone()),
            category_id: RwSignal::new(product.category_id_or_default().to_string()),
            image_url: RwSignal::new(product.first_image().to_string()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Собирает тело запроса из текущих значений формы
    pub fn payload(&self) -> ProductPayload {
        ProductPayload::from_form(
            self.title.get_untracked(),
            &self.price.get_untracked(),
            self.description.get_untracked(),
            &self.category_id.get_untracked(),
            self.image_url.get_untracked(),
        )
    }

    /// Сохранение: успех закрывает диалог через on_saved, ошибка остаётся
    /// в открытом диалоге и список не перечитывается
    pub fn save_command(&self, on_saved: Callback<()>) {
        let id = self.id;
        let payload = self.payload();
        let error = self.error;
        let saving = self.saving;

        saving.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_product(id, &payload).await,
                None => api::create_product(&payload).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Ошибка сохранения товара: {}", e);
                    error.set(Some(format!("Ошибка сохранения: {}", e)));
                    saving.set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::Category;

    #[test]
    fn test_new_form_defaults() {
        let vm = ProductDetailsViewModel::new();
        assert!(!vm.is_edit_mode());
        assert_eq!(vm.category_id.get_untracked(), "1");

        let payload = vm.payload();
        assert_eq!(payload.price, 0.0);
        assert_eq!(payload.category_id, 1);
        assert_eq!(payload.images, vec!["".to_string()]);
    }

    #[test]
    fn test_from_product_degrades_missing_fields() {
        let product = Product {
            id: 7,
            title: "Kettle".to_string(),
            price: 25.5,
            description: "boils water".to_string(),
            category: None,
            images: Vec::new(),
            creation_at: None,
            updated_at: None,
        };
        let vm = ProductDetailsViewModel::from_product(&product);
        assert!(vm.is_edit_mode());
        assert_eq!(vm.price.get_untracked(), "25.5");
        assert_eq!(vm.category_id.get_untracked(), "1");
        assert_eq!(vm.image_url.get_untracked(), "");
    }

    #[test]
    fn test_payload_from_edited_form() {
        let product = Product {
            id: 7,
            title: "Kettle".to_string(),
            price: 25.5,
            description: String::new(),
            category: Some(Category {
                id: 3,
                name: "Home".to_string(),
                image: None,
            }),
            images: vec!["https://example.com/kettle.png".to_string()],
            creation_at: None,
            updated_at: None,
        };
        let vm = ProductDetailsViewModel::from_product(&product);
        vm.price.set("30".to_string());

        let payload = vm.payload();
        assert_eq!(payload.title, "Kettle");
        assert_eq!(payload.price, 30.0);
        assert_eq!(payload.category_id, 3);
        assert_eq!(
            payload.images,
            vec!["https://example.com/kettle.png".to_string()]
        );
    }
}

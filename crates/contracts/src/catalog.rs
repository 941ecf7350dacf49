use serde::{Deserialize, Serialize};

// ============================================================================
// Product (wire format of the catalog API)
// ============================================================================

/// Категория товара. API гарантирует только {id, name},
/// остальные поля переносим как есть.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Товар каталога, как его отдаёт удалённый API.
/// Запись внешняя: id присваивает сервер, мы её не изменяем
/// иначе как через явные create/update вызовы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    /// Категория может отсутствовать — деградируем до пустого имени / id 1
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Серверные timestamps, только для отображения
    #[serde(rename = "creationAt", skip_serializing_if = "Option::is_none")]
    pub creation_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Product {
    /// Имя категории для таблицы/экспорта (пустая строка если нет)
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    /// ID категории для формы редактирования: отсутствие или 0 -> 1
    pub fn category_id_or_default(&self) -> i64 {
        self.category
            .as_ref()
            .map(|c| c.id)
            .filter(|&id| id != 0)
            .unwrap_or(1)
    }

    /// Первая картинка (пустая строка если список пуст)
    pub fn first_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса create/update. API ждёт categoryId в camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub images: Vec<String>,
}

impl ProductPayload {
    /// Собрать payload из сырых строк формы.
    /// images всегда одноэлементный список — даже если URL пуст.
    pub fn from_form(
        title: String,
        price_raw: &str,
        description: String,
        category_raw: &str,
        image_url: String,
    ) -> Self {
        Self {
            title,
            price: coerce_price(price_raw),
            description,
            category_id: coerce_category_id(category_raw),
            images: vec![image_url],
        }
    }
}

// ============================================================================
// Coercion rules
// ============================================================================

/// Цена из строки формы: нечисловой ввод превращается в 0, не в ошибку
pub fn coerce_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// ID категории из строки формы: пустая строка, нечисловой ввод
/// или 0 сворачиваются в категорию по умолчанию (1)
pub fn coerce_category_id(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|&id| id != 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price("19.99"), 19.99);
        assert_eq!(coerce_price(" 5 "), 5.0);
        assert_eq!(coerce_price(""), 0.0);
        assert_eq!(coerce_price("abc"), 0.0);
    }

    #[test]
    fn test_coerce_category_id() {
        assert_eq!(coerce_category_id("3"), 3);
        assert_eq!(coerce_category_id("-2"), -2);
        assert_eq!(coerce_category_id("0"), 1);
        assert_eq!(coerce_category_id(""), 1);
        assert_eq!(coerce_category_id("x"), 1);
        assert_eq!(coerce_category_id("7.5"), 1);
    }

    #[test]
    fn test_payload_from_empty_form_fields() {
        let p = ProductPayload::from_form(
            "X".into(),
            "10",
            "d".into(),
            "",
            "".into(),
        );
        assert_eq!(p.price, 10.0);
        assert_eq!(p.category_id, 1);
        assert_eq!(p.images, vec!["".to_string()]);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let p = ProductPayload {
            title: "Chair".into(),
            price: 49.5,
            description: "wooden".into(),
            category_id: 2,
            images: vec!["https://example.com/1.png".into()],
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Chair",
                "price": 49.5,
                "description": "wooden",
                "categoryId": 2,
                "images": ["https://example.com/1.png"],
            })
        );
    }

    #[test]
    fn test_product_deserializes_api_record() {
        let raw = r#"{
            "id": 4,
            "title": "Handmade Fresh Table",
            "price": 687,
            "description": "Andy shoes are designed to keeping in mind durability",
            "category": {
                "id": 5,
                "name": "Others",
                "image": "https://placeimg.com/640/480/any"
            },
            "images": ["https://placeimg.com/640/480/any"],
            "creationAt": "2023-01-03T10:13:22.000Z",
            "updatedAt": "2023-01-05T18:40:01.000Z"
        }"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, 4);
        assert_eq!(p.price, 687.0);
        assert_eq!(p.category_name(), "Others");
        assert_eq!(p.category_id_or_default(), 5);
        assert_eq!(p.first_image(), "https://placeimg.com/640/480/any");
        assert!(p.creation_at.is_some());
        assert!(p.updated_at.is_some());
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let raw = r#"{"id": 9, "title": "Kettle", "price": 12.5, "description": ""}"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.category_name(), "");
        assert_eq!(p.category_id_or_default(), 1);
        assert_eq!(p.first_image(), "");
        assert!(p.images.is_empty());
        assert!(p.creation_at.is_none());
    }
}

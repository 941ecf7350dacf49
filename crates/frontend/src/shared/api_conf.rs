//! Конфигурация удалённого API каталога.
//!
//! Приложение целиком клиентское: база API фиксированная,
//! из window.location ничего не выводим.

/// База REST API каталога товаров
pub const API_BASE: &str = "https://api.escuelajs.co/api/v1";

/// URL коллекции товаров (GET список, POST создание)
pub fn products_url() -> String {
    format!("{}/products", API_BASE)
}

/// URL конкретного товара (PUT обновление)
pub fn product_url(id: i64) -> String {
    format!("{}/products/{}", API_BASE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            products_url(),
            "https://api.escuelajs.co/api/v1/products"
        );
        assert_eq!(
            product_url(42),
            "https://api.escuelajs.co/api/v1/products/42"
        );
    }
}

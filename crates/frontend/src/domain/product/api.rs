use contracts::catalog::{Product, ProductPayload};
use gloo_net::http::Request;

use crate::shared::api_conf::{product_url, products_url};

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&products_url())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new product
///
/// Тело ответа не используется — после успеха список перечитывается целиком.
pub async fn create_product(payload: &ProductPayload) -> Result<(), String> {
    let response = Request::post(&products_url())
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create product: {}", response.status()));
    }

    Ok(())
}

/// Update product
pub async fn update_product(id: i64, payload: &ProductPayload) -> Result<(), String> {
    let response = Request::put(&product_url(id))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update product: {}", response.status()));
    }

    Ok(())
}

//! Product Endpoints

use super::{ApiClient, ApiError, ApiRequest, Method};
use crate::models::{NewProduct, Product};

pub const PRODUCT_PATH: &str = "/api/Product";

pub async fn list_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    client.get_json(PRODUCT_PATH).await
}

pub async fn create_product(client: &ApiClient, product: &NewProduct) -> Result<String, ApiError> {
    let request = ApiRequest::new(Method::Post, PRODUCT_PATH).json(product)?;
    client.send_text(request).await
}

pub async fn update_product(client: &ApiClient, product: &Product) -> Result<String, ApiError> {
    let request = ApiRequest::new(Method::Put, PRODUCT_PATH).json(product)?;
    client.send_text(request).await
}

/// Unlike categories, the product id travels in the query string
pub async fn delete_product(client: &ApiClient, id: u32) -> Result<String, ApiError> {
    let request = ApiRequest::new(Method::Delete, PRODUCT_PATH).query("id", id.to_string());
    client.send_text(request).await
}

//! Category Endpoints

use super::{ApiClient, ApiError, ApiRequest, Method};
use crate::models::{Category, IdBody, NewCategory};

pub const CATEGORY_PATH: &str = "/api/Category";

pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client.get_json(CATEGORY_PATH).await
}

pub async fn create_category(client: &ApiClient, category: &NewCategory) -> Result<String, ApiError> {
    let request = ApiRequest::new(Method::Post, CATEGORY_PATH).json(category)?;
    client.send_text(request).await
}

pub async fn update_category(client: &ApiClient, category: &Category) -> Result<String, ApiError> {
    let request = ApiRequest::new(Method::Put, CATEGORY_PATH).json(category)?;
    client.send_text(request).await
}

/// The backend reads the id from the request body for this resource
pub async fn delete_category(client: &ApiClient, id: u32) -> Result<String, ApiError> {
    let request = ApiRequest::new(Method::Delete, CATEGORY_PATH).json(&IdBody { id })?;
    client.send_text(request).await
}

//! # Category Endpoints

use shared::{ApiResponse, Category, CategoryRequest};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::Result;

/// Public category listing (bare array).
pub async fn list_public(client: &ApiClient) -> Result<Vec<Category>> {
    client.get("/categories/public", RequestOptions::new()).await
}

pub async fn create(client: &ApiClient, request: &CategoryRequest) -> Result<Category> {
    let response: ApiResponse<Category> = client
        .post("/categories", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn update(client: &ApiClient, id: i64, request: &CategoryRequest) -> Result<Category> {
    let response: ApiResponse<Category> = client
        .put(&format!("/categories/{}", id), request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    let _: ApiResponse<serde_json::Value> = client
        .delete(&format!("/categories/{}", id), RequestOptions::new())
        .await?;
    Ok(())
}

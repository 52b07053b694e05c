//! # Campaign Endpoints
//!
//! Public discovery, owner management and media uploads.
//!
//! The public listing returns the paginated envelope directly, while the
//! owner listing wraps it in the generic envelope. Both shapes are fixed per
//! endpoint.

use shared::{
    ApiResponse, Campaign, CampaignQuery, CreateCampaignRequest, Page, PageRequest,
    UpdateCampaignRequest,
};

use super::client::{ApiClient, RequestOptions};
use super::transport::{FileUpload, MultipartForm};
use crate::core::error::Result;

pub const BUSINESS_PROFILE_HEADER: &str = "X-Business-Profile-Id";

/// Public listing with optional category and search filters.
pub async fn list_public(client: &ApiClient, query: &CampaignQuery) -> Result<Page<Campaign>> {
    client
        .get(
            "/campaigns/public",
            RequestOptions::new().with_query(query.to_query()),
        )
        .await
}

pub async fn get_public(client: &ApiClient, id: i64) -> Result<Campaign> {
    let response: ApiResponse<Campaign> = client
        .get(&format!("/campaigns/public/{}", id), RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

/// Campaigns owned by the signed-in business user.
pub async fn list_mine(client: &ApiClient, page: PageRequest) -> Result<Page<Campaign>> {
    let response: ApiResponse<Page<Campaign>> = client
        .get("/campaigns/my", RequestOptions::new().with_query(page.to_query()))
        .await?;
    Ok(response.into_data())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Campaign> {
    let response: ApiResponse<Campaign> = client
        .get(&format!("/campaigns/{}", id), RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

/// Create a draft under the given business profile.
#[tracing::instrument(skip(client, request), fields(title = %request.title))]
pub async fn create(
    client: &ApiClient,
    request: &CreateCampaignRequest,
    business_profile_id: Option<i64>,
) -> Result<Campaign> {
    let options = RequestOptions::new()
        .with_optional_header(BUSINESS_PROFILE_HEADER, business_profile_id);
    let response: ApiResponse<Campaign> = client.post("/campaigns", request, options).await?;
    Ok(response.into_data())
}

pub async fn update(client: &ApiClient, id: i64, request: &UpdateCampaignRequest) -> Result<Campaign> {
    let response: ApiResponse<Campaign> = client
        .put(&format!("/campaigns/{}", id), request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn submit_for_review(client: &ApiClient, id: i64) -> Result<Campaign> {
    let response: ApiResponse<Campaign> = client
        .post_empty(&format!("/campaigns/{}/submit", id), RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn upload_cover_image(client: &ApiClient, id: i64, file: FileUpload) -> Result<Campaign> {
    let form = MultipartForm::new().file("file", file);
    let response: ApiResponse<Campaign> = client
        .upload(&format!("/campaigns/{}/cover-image", id), form, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

/// Every photo goes under the same `files` field.
pub async fn upload_photos(client: &ApiClient, id: i64, files: Vec<FileUpload>) -> Result<Campaign> {
    let form = files
        .into_iter()
        .fold(MultipartForm::new(), |form, file| form.file("files", file));
    let response: ApiResponse<Campaign> = client
        .upload(&format!("/campaigns/{}/photos", id), form, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    let _: ApiResponse<serde_json::Value> = client
        .delete(&format!("/campaigns/{}", id), RequestOptions::new())
        .await?;
    Ok(())
}

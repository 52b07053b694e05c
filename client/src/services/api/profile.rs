//! # Profile Endpoints
//!
//! The signed-in user's profile and business profiles.

use shared::{ApiResponse, BusinessProfile, CreateBusinessProfileRequest, UpdateProfileRequest, UserProfile};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::Result;

/// Fetch the authenticated user's profile. A 401 here forces logout.
pub async fn get_me(client: &ApiClient) -> Result<UserProfile> {
    let response: ApiResponse<UserProfile> = client.get("/users/me", RequestOptions::new()).await?;
    Ok(response.into_data())
}

pub async fn update_me(client: &ApiClient, request: &UpdateProfileRequest) -> Result<UserProfile> {
    let response: ApiResponse<UserProfile> = client
        .put("/users/me", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn list_business_profiles(client: &ApiClient) -> Result<Vec<BusinessProfile>> {
    let response: ApiResponse<Vec<BusinessProfile>> = client
        .get("/users/me/business-profiles", RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn create_business_profile(
    client: &ApiClient,
    request: &CreateBusinessProfileRequest,
) -> Result<BusinessProfile> {
    let response: ApiResponse<BusinessProfile> = client
        .post("/users/me/business-profiles", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

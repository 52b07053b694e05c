//! # Investment Endpoints

use shared::{ApiResponse, CreateInvestmentRequest, Investment, Page, PageRequest};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::Result;

#[tracing::instrument(skip(client, request), fields(campaign_id = request.campaign_id, amount = request.amount))]
pub async fn create(client: &ApiClient, request: &CreateInvestmentRequest) -> Result<Investment> {
    let response: ApiResponse<Investment> = client
        .post("/investments", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn list_mine(client: &ApiClient, page: PageRequest) -> Result<Page<Investment>> {
    client
        .get("/investments/my", RequestOptions::new().with_query(page.to_query()))
        .await
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Investment> {
    let response: ApiResponse<Investment> = client
        .get(&format!("/investments/{}", id), RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn cancel(client: &ApiClient, id: i64) -> Result<Investment> {
    let response: ApiResponse<Investment> = client
        .post_empty(&format!("/investments/{}/cancel", id), RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

/// Investments received by one campaign, for its owner.
pub async fn list_for_campaign(
    client: &ApiClient,
    campaign_id: i64,
    page: PageRequest,
) -> Result<Page<Investment>> {
    client
        .get(
            &format!("/campaigns/{}/investments", campaign_id),
            RequestOptions::new().with_query(page.to_query()),
        )
        .await
}

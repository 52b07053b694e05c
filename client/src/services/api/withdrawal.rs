//! # Withdrawal Endpoints

use shared::{ApiResponse, CreateWithdrawalRequest, Page, PageRequest, Withdrawal};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::Result;

pub async fn create(client: &ApiClient, request: &CreateWithdrawalRequest) -> Result<Withdrawal> {
    let response: ApiResponse<Withdrawal> = client
        .post("/withdrawals", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn list_mine(client: &ApiClient, page: PageRequest) -> Result<Page<Withdrawal>> {
    client
        .get("/withdrawals/my", RequestOptions::new().with_query(page.to_query()))
        .await
}

pub async fn cancel(client: &ApiClient, id: i64) -> Result<Withdrawal> {
    let response: ApiResponse<Withdrawal> = client
        .post_empty(&format!("/withdrawals/{}/cancel", id), RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

//! # Wallet Endpoints
//!
//! Balance, deposits and transaction history.

use shared::{ApiResponse, DepositRequest, DepositResult, Page, PageRequest, Wallet, WalletTransaction};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::Result;

pub async fn get(client: &ApiClient) -> Result<Wallet> {
    let response: ApiResponse<Wallet> = client.get("/wallet", RequestOptions::new()).await?;
    Ok(response.into_data())
}

#[tracing::instrument(skip(client, request), fields(amount = request.amount))]
pub async fn deposit(client: &ApiClient, request: &DepositRequest) -> Result<DepositResult> {
    let response: ApiResponse<DepositResult> = client
        .post("/wallet/deposit", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn transactions(client: &ApiClient, page: PageRequest) -> Result<Page<WalletTransaction>> {
    client
        .get(
            "/wallet/transactions",
            RequestOptions::new().with_query(page.to_query()),
        )
        .await
}

//! # Admin Endpoints
//!
//! Dashboard, user management and the three review queues (campaigns, KYC
//! documents, withdrawals). Every mutating call carries the acting admin's
//! id in `X-Admin-Id`.

use shared::{
    AdminDashboardStats, AdminUser, ApiResponse, Campaign, KycDocument, Page, PageRequest,
    RejectRequest, UserStatusRequest, Withdrawal,
};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::Result;

pub const ADMIN_ID_HEADER: &str = "X-Admin-Id";

/// Review decision on a queued item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject { reason: String },
}

fn admin_options(admin_id: Option<i64>) -> RequestOptions {
    RequestOptions::new().with_optional_header(ADMIN_ID_HEADER, admin_id)
}

async fn decide<T: serde::de::DeserializeOwned>(
    client: &ApiClient,
    queue: &str,
    id: i64,
    decision: &Decision,
    admin_id: Option<i64>,
) -> Result<T> {
    let response: ApiResponse<T> = match decision {
        Decision::Approve => {
            client
                .post_empty(&format!("/admin/{}/{}/approve", queue, id), admin_options(admin_id))
                .await?
        }
        Decision::Reject { reason } => {
            let body = RejectRequest {
                reason: reason.clone(),
            };
            client
                .post(&format!("/admin/{}/{}/reject", queue, id), &body, admin_options(admin_id))
                .await?
        }
    };
    Ok(response.into_data())
}

pub async fn dashboard(client: &ApiClient) -> Result<AdminDashboardStats> {
    let response: ApiResponse<AdminDashboardStats> = client
        .get("/admin/dashboard", RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn list_users(client: &ApiClient, page: PageRequest) -> Result<Page<AdminUser>> {
    let response: ApiResponse<Page<AdminUser>> = client
        .get("/admin/users", RequestOptions::new().with_query(page.to_query()))
        .await?;
    Ok(response.into_data())
}

#[tracing::instrument(skip(client))]
pub async fn set_user_active(
    client: &ApiClient,
    user_id: i64,
    active: bool,
    admin_id: Option<i64>,
) -> Result<AdminUser> {
    let response: ApiResponse<AdminUser> = client
        .patch(
            &format!("/admin/users/{}/status", user_id),
            &UserStatusRequest { active },
            admin_options(admin_id),
        )
        .await?;
    Ok(response.into_data())
}

pub async fn pending_campaigns(client: &ApiClient, page: PageRequest) -> Result<Page<Campaign>> {
    client
        .get(
            "/admin/campaigns/pending",
            RequestOptions::new().with_query(page.to_query()),
        )
        .await
}

pub async fn review_campaign(
    client: &ApiClient,
    id: i64,
    decision: &Decision,
    admin_id: Option<i64>,
) -> Result<Campaign> {
    decide(client, "campaigns", id, decision, admin_id).await
}

pub async fn pending_kyc(client: &ApiClient, page: PageRequest) -> Result<Page<KycDocument>> {
    client
        .get("/admin/kyc/pending", RequestOptions::new().with_query(page.to_query()))
        .await
}

pub async fn review_kyc(
    client: &ApiClient,
    id: i64,
    decision: &Decision,
    admin_id: Option<i64>,
) -> Result<KycDocument> {
    decide(client, "kyc", id, decision, admin_id).await
}

pub async fn pending_withdrawals(client: &ApiClient, page: PageRequest) -> Result<Page<Withdrawal>> {
    client
        .get(
            "/admin/withdrawals/pending",
            RequestOptions::new().with_query(page.to_query()),
        )
        .await
}

pub async fn review_withdrawal(
    client: &ApiClient,
    id: i64,
    decision: &Decision,
    admin_id: Option<i64>,
) -> Result<Withdrawal> {
    decide(client, "withdrawals", id, decision, admin_id).await
}

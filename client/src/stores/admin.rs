//! # Admin Container
//!
//! Dashboard counters, user management, category management and the three
//! review queues. Approving or rejecting an item takes it out of its queue;
//! toggling a user's active flag patches that user in place.
//!
//! Mutations carry the acting admin's id (see [`AdminStore::set_admin_id`]).

use std::sync::Arc;

use shared::{
    AdminDashboardStats, AdminUser, Campaign, Category, CategoryRequest, KycDocument, PageRequest,
    Withdrawal,
};

use super::{patch_by_id, prepend, remove_by_id, Listing, Snapshot, StateCell};
use crate::services::api::admin::{self, Decision};
use crate::services::api::{category, ApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub admin_id: Option<i64>,
    pub dashboard: Option<AdminDashboardStats>,
    pub users: Listing<AdminUser>,
    pub categories: Vec<Category>,
    pub pending_campaigns: Listing<Campaign>,
    pub pending_kyc: Listing<KycDocument>,
    pub pending_withdrawals: Listing<Withdrawal>,
}

pub struct AdminStore {
    client: Arc<ApiClient>,
    state: StateCell<AdminState>,
}

impl AdminStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: StateCell::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<AdminState> {
        self.state.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    /// Id sent as `X-Admin-Id` on every admin mutation.
    pub fn set_admin_id(&self, admin_id: Option<i64>) {
        self.state.update(|s| s.admin_id = admin_id);
    }

    fn admin_id(&self) -> Option<i64> {
        self.state.read(|s| s.admin_id)
    }

    pub async fn fetch_dashboard(&self) {
        let _ = self
            .state
            .run(
                "fetch_admin_dashboard",
                "Failed to load dashboard",
                admin::dashboard(&self.client),
                |s, stats| s.dashboard = Some(stats),
            )
            .await;
    }

    pub async fn fetch_users(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_users",
                "Failed to load users",
                admin::list_users(&self.client, page),
                |s, page| s.users = Listing::from(page),
            )
            .await;
    }

    pub async fn set_user_active(&self, user_id: i64, active: bool) {
        let admin_id = self.admin_id();
        let _ = self
            .state
            .run(
                "set_user_active",
                "Failed to update user status",
                admin::set_user_active(&self.client, user_id, active, admin_id),
                |s, user| {
                    patch_by_id(&mut s.users.items, user);
                },
            )
            .await;
    }

    pub async fn fetch_categories(&self) {
        let _ = self
            .state
            .run(
                "fetch_categories",
                "Failed to load categories",
                category::list_public(&self.client),
                |s, categories| s.categories = categories,
            )
            .await;
    }

    pub async fn create_category(&self, request: CategoryRequest) {
        let _ = self
            .state
            .run(
                "create_category",
                "Failed to create category",
                category::create(&self.client, &request),
                |s, created| prepend(&mut s.categories, created),
            )
            .await;
    }

    pub async fn update_category(&self, id: i64, request: CategoryRequest) {
        let _ = self
            .state
            .run(
                "update_category",
                "Failed to update category",
                category::update(&self.client, id, &request),
                |s, updated| {
                    patch_by_id(&mut s.categories, updated);
                },
            )
            .await;
    }

    pub async fn delete_category(&self, id: i64) {
        let _ = self
            .state
            .run(
                "delete_category",
                "Failed to delete category",
                category::delete(&self.client, id),
                |s, ()| remove_by_id(&mut s.categories, id),
            )
            .await;
    }

    pub async fn fetch_pending_campaigns(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_pending_campaigns",
                "Failed to load pending campaigns",
                admin::pending_campaigns(&self.client, page),
                |s, page| s.pending_campaigns = Listing::from(page),
            )
            .await;
    }

    pub async fn approve_campaign(&self, id: i64) {
        self.review_campaign(id, Decision::Approve).await;
    }

    pub async fn reject_campaign(&self, id: i64, reason: &str) {
        self.review_campaign(id, Decision::Reject { reason: reason.to_string() }).await;
    }

    async fn review_campaign(&self, id: i64, decision: Decision) {
        let admin_id = self.admin_id();
        let _ = self
            .state
            .run(
                "review_campaign",
                "Failed to review campaign",
                admin::review_campaign(&self.client, id, &decision, admin_id),
                |s, _| remove_by_id(&mut s.pending_campaigns.items, id),
            )
            .await;
    }

    pub async fn fetch_pending_kyc(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_pending_kyc",
                "Failed to load pending documents",
                admin::pending_kyc(&self.client, page),
                |s, page| s.pending_kyc = Listing::from(page),
            )
            .await;
    }

    pub async fn approve_kyc(&self, id: i64) {
        self.review_kyc(id, Decision::Approve).await;
    }

    pub async fn reject_kyc(&self, id: i64, reason: &str) {
        self.review_kyc(id, Decision::Reject { reason: reason.to_string() }).await;
    }

    async fn review_kyc(&self, id: i64, decision: Decision) {
        let admin_id = self.admin_id();
        let _ = self
            .state
            .run(
                "review_kyc",
                "Failed to review document",
                admin::review_kyc(&self.client, id, &decision, admin_id),
                |s, _| remove_by_id(&mut s.pending_kyc.items, id),
            )
            .await;
    }

    pub async fn fetch_pending_withdrawals(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_pending_withdrawals",
                "Failed to load pending withdrawals",
                admin::pending_withdrawals(&self.client, page),
                |s, page| s.pending_withdrawals = Listing::from(page),
            )
            .await;
    }

    pub async fn approve_withdrawal(&self, id: i64) {
        self.review_withdrawal(id, Decision::Approve).await;
    }

    pub async fn reject_withdrawal(&self, id: i64, reason: &str) {
        self.review_withdrawal(id, Decision::Reject { reason: reason.to_string() }).await;
    }

    async fn review_withdrawal(&self, id: i64, decision: Decision) {
        let admin_id = self.admin_id();
        let _ = self
            .state
            .run(
                "review_withdrawal",
                "Failed to review withdrawal",
                admin::review_withdrawal(&self.client, id, &decision, admin_id),
                |s, _| remove_by_id(&mut s.pending_withdrawals.items, id),
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{envelope, page, test_client, MockTransport};
    use serde_json::{json, Value};

    fn campaign_json(id: i64, status: &str) -> Value {
        json!({ "id": id, "title": format!("Campaign {}", id), "goalAmount": 900.0, "status": status })
    }

    fn user_json(id: i64, active: bool) -> Value {
        json!({ "id": id, "email": format!("user{}@example.com", id), "role": "INVESTOR", "active": active })
    }

    fn store(transport: &Arc<MockTransport>) -> AdminStore {
        let (client, _, _) = test_client(transport.clone(), true);
        let store = AdminStore::new(client);
        store.set_admin_id(Some(1));
        store
    }

    #[tokio::test]
    async fn test_approve_removes_from_queue_preserving_order() {
        let transport = MockTransport::new();
        let store = store(&transport);
        let pending = (1..=4).map(|id| campaign_json(id, "PENDING_REVIEW")).collect();
        transport.push_json(200, page(pending, 0, 10, 4));
        store.fetch_pending_campaigns(PageRequest::default()).await;
        transport.push_envelope(campaign_json(2, "ACTIVE"));

        store.approve_campaign(2).await;

        let snapshot = store.snapshot();
        let ids: Vec<i64> = snapshot.data.pending_campaigns.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(!snapshot.loading);
        let request = transport.last_request().unwrap();
        assert_eq!(request.headers.get("X-Admin-Id").unwrap(), "1");
    }

    #[tokio::test]
    async fn test_failed_reject_keeps_queue() {
        let transport = MockTransport::new();
        let store = store(&transport);
        transport.push_json(
            200,
            page(vec![json!({ "id": 5, "amount": 10.0, "status": "PENDING" })], 0, 10, 1),
        );
        store.fetch_pending_withdrawals(PageRequest::default()).await;
        transport.push_json(409, json!({ "detail": "Withdrawal already processed" }));

        store.reject_withdrawal(5, "Duplicate").await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.data.pending_withdrawals.items.len(), 1);
        assert_eq!(snapshot.error.as_deref(), Some("Withdrawal already processed"));
    }

    #[tokio::test]
    async fn test_set_user_active_patches_in_place() {
        let transport = MockTransport::new();
        let store = store(&transport);
        transport.push_json(200, envelope(page(vec![user_json(1, true), user_json(2, true)], 0, 10, 2)));
        store.fetch_users(PageRequest::default()).await;
        transport.push_envelope(user_json(2, false));

        store.set_user_active(2, false).await;

        let users = store.snapshot().data.users.items;
        assert_eq!(users.len(), 2);
        assert!(users[0].active);
        assert!(!users[1].active);
    }

    #[tokio::test]
    async fn test_kyc_reject_removes_document() {
        let transport = MockTransport::new();
        let store = store(&transport);
        let docs = vec![
            json!({ "id": 1, "documentType": "PASSPORT", "status": "PENDING" }),
            json!({ "id": 2, "documentType": "NATIONAL_ID", "status": "PENDING" }),
        ];
        transport.push_json(200, page(docs, 0, 10, 2));
        store.fetch_pending_kyc(PageRequest::default()).await;
        transport.push_envelope(json!({ "id": 1, "documentType": "PASSPORT", "status": "REJECTED" }));

        store.reject_kyc(1, "Blurry scan").await;

        let ids: Vec<i64> = store.snapshot().data.pending_kyc.items.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_dashboard_and_categories() {
        let transport = MockTransport::new();
        let store = store(&transport);
        transport.push_envelope(json!({ "totalUsers": 12, "activeCampaigns": 3, "totalInvested": 4500.5 }));
        store.fetch_dashboard().await;
        transport.push_envelope(json!({ "id": 9, "name": "Energy" }));
        store
            .create_category(CategoryRequest {
                name: "Energy".to_string(),
                description: None,
            })
            .await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.data.dashboard.as_ref().map(|d| d.total_users), Some(12));
        assert_eq!(snapshot.data.categories[0].name, "Energy");
    }
}

//! # Withdrawal Container

use std::sync::Arc;

use shared::{CreateWithdrawalRequest, PageRequest, Withdrawal};

use super::{patch_by_id, prepend, Listing, Snapshot, StateCell};
use crate::services::api::{withdrawal, ApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WithdrawalState {
    pub mine: Listing<Withdrawal>,
}

pub struct WithdrawalStore {
    client: Arc<ApiClient>,
    state: StateCell<WithdrawalState>,
}

impl WithdrawalStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: StateCell::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<WithdrawalState> {
        self.state.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub async fn fetch_mine(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_my_withdrawals",
                "Failed to load withdrawals",
                withdrawal::list_mine(&self.client, page),
                |s, page| s.mine = Listing::from(page),
            )
            .await;
    }

    pub async fn create_withdrawal(&self, request: CreateWithdrawalRequest) {
        let _ = self
            .state
            .run(
                "create_withdrawal",
                "Failed to request withdrawal",
                withdrawal::create(&self.client, &request),
                |s, created| prepend(&mut s.mine.items, created),
            )
            .await;
    }

    pub async fn cancel_withdrawal(&self, id: i64) {
        let _ = self
            .state
            .run(
                "cancel_withdrawal",
                "Failed to cancel withdrawal",
                withdrawal::cancel(&self.client, id),
                |s, cancelled| {
                    patch_by_id(&mut s.mine.items, cancelled);
                },
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_client, MockTransport};
    use serde_json::json;

    fn request() -> CreateWithdrawalRequest {
        CreateWithdrawalRequest {
            amount: 75.0,
            bank_name: "First Bank".to_string(),
            account_number: "0012345678".to_string(),
            account_holder: "Alice Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_withdrawal_prepends() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone(), true);
        let store = WithdrawalStore::new(client);
        transport.push_envelope(json!({ "id": 8, "amount": 75.0, "status": "PENDING" }));

        store.create_withdrawal(request()).await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.data.mine.items[0].id, 8);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_create_withdrawal_error_is_recorded_not_returned() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone(), true);
        let store = WithdrawalStore::new(client);
        transport.push_json(400, json!({ "detail": "Amount exceeds available balance" }));

        store.create_withdrawal(request()).await;

        let snapshot = store.snapshot();
        assert!(snapshot.data.mine.items.is_empty());
        assert_eq!(snapshot.error.as_deref(), Some("Amount exceeds available balance"));
    }
}

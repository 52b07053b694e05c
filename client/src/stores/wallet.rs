//! # Wallet Container
//!
//! Balance and transaction history. A deposit updates both from the
//! server's response.

use std::sync::Arc;

use shared::{DepositRequest, DepositResult, PageRequest, Wallet, WalletTransaction};

use super::{prepend, Listing, Snapshot, StateCell};
use crate::core::error::Result;
use crate::services::api::{wallet, ApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    pub wallet: Option<Wallet>,
    pub transactions: Listing<WalletTransaction>,
}

pub struct WalletStore {
    client: Arc<ApiClient>,
    state: StateCell<WalletState>,
}

impl WalletStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: StateCell::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<WalletState> {
        self.state.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub async fn fetch_wallet(&self) {
        let _ = self
            .state
            .run(
                "fetch_wallet",
                "Failed to load wallet",
                wallet::get(&self.client),
                |s, found| s.wallet = Some(found),
            )
            .await;
    }

    pub async fn fetch_transactions(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_wallet_transactions",
                "Failed to load transactions",
                wallet::transactions(&self.client, page),
                |s, page| s.transactions = Listing::from(page),
            )
            .await;
    }

    #[tracing::instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn deposit(&self, request: DepositRequest) -> Result<DepositResult> {
        self.state
            .run(
                "deposit",
                "Deposit failed",
                wallet::deposit(&self.client, &request),
                |s, result: DepositResult| {
                    s.wallet = Some(result.wallet.clone());
                    prepend(&mut s.transactions.items, result.transaction.clone());
                    result
                },
            )
            .await
    }
}

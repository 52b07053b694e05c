//! # Investment Container

use std::sync::Arc;

use shared::{CreateInvestmentRequest, Investment, PageRequest};

use super::{patch_by_id, prepend, Listing, Snapshot, StateCell};
use crate::core::error::Result;
use crate::services::api::{investment, ApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentState {
    pub mine: Listing<Investment>,
    /// Investments into one campaign, as seen by its owner.
    pub campaign_investments: Listing<Investment>,
    pub current: Option<Investment>,
}

pub struct InvestmentStore {
    client: Arc<ApiClient>,
    state: StateCell<InvestmentState>,
}

impl InvestmentStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: StateCell::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<InvestmentState> {
        self.state.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub async fn fetch_mine(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_my_investments",
                "Failed to load investments",
                investment::list_mine(&self.client, page),
                |s, page| s.mine = Listing::from(page),
            )
            .await;
    }

    pub async fn fetch_investment(&self, id: i64) {
        let _ = self
            .state
            .run(
                "fetch_investment",
                "Failed to load investment",
                investment::get(&self.client, id),
                |s, found| s.current = Some(found),
            )
            .await;
    }

    pub async fn fetch_for_campaign(&self, campaign_id: i64, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_campaign_investments",
                "Failed to load campaign investments",
                investment::list_for_campaign(&self.client, campaign_id, page),
                |s, page| s.campaign_investments = Listing::from(page),
            )
            .await;
    }

    pub async fn create_investment(&self, campaign_id: i64, amount: f64) -> Result<Investment> {
        let request = CreateInvestmentRequest { campaign_id, amount };
        self.state
            .run(
                "create_investment",
                "Failed to create investment",
                investment::create(&self.client, &request),
                |s, created: Investment| {
                    prepend(&mut s.mine.items, created.clone());
                    created
                },
            )
            .await
    }

    pub async fn cancel_investment(&self, id: i64) {
        let _ = self
            .state
            .run(
                "cancel_investment",
                "Failed to cancel investment",
                investment::cancel(&self.client, id),
                |s, cancelled: Investment| {
                    if s.current.as_ref().is_some_and(|c| c.id == cancelled.id) {
                        s.current = Some(cancelled.clone());
                    }
                    patch_by_id(&mut s.mine.items, cancelled);
                },
            )
            .await;
    }
}

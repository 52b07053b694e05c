use serde::{Deserialize, Serialize};

/// Investment lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Refunded,
}

/// Investment in a campaign
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i64,
    pub campaign_id: i64,
    #[serde(default)]
    pub campaign_title: Option<String>,
    #[serde(default)]
    pub investor_id: Option<i64>,
    pub amount: f64,
    pub status: InvestmentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Invest in a campaign from the wallet balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestmentRequest {
    pub campaign_id: i64,
    pub amount: f64,
}

use serde::{Deserialize, Serialize};

use super::auth::UserRole;

/// User as seen from the admin console
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: UserRole,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Activate or deactivate a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusRequest {
    pub active: bool,
}

/// Admin dashboard figures
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub active_campaigns: u64,
    #[serde(default)]
    pub total_invested: f64,
    #[serde(default)]
    pub pending_campaigns: u64,
    #[serde(default)]
    pub pending_kyc: u64,
    #[serde(default)]
    pub pending_withdrawals: u64,
}

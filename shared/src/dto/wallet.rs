use serde::{Deserialize, Serialize};

/// Investor wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: i64,
    pub balance: f64,
    #[serde(default)]
    pub available_balance: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Kind of wallet movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletTransactionType {
    Deposit,
    Investment,
    Refund,
    Withdrawal,
}

/// Settlement state of a wallet movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletTransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// Wallet ledger entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: WalletTransactionType,
    pub amount: f64,
    pub status: WalletTransactionStatus,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Deposit funds into the wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub amount: f64,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Server-confirmed deposit: the new ledger entry and the wallet after it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositResult {
    pub transaction: WalletTransaction,
    pub wallet: Wallet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_field_is_renamed() {
        let json = r#"{"id":1,"type":"DEPOSIT","amount":100.0,"status":"COMPLETED"}"#;
        let tx: WalletTransaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.kind, WalletTransactionType::Deposit);
        assert_eq!(tx.status, WalletTransactionStatus::Completed);
    }
}

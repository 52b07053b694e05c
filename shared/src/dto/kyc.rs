use serde::{Deserialize, Serialize};

/// Review state of a KYC document or of the user's KYC as a whole
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

/// Kind of identity document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycDocumentType {
    Passport,
    NationalId,
    DriversLicense,
    ProofOfAddress,
    CompanyRegistration,
}

impl KycDocumentType {
    /// Value sent in the `documentType` multipart field
    pub fn as_str(&self) -> &'static str {
        match self {
            KycDocumentType::Passport => "PASSPORT",
            KycDocumentType::NationalId => "NATIONAL_ID",
            KycDocumentType::DriversLicense => "DRIVERS_LICENSE",
            KycDocumentType::ProofOfAddress => "PROOF_OF_ADDRESS",
            KycDocumentType::CompanyRegistration => "COMPANY_REGISTRATION",
        }
    }
}

/// Uploaded KYC document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KycDocument {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub document_type: KycDocumentType,
    #[serde(default)]
    pub file_url: Option<String>,
    pub status: KycStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// Overall KYC standing of the current user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KycStatusSummary {
    pub status: KycStatus,
    #[serde(default)]
    pub submitted_documents: u32,
    #[serde(default)]
    pub required_documents: Vec<KycDocumentType>,
}

//! # KYC Container
//!
//! Submitted identity documents and the overall verification status.

use std::sync::Arc;

use shared::{KycDocument, KycDocumentType, KycStatusSummary};

use super::{prepend, Snapshot, StateCell};
use crate::services::api::{kyc, ApiClient, FileUpload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KycState {
    pub documents: Vec<KycDocument>,
    pub status: Option<KycStatusSummary>,
}

pub struct KycStore {
    client: Arc<ApiClient>,
    state: StateCell<KycState>,
}

impl KycStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: StateCell::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<KycState> {
        self.state.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub async fn fetch_documents(&self) {
        let _ = self
            .state
            .run(
                "fetch_kyc_documents",
                "Failed to load documents",
                kyc::list_documents(&self.client),
                |s, documents| s.documents = documents,
            )
            .await;
    }

    pub async fn fetch_status(&self) {
        let _ = self
            .state
            .run(
                "fetch_kyc_status",
                "Failed to load verification status",
                kyc::status(&self.client),
                |s, status| s.status = Some(status),
            )
            .await;
    }

    pub async fn upload_document(&self, document_type: KycDocumentType, file: FileUpload) {
        let _ = self
            .state
            .run(
                "upload_kyc_document",
                "Failed to upload document",
                kyc::upload_document(&self.client, document_type, file),
                |s, document| prepend(&mut s.documents, document),
            )
            .await;
    }
}

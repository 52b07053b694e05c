//! # KYC Endpoints
//!
//! Document upload (multipart) and status queries.

use shared::{ApiResponse, KycDocument, KycDocumentType, KycStatusSummary};

use super::client::{ApiClient, RequestOptions};
use super::transport::{FileUpload, MultipartForm};
use crate::core::error::Result;

/// Upload one identity document as `file` + `documentType`.
#[tracing::instrument(skip(client, file), fields(file_name = %file.file_name, bytes = file.bytes.len()))]
pub async fn upload_document(
    client: &ApiClient,
    document_type: KycDocumentType,
    file: FileUpload,
) -> Result<KycDocument> {
    let form = MultipartForm::new()
        .text("documentType", document_type.as_str())
        .file("file", file);
    let response: ApiResponse<KycDocument> = client
        .upload("/kyc/documents", form, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn list_documents(client: &ApiClient) -> Result<Vec<KycDocument>> {
    let response: ApiResponse<Vec<KycDocument>> = client
        .get("/kyc/documents", RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

pub async fn status(client: &ApiClient) -> Result<KycStatusSummary> {
    let response: ApiResponse<KycStatusSummary> = client
        .get("/kyc/status", RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

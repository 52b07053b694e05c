//! # Response Envelopes
//!
//! The two response wrappers used by the backend, plus its structured error body.

use serde::{Deserialize, Serialize};

/// Generic response envelope: `{ success, status, message, data, timestamp }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
    #[serde(default)]
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, dropping the envelope metadata.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Paginated envelope: `{ content, totalElements, totalPages, number, size, first, last }`.
///
/// `number` is the zero-based page index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
            first: true,
            last: true,
        }
    }
}

/// Page request parameters sent as `?page=&size=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Query pairs in the order the backend documents them.
    pub fn to_query(self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

/// Structured error body: `{ title, status, detail, message, errorCode, timestamp }`.
///
/// Every field is optional because not every service fills all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub title: Option<String>,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub message: Option<String>,
    pub error_code: Option<String>,
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_camel_case() {
        let json = r#"{"success":true,"status":201,"message":"Created","data":42,"timestamp":"2024-05-01T10:00:00"}"#;
        let response: ApiResponse<i64> = serde_json::from_str(json).unwrap();

        assert!(response.success);
        assert_eq!(response.status, 201);
        assert_eq!(response.into_data(), 42);
    }

    #[test]
    fn test_envelope_tolerates_missing_message() {
        let json = r#"{"success":true,"status":200,"data":null}"#;
        let response: ApiResponse<Option<i64>> = serde_json::from_str(json).unwrap();

        assert_eq!(response.message, "");
        assert_eq!(response.data, None);
    }

    #[test]
    fn test_page_deserializes() {
        let json = r#"{"content":["a","b"],"totalElements":12,"totalPages":6,"number":1,"size":2,"first":false,"last":false}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();

        assert_eq!(page.content, vec!["a", "b"]);
        assert_eq!(page.total_elements, 12);
        assert_eq!(page.total_pages, 6);
        assert_eq!(page.number, 1);
        assert!(!page.first);
    }

    #[test]
    fn test_page_request_query() {
        let query = PageRequest::new(2, 25).to_query();
        assert_eq!(query, vec![
            ("page".to_string(), "2".to_string()),
            ("size".to_string(), "25".to_string()),
        ]);
    }

    #[test]
    fn test_error_body_partial() {
        let json = r#"{"title":"Bad Request","status":400,"detail":"Amount too low","errorCode":"INV_001"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();

        assert_eq!(body.detail.as_deref(), Some("Amount too low"));
        assert_eq!(body.error_code.as_deref(), Some("INV_001"));
        assert_eq!(body.message, None);
        assert_eq!(body.timestamp, None);
    }
}

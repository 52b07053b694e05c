//! # Common Error Types
//!
//! Consolidated error handling for the client core.
//!
//! This module provides [`ApiError`], the single error type every dispatcher call,
//! resource service and re-throwing container action returns, and
//! [`extract_error_message`], which turns any failure into the one human-readable
//! string a container stores in its `error` field.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced an HTTP response
//! - **Http**: the backend answered with a non-2xx status (4xx and 5xx, the
//!   latter after the single retry)
//! - **Decode**: a 2xx body did not match the endpoint's declared shape
//! - **Rejected**: a 2xx payload carrying a failure flag (e.g. OTP `verified: false`)
//! - **Storage**: durable session storage could not be read or written
//! - **InvalidRequest**: the request could not be built (bad header value, bad URL)
//!
//! ## Message Normalization
//!
//! ```rust
//! use crowdfund_client::core::error::{extract_error_message, ApiError};
//!
//! let err = ApiError::Http {
//!     status: 400,
//!     url: "http://localhost:8080/api/investments".to_string(),
//!     body: Some(serde_json::json!({ "detail": "Amount below campaign minimum" })),
//! };
//! assert_eq!(extract_error_message(&err, "Investment failed"), "Amount below campaign minimum");
//! ```

use shared::ErrorBody;
use thiserror::Error;

/// Error returned by every call that goes through the HTTP dispatcher.
///
/// The `Display` text of each variant is the "transport message" used as the
/// third preference by [`extract_error_message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, reset, TLS failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `body` holds the parsed JSON body when there was one.
    #[error("Request failed with status code {status}")]
    Http {
        status: u16,
        url: String,
        body: Option<serde_json::Value>,
    },

    /// A 2xx body that does not match the endpoint's declared response type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Business-rule rejection delivered inside a successful response.
    #[error("{0}")]
    Rejected(String),

    /// Durable storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The outgoing request could not be assembled.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// HTTP status for [`ApiError::Http`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The body decoded as the backend's structured error, when it is one.
    pub fn error_body(&self) -> Option<ErrorBody> {
        match self {
            ApiError::Http { body: Some(body), .. } if body.is_object() => {
                serde_json::from_value(body.clone()).ok()
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Extract a user-facing message from a failed call.
///
/// Preference order: the error body's `detail`, then its `message`, then the
/// error's own message, then `fallback`. Errors that did not come from the
/// dispatcher carry no structured information and yield `fallback`.
pub fn extract_error_message(error: &(dyn std::error::Error + 'static), fallback: &str) -> String {
    let Some(api_error) = error.downcast_ref::<ApiError>() else {
        return fallback.to_string();
    };

    let structured = api_error.error_body().and_then(|body| {
        [body.detail, body.message]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
    });
    if let Some(text) = structured {
        return text;
    }

    let own = api_error.to_string();
    if own.trim().is_empty() {
        fallback.to_string()
    } else {
        own
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn http_error(body: Option<serde_json::Value>) -> ApiError {
        ApiError::Http {
            status: 422,
            url: "http://localhost:8080/api/campaigns".to_string(),
            body,
        }
    }

    #[test]
    fn test_detail_takes_precedence() {
        let err = http_error(Some(json!({ "detail": "X", "message": "Y" })));
        assert_eq!(extract_error_message(&err, "fallback"), "X");
    }

    #[test]
    fn test_message_used_without_detail() {
        let err = http_error(Some(json!({ "message": "Y" })));
        assert_eq!(extract_error_message(&err, "fallback"), "Y");
    }

    #[test]
    fn test_transport_message_used_without_structured_fields() {
        let err = http_error(Some(json!({ "title": "Unprocessable" })));
        assert_eq!(
            extract_error_message(&err, "fallback"),
            "Request failed with status code 422"
        );

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(extract_error_message(&err, "fallback"), "Network error: connection refused");
    }

    #[test]
    fn test_non_object_body_falls_through_to_transport_message() {
        let err = http_error(Some(json!("plain text")));
        assert_eq!(
            extract_error_message(&err, "fallback"),
            "Request failed with status code 422"
        );
    }

    #[test]
    fn test_foreign_error_returns_fallback() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(extract_error_message(&err, "Something went wrong"), "Something went wrong");
    }

    #[test]
    fn test_empty_rejection_returns_fallback() {
        let err = ApiError::Rejected(String::new());
        assert_eq!(extract_error_message(&err, "Verification failed"), "Verification failed");
    }

    #[test]
    fn test_empty_detail_falls_through_to_message() {
        let err = http_error(Some(json!({
            "title": "Not Found",
            "status": 404,
            "detail": "",
            "message": "Campaign 9 not found"
        })));
        assert_eq!(extract_error_message(&err, "fallback"), "Campaign 9 not found");
        assert_eq!(err.error_body().and_then(|b| b.status), Some(404));
        assert_eq!(err.status(), Some(422));
    }
}

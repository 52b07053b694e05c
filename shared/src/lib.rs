//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the crowdfunding client and the
//! platform's backend services. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: Response envelope, paginated envelope and error body
//!   - **[`dto::auth`]**: Login, registration, OTP and token DTOs
//!   - **[`dto::profile`]**: User and business profiles
//!   - **[`dto::kyc`]**: KYC documents and status
//!   - **[`dto::reference`]**: Countries, currencies, industries
//!   - **[`dto::campaign`]**: Campaigns and categories
//!   - **[`dto::investment`]**: Investments
//!   - **[`dto::wallet`]**: Wallet, deposits and wallet transactions
//!   - **[`dto::withdrawal`]**: Withdrawals
//!   - **[`dto::admin`]**: Admin users and dashboard
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]`:
//! - Optional fields are omitted from requests when `None`
//! - Optional fields missing from responses deserialize to `None`
//! - Identifiers are `i64`, timestamps are kept as the strings the backend sends
//!
//! Two response shapes coexist and are chosen per endpoint, never by probing the
//! payload:
//!
//! ```text
//! ApiResponse<T>  { success, status, message, data, timestamp }
//! Page<T>         { content, totalElements, totalPages, number, size, first, last }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::envelope::{ApiResponse, Page};
//! use shared::dto::campaign::Campaign;
//!
//! let json = r#"{"success":true,"status":200,"message":"OK","timestamp":"2024-01-01T00:00:00",
//!     "data":{"content":[],"totalElements":0,"totalPages":0,"number":0,"size":10,"first":true,"last":true}}"#;
//! let response: ApiResponse<Page<Campaign>> = serde_json::from_str(json).unwrap();
//! assert!(response.data.content.is_empty());
//! ```

pub mod dto;

pub use dto::*;

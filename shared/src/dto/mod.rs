//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Generic response envelope, paginated envelope, error body
//! - [`auth`] - Login, registration, OTP and token refresh
//! - [`profile`] - User profile and business profiles
//! - [`kyc`] - KYC documents
//! - [`reference`] - Reference data (countries, currencies, industries)
//! - [`campaign`] - Campaigns and categories
//! - [`investment`] - Investments
//! - [`wallet`] - Wallet and deposits
//! - [`withdrawal`] - Withdrawals
//! - [`admin`] - Admin users and dashboard figures
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "email": "alice@example.com", "password": "MyPassword123!" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "status": 200,
//!   "message": "Login successful",
//!   "data": { "accessToken": "eyJhbGciOi...", "refreshToken": "eyJhbGciOi...", "tokenType": "Bearer" },
//!   "timestamp": "2024-01-01T00:00:00"
//! }
//! ```

pub mod admin;
pub mod auth;
pub mod campaign;
pub mod envelope;
pub mod investment;
pub mod kyc;
pub mod profile;
pub mod reference;
pub mod wallet;
pub mod withdrawal;

pub use admin::*;
pub use auth::*;
pub use campaign::*;
pub use envelope::*;
pub use investment::*;
pub use kyc::*;
pub use profile::*;
pub use reference::*;
pub use wallet::*;
pub use withdrawal::*;

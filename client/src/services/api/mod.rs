//! # Backend API Module
//!
//! The HTTP dispatcher plus one module per backend resource.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient dispatcher (headers, auth, retry, 401 handling)
//! ├── endpoints.rs  - Public and critical endpoint lists
//! ├── retry.rs      - Single fixed-delay retry policy
//! ├── transport.rs  - Request/response types and the reqwest transport
//! ├── auth.rs       - Login, registration, OTP, refresh, logout
//! ├── profile.rs    - Current user and business profiles
//! ├── kyc.rs        - KYC document upload and status
//! ├── reference.rs  - Countries, currencies, industries
//! ├── category.rs   - Campaign categories
//! ├── campaign.rs   - Campaign discovery, management, media
//! ├── investment.rs - Investments
//! ├── wallet.rs     - Wallet balance, deposits, history
//! ├── withdrawal.rs - Withdrawal requests
//! └── admin.rs      - Dashboard, users, review queues
//! ```
//!
//! Resource functions are flat: one function, one call, one fixed response
//! shape. Some endpoints return the page object directly and others wrap it in
//! the generic envelope; each function knows which.

pub mod admin;
pub mod auth;
pub mod campaign;
pub mod category;
pub mod client;
pub mod endpoints;
pub mod investment;
pub mod kyc;
pub mod profile;
pub mod reference;
pub mod retry;
pub mod transport;
pub mod wallet;
pub mod withdrawal;

pub use client::{ApiClient, RequestOptions};
pub use retry::RetryPolicy;
pub use transport::{FileUpload, HttpRequest, HttpResponse, MultipartForm, RequestBody, ReqwestTransport};

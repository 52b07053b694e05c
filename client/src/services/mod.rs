//! # Services Module
//!
//! Clients for everything outside the process. Today that is the
//! crowdfunding backend's REST API.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                State Containers               │
//! │   AuthStore  CampaignStore  WalletStore ...   │
//! └──────────────────────┬───────────────────────┘
//!                        │ resource functions
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │  services::api::{auth, campaign, wallet, ...} │
//! └──────────────────────┬───────────────────────┘
//!                        │ ApiClient::dispatch
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │  ApiClient  (bearer token, retry, 401 rules)  │
//! └──────────────────────┬───────────────────────┘
//!                        │ Transport (reqwest)
//!                        ▼
//!                 Backend  /api/*
//! ```
//!
//! ## Error Handling
//!
//! Every function returns [`crate::core::Result`]. Transport failures become
//! `ApiError::Network`, non-2xx responses `ApiError::Http` with the parsed
//! body attached, so [`crate::core::extract_error_message`] can pull out the
//! server's `detail` or `message`.

pub mod api;

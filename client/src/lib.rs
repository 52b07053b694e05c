//! # Crowdfunding Client Core - Library Root
//!
//! The client-side core of the crowdfunding investment platform: everything a
//! UI needs to talk to the backend, with no UI of its own.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  UI (any)  ── reads snapshots, calls container actions │
//! └──────────────────────────┬─────────────────────────────┘
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  stores     - one State Container per domain           │
//! │               (auth, campaigns, investments, wallet,   │
//! │                withdrawals, kyc, admin)                │
//! ├────────────────────────────────────────────────────────┤
//! │  services   - flat resource functions, one per call    │
//! ├────────────────────────────────────────────────────────┤
//! │  ApiClient  - the HTTP dispatcher (auth header, retry, │
//! │               401 handling)                            │
//! └──────────────────────────┬─────────────────────────────┘
//!                            │ HTTP/JSON, multipart uploads
//!                            ▼
//!                   Backend  /api/*
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`app::AppContext`] wiring and the default navigator
//! - **config**: environment-driven [`config::ClientConfig`]
//! - **core**: [`crate::core::ApiError`], error-message extraction, injected traits
//! - **logging**: `tracing` subscriber setup
//! - **services**: the dispatcher and per-resource endpoint functions
//! - **storage**: durable key-value storage and the persisted session
//! - **stores**: State Containers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crowdfund_client::app::AppContext;
//! use crowdfund_client::config::ClientConfig;
//! use shared::CampaignQuery;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let context = AppContext::new(&ClientConfig::from_env())?;
//! context.auth.login("alice@example.com", "secret").await?;
//! context.campaigns.fetch_public(CampaignQuery::new(0, 10)).await;
//! let campaigns = context.campaigns.snapshot();
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod storage;
pub mod stores;

#[cfg(test)]
pub(crate) mod testing;

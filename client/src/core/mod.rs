//! # Core Abstractions
//!
//! Error types and the traits injected into the dispatcher.
//!
//! - **[`error`]**: [`ApiError`], [`Result<T>`] and [`extract_error_message`]
//! - **[`service`]**: [`Transport`], [`TokenSource`] and [`Navigator`]
//!
//! ## Dependency Injection
//!
//! The dispatcher depends only on these traits:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use crowdfund_client::app::navigation::MemoryNavigator;
//! use crowdfund_client::core::service::{Navigator, TokenSource, Transport};
//! use crowdfund_client::services::api::transport::ReqwestTransport;
//! use crowdfund_client::storage::{MemoryStorage, SessionStore};
//!
//! let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new());
//! let tokens: Arc<dyn TokenSource> = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
//! let navigator: Arc<dyn Navigator> = Arc::new(MemoryNavigator::new("/"));
//! ```

pub mod error;
pub mod service;

pub use error::{extract_error_message, ApiError, Result};
pub use service::{Navigator, TokenSource, Transport};

//! # Service Traits
//!
//! Seams injected into the HTTP dispatcher so it never reaches for a concrete
//! store, router or network stack on its own.

use async_trait::async_trait;

use super::error::Result;
use crate::services::api::transport::{HttpRequest, HttpResponse};

/// Sends one fully assembled request over the wire.
///
/// Production code uses [`crate::services::api::transport::ReqwestTransport`];
/// tests substitute a scripted transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return whatever status the server answered with.
    ///
    /// Only failures that produced no HTTP response are errors here
    /// ([`crate::core::error::ApiError::Network`]).
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Source of the current bearer token.
///
/// Implemented by the durable session store, which reads persisted storage on
/// every call instead of caching the token in memory.
pub trait TokenSource: Send + Sync {
    /// Current access token, `None` when signed out.
    fn token(&self) -> Option<String>;

    /// Drop the persisted session (forced logout).
    fn clear_session(&self);
}

/// Minimal view of the UI router: where we are, and how to go somewhere else.
pub trait Navigator: Send + Sync {
    /// Current route, e.g. `/dashboard`.
    fn current_route(&self) -> String;

    /// Navigate to `route`.
    fn navigate(&self, route: &str);
}

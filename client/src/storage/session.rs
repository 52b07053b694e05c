//! # Persisted Auth Session
//!
//! The session lives in durable storage under [`SESSION_STORAGE_KEY`] as
//!
//! ```text
//! { "state": { "token": "...", "refreshToken": "...", "isAuthenticated": true } }
//! ```
//!
//! [`SessionStore`] reads storage on every access; it never caches the token, so
//! the dispatcher and the auth container always agree on the current session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::kv::KeyValueStorage;
use crate::core::error::{ApiError, Result};
use crate::core::service::TokenSource;

/// Storage key holding the persisted session.
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

/// Access token, refresh token and authenticated flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl AuthSession {
    pub fn authenticated(token: String, refresh_token: String) -> Self {
        Self {
            token: Some(token),
            refresh_token: Some(refresh_token),
            is_authenticated: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    state: AuthSession,
}

/// Durable session storage; the single source of truth for the bearer token.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Current session. Missing, unreadable or corrupt entries read as signed out.
    pub fn load(&self) -> AuthSession {
        let raw = match self.storage.get_item(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AuthSession::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted session");
                return AuthSession::default();
            }
        };

        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(persisted) => persisted.state,
            Err(e) => {
                tracing::warn!(error = %e, "Persisted session is corrupt, ignoring it");
                AuthSession::default()
            }
        }
    }

    pub fn save(&self, session: &AuthSession) -> Result<()> {
        let raw = serde_json::to_string(&PersistedSession { state: session.clone() })
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        self.storage.set_item(SESSION_STORAGE_KEY, &raw)?;
        tracing::debug!(authenticated = session.is_authenticated, "Session persisted");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(SESSION_STORAGE_KEY)?;
        tracing::debug!("Session cleared");
        Ok(())
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        self.load().token
    }

    fn clear_session(&self) {
        if let Err(e) = self.clear() {
            tracing::error!(error = %e, "Failed to clear persisted session");
        }
    }
}

//! # Auth Container
//!
//! Session, current profile and the in-progress OTP flow. Tokens are written
//! straight to the [`SessionStore`] so the dispatcher sees them immediately.

use std::sync::Arc;

use shared::{
    AuthTokens, LoginRequest, OtpPurpose, RegisterRequest, RegistrationResult, SendOtpRequest,
    UpdateProfileRequest, UserProfile, VerifyOtpRequest,
};

use super::{Snapshot, StateCell};
use crate::core::error::{ApiError, Result};
use crate::services::api::{auth, profile, ApiClient};
use crate::storage::{AuthSession, SessionStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub profile: Option<UserProfile>,
    /// Email awaiting OTP verification.
    pub otp_email: Option<String>,
    pub otp_purpose: Option<OtpPurpose>,
    pub registration: Option<RegistrationResult>,
}

pub struct AuthStore {
    client: Arc<ApiClient>,
    session: Arc<SessionStore>,
    state: StateCell<AuthState>,
}

impl AuthStore {
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            client,
            session,
            state: StateCell::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<AuthState> {
        self.state.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read(|s| s.is_authenticated)
    }

    fn persist(&self, tokens: &AuthTokens) -> Result<()> {
        self.session.save(&AuthSession::authenticated(
            tokens.access_token.clone(),
            tokens.refresh_token.clone(),
        ))
    }

    /// Pick up a session persisted by an earlier run.
    pub fn restore(&self) -> bool {
        let session = self.session.load();
        let authenticated = session.is_authenticated && session.token.is_some();
        self.state.update(|s| s.is_authenticated = authenticated);
        tracing::info!(authenticated, "Session restored");
        authenticated
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let call = async {
            let tokens = auth::login(&self.client, &request).await?;
            self.persist(&tokens)
        };
        self.state
            .run("login", "Login failed", call, |s, ()| {
                s.is_authenticated = true;
                s.otp_email = None;
                s.otp_purpose = None;
            })
            .await
    }

    /// Register, then remember the email for the OTP step when the backend asks for one.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> Result<RegistrationResult> {
        self.state
            .run(
                "register",
                "Registration failed",
                auth::register(&self.client, &request),
                |s, result: RegistrationResult| {
                    if result.otp_required {
                        s.otp_email = Some(result.email.clone());
                        s.otp_purpose = Some(OtpPurpose::Registration);
                    }
                    s.registration = Some(result.clone());
                    result
                },
            )
            .await
    }

    pub async fn send_otp(&self, email: &str, purpose: OtpPurpose) {
        let request = SendOtpRequest {
            email: email.to_string(),
            purpose,
        };
        let _ = self
            .state
            .run(
                "send_otp",
                "Failed to send verification code",
                auth::send_otp(&self.client, &request),
                |s, dispatch| {
                    s.otp_email = Some(dispatch.email);
                    s.otp_purpose = Some(purpose);
                },
            )
            .await;
    }

    /// Verify the OTP. When the backend returns tokens the user is signed in.
    #[tracing::instrument(skip(self, code))]
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<()> {
        let request = VerifyOtpRequest {
            email: email.to_string(),
            code: code.to_string(),
        };
        let call = async {
            let verification = auth::verify_otp(&self.client, &request).await?;
            let signed_in = match (verification.access_token, verification.refresh_token) {
                (Some(access_token), Some(refresh_token)) => {
                    self.persist(&AuthTokens {
                        access_token,
                        refresh_token,
                        token_type: None,
                    })?;
                    true
                }
                _ => false,
            };
            Ok(signed_in)
        };
        self.state
            .run("verify_otp", "Verification failed", call, |s, signed_in| {
                s.otp_email = None;
                s.otp_purpose = None;
                if signed_in {
                    s.is_authenticated = true;
                }
            })
            .await
    }

    /// Swap the stored refresh token for a new pair.
    pub async fn refresh_session(&self) {
        let Some(refresh_token) = self.session.load().refresh_token else {
            tracing::debug!("No refresh token, skipping refresh");
            return;
        };
        let call = async {
            let tokens = auth::refresh(&self.client, &refresh_token).await?;
            self.persist(&tokens)
        };
        let _ = self
            .state
            .run("refresh_session", "Session refresh failed", call, |s, ()| {
                s.is_authenticated = true;
            })
            .await;
    }

    /// Drop the signed-in state when the persisted token is gone.
    ///
    /// A critical 401 clears the session inside the dispatcher, so every
    /// action that can reach a critical endpoint re-syncs afterwards.
    fn sync_with_session(&self) {
        if self.session.load().token.is_some() {
            return;
        }
        self.state.update(|s| {
            if s.is_authenticated {
                tracing::info!("Session cleared by the dispatcher, signing out");
            }
            s.is_authenticated = false;
            s.profile = None;
        });
    }

    pub async fn fetch_profile(&self) {
        let _ = self
            .state
            .run(
                "fetch_profile",
                "Failed to load profile",
                profile::get_me(&self.client),
                |s, profile| s.profile = Some(profile),
            )
            .await;
        self.sync_with_session();
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) {
        let _ = self
            .state
            .run(
                "update_profile",
                "Failed to update profile",
                profile::update_me(&self.client, &request),
                |s, profile| s.profile = Some(profile),
            )
            .await;
        self.sync_with_session();
    }

    /// Sign out. `loading` is set while the server call is in flight; the
    /// local session is cleared even when that call fails.
    pub async fn logout(&self) {
        let call = async {
            if let Err(e) = auth::logout(&self.client).await {
                tracing::warn!(error = %e, "Server logout failed, clearing local session anyway");
            }
            if let Err(e) = self.session.clear() {
                tracing::error!(error = %e, "Failed to clear persisted session");
            }
            Ok::<(), ApiError>(())
        };
        let _ = self
            .state
            .run("logout", "Logout failed", call, |s, ()| *s = AuthState::default())
            .await;
        tracing::info!("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_client, wait_for_requests, MockTransport, TEST_TOKEN};
    use serde_json::json;

    fn store(transport: &Arc<MockTransport>, signed_in: bool) -> (AuthStore, Arc<SessionStore>) {
        let (client, session, _) = test_client(transport.clone(), signed_in);
        (AuthStore::new(client, session.clone()), session)
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, false);
        transport.push_envelope(json!({ "accessToken": "new-token", "refreshToken": "new-refresh" }));

        store.login("alice@example.com", "secret").await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(session.load().token.as_deref(), Some("new-token"));
        assert!(!store.snapshot().loading);
    }

    #[tokio::test]
    async fn test_login_failure_records_detail_and_rethrows() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, false);
        transport.push_json(401, json!({ "title": "Unauthorized", "detail": "Invalid credentials" }));

        let result = store.login("alice@example.com", "wrong").await;

        assert!(result.is_err());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.error.as_deref(), Some("Invalid credentials"));
        assert!(!snapshot.loading);
        assert!(!snapshot.data.is_authenticated);
        assert!(session.load().token.is_none());
    }

    #[tokio::test]
    async fn test_register_remembers_otp_email() {
        let transport = MockTransport::new();
        let (store, _) = store(&transport, false);
        transport.push_envelope(json!({ "userId": 5, "email": "bob@example.com", "otpRequired": true }));

        let result = store
            .register(RegisterRequest {
                email: "bob@example.com".to_string(),
                password: "pw".to_string(),
                first_name: "Bob".to_string(),
                last_name: "Builder".to_string(),
                phone_number: None,
                role: shared::UserRole::Investor,
            })
            .await
            .unwrap();

        assert_eq!(result.user_id, 5);
        assert_eq!(store.snapshot().data.otp_email.as_deref(), Some("bob@example.com"));
    }

    #[tokio::test]
    async fn test_verify_otp_rejected_does_not_create_session() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, false);
        transport.push_envelope(json!({ "verified": false, "message": "Wrong code" }));

        let result = store.verify_otp("bob@example.com", "111111").await;

        assert!(result.is_err());
        assert_eq!(store.snapshot().error.as_deref(), Some("Wrong code"));
        assert!(!store.is_authenticated());
        assert!(session.load().token.is_none());
    }

    #[tokio::test]
    async fn test_verify_otp_with_tokens_signs_in() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, false);
        transport.push_envelope(json!({ "verified": true, "accessToken": "otp-token", "refreshToken": "otp-refresh" }));

        store.verify_otp("bob@example.com", "123456").await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(session.load().token.as_deref(), Some("otp-token"));
    }

    #[tokio::test]
    async fn test_send_otp_swallows_error() {
        let transport = MockTransport::new();
        let (store, _) = store(&transport, false);
        transport.push_json(400, json!({ "message": "Too many requests for this email" }));

        store.send_otp("bob@example.com", OtpPurpose::Login).await;

        assert_eq!(
            store.snapshot().error.as_deref(),
            Some("Too many requests for this email")
        );
    }

    #[tokio::test]
    async fn test_fetch_profile_critical_401_signs_out() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, true);
        assert!(store.restore());
        transport.push_status(401);

        store.fetch_profile().await;

        let snapshot = store.snapshot();
        assert!(!snapshot.data.is_authenticated);
        assert!(snapshot.error.is_some());
        assert!(session.load().token.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_on_failure() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, true);
        store.restore();
        transport.push_network_error("connection reset");

        store.logout().await;

        assert!(session.load().token.is_none());
        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot().error, None);
    }

    #[tokio::test]
    async fn test_logout_sets_loading_while_in_flight() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, true);
        let store = Arc::new(store);
        store.restore();
        let gate = transport.hold();
        transport.push_envelope(json!(null));

        let task = {
            let store = store.clone();
            tokio::spawn(async move { store.logout().await })
        };
        wait_for_requests(&transport, 1).await;
        assert!(store.snapshot().loading);

        gate.notify_one();
        task.await.unwrap();

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert!(!snapshot.data.is_authenticated);
        assert!(session.load().token.is_none());
    }

    #[tokio::test]
    async fn test_update_profile_critical_401_signs_out() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, true);
        assert!(store.restore());
        transport.push_status(401);

        store
            .update_profile(UpdateProfileRequest {
                first_name: Some("Alice".to_string()),
                ..UpdateProfileRequest::default()
            })
            .await;

        let snapshot = store.snapshot();
        assert!(session.load().token.is_none());
        assert!(!snapshot.data.is_authenticated);
        assert!(snapshot.data.profile.is_none());
        assert!(snapshot.error.is_some());
    }

    #[tokio::test]
    async fn test_restore_reads_persisted_session() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, true);

        assert!(store.restore());
        assert_eq!(session.load().token.as_deref(), Some(TEST_TOKEN));
    }

    #[tokio::test]
    async fn test_refresh_session_replaces_tokens() {
        let transport = MockTransport::new();
        let (store, session) = store(&transport, true);
        transport.push_envelope(json!({ "accessToken": "fresh", "refreshToken": "fresh-refresh" }));

        store.refresh_session().await;

        assert_eq!(session.load().token.as_deref(), Some("fresh"));
        let request = transport.last_request().unwrap();
        assert_eq!(request.body, crate::services::api::transport::RequestBody::Json(json!({ "refreshToken": "test-refresh-token" })));
    }
}

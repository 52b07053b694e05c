//! # Authentication Endpoints
//!
//! Login, registration, OTP, token refresh and logout.

use shared::{
    ApiResponse, AuthTokens, LoginRequest, OtpDispatch, OtpVerification, RefreshTokenRequest,
    RegisterRequest, RegistrationResult, SendOtpRequest, VerifyOtpRequest,
};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::{ApiError, Result};

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthTokens> {
    tracing::info!("Attempting login");
    let response: ApiResponse<AuthTokens> = client
        .post("/auth/login", request, RequestOptions::new())
        .await?;
    tracing::info!("Login successful");
    Ok(response.into_data())
}

/// Register a new account.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<RegistrationResult> {
    let response: ApiResponse<RegistrationResult> = client
        .post("/auth/register", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

/// Ask the backend to email a one-time password.
pub async fn send_otp(client: &ApiClient, request: &SendOtpRequest) -> Result<OtpDispatch> {
    let response: ApiResponse<OtpDispatch> = client
        .post("/auth/otp/send", request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

/// Verify a one-time password.
///
/// A successful HTTP response with `verified: false` is turned into
/// [`ApiError::Rejected`] carrying the server's explanation.
pub async fn verify_otp(client: &ApiClient, request: &VerifyOtpRequest) -> Result<OtpVerification> {
    let response: ApiResponse<OtpVerification> = client
        .post("/auth/otp/verify", request, RequestOptions::new())
        .await?;

    if !response.data.verified {
        let message = response
            .data
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| Some(response.message.clone()).filter(|m| !m.is_empty()))
            .unwrap_or_else(|| "Invalid or expired verification code".to_string());
        tracing::warn!(email = %request.email, "OTP rejected");
        return Err(ApiError::Rejected(message));
    }
    Ok(response.into_data())
}

/// Exchange the refresh token for a new token pair.
pub async fn refresh(client: &ApiClient, refresh_token: &str) -> Result<AuthTokens> {
    let request = RefreshTokenRequest {
        refresh_token: refresh_token.to_string(),
    };
    let response: ApiResponse<AuthTokens> = client
        .post("/auth/refresh", &request, RequestOptions::new())
        .await?;
    Ok(response.into_data())
}

/// Invalidate the session server-side.
pub async fn logout(client: &ApiClient) -> Result<()> {
    let _: ApiResponse<serde_json::Value> = client
        .post_empty("/auth/logout", RequestOptions::new())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_login_unwraps_envelope() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone(), false);
        transport.push_envelope(json!({ "accessToken": "a", "refreshToken": "r", "tokenType": "Bearer" }));

        let tokens = login(&client, &LoginRequest {
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(tokens.access_token, "a");
        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/api/auth/login"));
    }

    #[tokio::test]
    async fn test_verify_otp_rejection() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone(), false);
        transport.push_envelope(json!({ "verified": false, "message": "Code expired" }));

        let err = verify_otp(&client, &VerifyOtpRequest {
            email: "alice@example.com".to_string(),
            code: "123456".to_string(),
        })
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::Rejected(ref m) if m == "Code expired"));
    }

    #[tokio::test]
    async fn test_verify_otp_rejection_without_message_uses_default() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone(), false);
        transport.push_json(200, json!({ "success": true, "status": 200, "data": { "verified": false } }));

        let err = verify_otp(&client, &VerifyOtpRequest {
            email: "alice@example.com".to_string(),
            code: "000000".to_string(),
        })
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Invalid or expired verification code");
    }

    #[tokio::test]
    async fn test_logout_posts_without_body() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone(), true);
        transport.push_envelope(json!(null));

        logout(&client).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(request.body, crate::services::api::transport::RequestBody::Empty);
    }
}

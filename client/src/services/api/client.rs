//! # API Client
//!
//! The HTTP dispatcher: every outbound call goes through [`ApiClient::dispatch`].
//!
//! Per request it:
//! 1. joins the relative path onto `<base>/api`
//! 2. sets `Accept: application/json`, and `Content-Type: application/json`
//!    unless the body is multipart (the transport adds the boundary type)
//! 3. attaches `Authorization: Bearer <token>` unless the path is public
//! 4. retries once, after a fixed delay, on 408/429/500/502/503/504
//! 5. on a 401 from a critical endpoint clears the session and sends the user to
//!    the login route
//! 6. returns every non-2xx response to the caller as [`ApiError::Http`]

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::endpoints;
use super::retry::RetryPolicy;
use super::transport::{HttpRequest, HttpResponse, MultipartForm, RequestBody};
use crate::core::error::{ApiError, Result};
use crate::core::service::{Navigator, TokenSource, Transport};

/// Fixed prefix every backend path lives under.
pub const API_PREFIX: &str = "/api";

/// Route the user is sent to when the session is forcibly cleared.
pub const LOGIN_ROUTE: &str = "/login";

/// Per-call header and query overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds the header only when a value is present.
    pub fn with_optional_header(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with_header(name, value),
            None => self,
        }
    }
}

/// HTTP dispatcher shared by all resource services.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenSource>,
    navigator: Arc<dyn Navigator>,
    base_url: String,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Create a dispatcher for the backend at `origin` (e.g. `http://localhost:8080`).
    pub fn new(
        origin: &str,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenSource>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            tokens,
            navigator,
            base_url: format!("{}{}", origin.trim_end_matches('/'), API_PREFIX),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Base URL including the `/api` prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn build_headers(&self, path: &str, body: &RequestBody, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !body.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if endpoints::is_public(path) {
            tracing::trace!(path, "Public endpoint, no bearer token");
        } else if let Some(token) = self.tokens.token().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidRequest(format!("Bad token header: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidRequest(format!("Bad header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidRequest(format!("Bad header value for {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Send one request, applying auth, retry and 401 handling.
    #[tracing::instrument(skip(self, body, options), fields(method = %method, path = %path))]
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<HttpResponse> {
        let headers = self.build_headers(path, &body, &options)?;
        let request = HttpRequest {
            method,
            url: self.url_for(path),
            headers,
            query: options.query,
            body,
        };

        let mut retries = 0;
        loop {
            let start = Instant::now();
            let response = self.transport.send(request.clone()).await.map_err(|e| {
                tracing::error!(error = %e, "Request failed before a response");
                e
            })?;
            let duration = start.elapsed();

            if response.is_success() {
                tracing::debug!(
                    status = response.status,
                    duration_ms = duration.as_millis(),
                    "Request succeeded"
                );
                return Ok(response);
            }

            if self.retry.should_retry(response.status, retries) {
                retries += 1;
                tracing::warn!(
                    status = response.status,
                    retry = retries,
                    delay_ms = self.retry.delay.as_millis(),
                    "Transient failure, retrying"
                );
                tokio::time::sleep(self.retry.delay).await;
                continue;
            }

            if response.status == 401 {
                self.handle_unauthorized(&response.url);
            }

            tracing::warn!(
                status = response.status,
                duration_ms = duration.as_millis(),
                "Request failed"
            );
            return Err(ApiError::Http {
                status: response.status,
                body: response.json_body(),
                url: response.url,
            });
        }
    }

    fn handle_unauthorized(&self, url: &str) {
        if !endpoints::is_critical(url) {
            tracing::warn!(url, "401 from non-critical endpoint, session kept");
            return;
        }

        tracing::warn!(url, "401 from critical endpoint, clearing session");
        self.tokens.clear_session();

        let current = self.navigator.current_route();
        let current_path = current.split(['?', '#']).next().unwrap_or_default();
        if current_path != LOGIN_ROUTE {
            self.navigator.navigate(LOGIN_ROUTE);
        }
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
        let bytes: &[u8] = if response.body.is_empty() { b"null" } else { &response.body };
        serde_json::from_slice(bytes).map_err(|e| {
            tracing::error!(error = %e, url = %response.url, "Response does not match the declared shape");
            ApiError::Decode(e.to_string())
        })
    }

    fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        let response = self.dispatch(Method::GET, path, RequestBody::Empty, options).await?;
        Self::decode(&response)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(Method::POST, path, Self::json_body(body)?, options).await?;
        Self::decode(&response)
    }

    /// POST without a body (state transitions such as `/cancel`).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        let response = self.dispatch(Method::POST, path, RequestBody::Empty, options).await?;
        Self::decode(&response)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(Method::PUT, path, Self::json_body(body)?, options).await?;
        Self::decode(&response)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(Method::PATCH, path, Self::json_body(body)?, options).await?;
        Self::decode(&response)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        let response = self.dispatch(Method::DELETE, path, RequestBody::Empty, options).await?;
        Self::decode(&response)
    }

    /// Multipart POST for file uploads.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
        options: RequestOptions,
    ) -> Result<T> {
        let response = self
            .dispatch(Method::POST, path, RequestBody::Multipart(form), options)
            .await?;
        Self::decode(&response)
    }
}

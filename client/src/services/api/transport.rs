//! # Transport
//!
//! Wire-level request/response types and the `reqwest` implementation of
//! [`Transport`].

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};

use crate::core::error::{ApiError, Result};
use crate::core::service::Transport;

/// A file attached to a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: Some(content_type.into()),
            bytes,
        }
    }
}

/// Owned multipart form.
///
/// Kept as plain data rather than a `reqwest::multipart::Form` so the request can
/// be rebuilt for a retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, FileUpload)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
        self.files.push((name.into(), file));
        self
    }

    fn to_reqwest(&self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        for (name, file) in &self.files {
            let mut part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone());
            if let Some(content_type) = &file.content_type {
                part = part
                    .mime_str(content_type)
                    .map_err(|e| ApiError::InvalidRequest(format!("Bad content type {}: {}", content_type, e)))?;
            }
            form = form.part(name.clone(), part);
        }
        Ok(form)
    }
}

/// Request body variants.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// Fully assembled outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

/// Raw response: status, final URL and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub url: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON, `None` when empty or not JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
///
/// No request timeout is configured; the platform default applies.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
                builder.body(bytes)
            }
            RequestBody::Multipart(form) => builder.multipart(form.to_reqwest()?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, url, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_form_builder_keeps_order() {
        let form = MultipartForm::new()
            .text("documentType", "PASSPORT")
            .file("file", FileUpload::new("id.png", "image/png", vec![1, 2, 3]));

        assert_eq!(form.fields, vec![("documentType".to_string(), "PASSPORT".to_string())]);
        assert_eq!(form.files[0].0, "file");
        assert_eq!(form.files[0].1.bytes, vec![1, 2, 3]);
        assert!(RequestBody::Multipart(form).is_multipart());
    }

    #[test]
    fn test_multipart_rejects_bad_content_type() {
        let form = MultipartForm::new().file("file", FileUpload::new("x", "not a mime", vec![]));
        assert!(matches!(form.to_reqwest(), Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_response_json_body() {
        let response = HttpResponse {
            status: 500,
            url: "http://localhost/api/x".to_string(),
            body: br#"{"detail":"boom"}"#.to_vec(),
        };
        assert!(!response.is_success());
        assert_eq!(response.json_body().unwrap()["detail"], "boom");

        let empty = HttpResponse { body: Vec::new(), ..response };
        assert_eq!(empty.json_body(), None);
    }
}

//! Test support: a scripted transport and a ready-wired dispatcher.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::Notify;

use crate::app::navigation::MemoryNavigator;
use crate::core::error::{ApiError, Result};
use crate::core::service::Transport;
use crate::services::api::client::ApiClient;
use crate::services::api::retry::RetryPolicy;
use crate::services::api::transport::{HttpRequest, HttpResponse};
use crate::storage::{AuthSession, MemoryStorage, SessionStore};

pub const TEST_ORIGIN: &str = "http://localhost:8080";
pub const TEST_TOKEN: &str = "test-access-token";

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_raw(&self, status: u16, body: Vec<u8>) {
        self.responses.lock().push_back(Ok(HttpResponse {
            status,
            url: String::new(),
            body,
        }));
    }

    pub fn push_json(&self, status: u16, value: Value) {
        self.push_raw(status, value.to_string().into_bytes());
    }

    pub fn push_status(&self, status: u16) {
        self.push_raw(status, Vec::new());
    }

    /// 200 with the generic envelope around `data`.
    pub fn push_envelope(&self, data: Value) {
        self.push_json(200, envelope(data));
    }

    pub fn push_network_error(&self, message: &str) {
        self.responses
            .lock()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    /// Every later `send` waits until the returned handle is notified once per request.
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url.clone();
        self.requests.lock().push(request);

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let next = self.responses.lock().pop_front();
        match next {
            Some(Ok(response)) => Ok(HttpResponse { url, ..response }),
            Some(Err(e)) => Err(e),
            None => Err(ApiError::Network(format!("no scripted response for {}", url))),
        }
    }
}

pub fn envelope(data: Value) -> Value {
    json!({
        "success": true,
        "status": 200,
        "message": "OK",
        "data": data,
        "timestamp": "2024-06-01T12:00:00"
    })
}

pub fn page(content: Vec<Value>, number: u32, size: u32, total_elements: u64) -> Value {
    let total_pages = if size == 0 { 0 } else { total_elements.div_ceil(size as u64) };
    json!({
        "content": content,
        "totalElements": total_elements,
        "totalPages": total_pages,
        "number": number,
        "size": size,
        "first": number == 0,
        "last": (number as u64 + 1) >= total_pages,
    })
}

/// Dispatcher over `transport` with a fast retry delay, plus its session and navigator.
pub fn test_client(
    transport: Arc<MockTransport>,
    signed_in: bool,
) -> (Arc<ApiClient>, Arc<SessionStore>, Arc<MemoryNavigator>) {
    let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
    if signed_in {
        session
            .save(&AuthSession::authenticated(TEST_TOKEN.to_string(), "test-refresh-token".to_string()))
            .unwrap();
    }
    let navigator = Arc::new(MemoryNavigator::new("/"));
    let client = ApiClient::new(TEST_ORIGIN, transport, session.clone(), navigator.clone())
        .with_retry_policy(RetryPolicy {
            max_retries: 1,
            delay: Duration::from_millis(5),
        });
    (Arc::new(client), session, navigator)
}

/// Waits until the transport has seen `count` requests.
pub async fn wait_for_requests(transport: &MockTransport, count: usize) {
    for _ in 0..200 {
        if transport.request_count() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("transport never saw {} requests", count);
}

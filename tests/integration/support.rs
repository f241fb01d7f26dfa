//! In-process mock of the Gemini `generateContent` endpoint.
//!
//! Spawns an axum server on an ephemeral port and records every request
//! body, so tests can assert on the exact wire payload the gateway sent.
//! The `generateContent` path segment contains a colon, so the handler is
//! installed as a fallback rather than a routed path.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

/// How the mock provider answers each request, in arrival order.
/// The last script entry repeats once the list is exhausted.
#[derive(Debug, Clone)]
pub enum ProviderScript {
    /// A well-formed response with a single text part.
    Reply(String),
    /// HTTP 200 with an empty candidate list.
    NoCandidates,
    /// An HTTP error with the given status and body.
    Error(u16, String),
}

#[derive(Clone)]
struct ProviderState {
    script: Arc<Vec<ProviderScript>>,
    served: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// A running mock provider.
pub struct MockProvider {
    /// Base URL to point `GatewayConfig::base_url` at.
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockProvider {
    /// Spawns a provider answering every request the same way.
    pub async fn spawn(script: ProviderScript) -> Self {
        Self::spawn_sequence(vec![script]).await
    }

    /// Spawns a provider answering requests with the given scripts in order.
    pub async fn spawn_sequence(script: Vec<ProviderScript>) -> Self {
        assert!(!script.is_empty(), "provider script must not be empty");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ProviderState {
            script: Arc::new(script),
            served: Arc::new(AtomicUsize::new(0)),
            requests: Arc::clone(&requests),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock provider");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock provider exited");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Request bodies received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("Request log poisoned").clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("Request log poisoned").len()
    }
}

async fn handle(State(state): State<ProviderState>, Json(body): Json<Value>) -> Response {
    state
        .requests
        .lock()
        .expect("Request log poisoned")
        .push(body);

    let index = state.served.fetch_add(1, Ordering::SeqCst);
    let step = state
        .script
        .get(index)
        .or_else(|| state.script.last())
        .expect("Provider script is empty")
        .clone();

    match step {
        ProviderScript::Reply(text) => Json(json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ], "role": "model" } }
            ]
        }))
        .into_response(),
        ProviderScript::NoCandidates => Json(json!({ "candidates": [] })).into_response(),
        ProviderScript::Error(status, body) => (
            StatusCode::from_u16(status).expect("Invalid status in script"),
            body,
        )
            .into_response(),
    }
}

/// A standard Gemini error envelope body.
pub fn error_body(code: u16, status: &str, message: &str) -> String {
    json!({
        "error": { "code": code, "message": message, "status": status }
    })
    .to_string()
}

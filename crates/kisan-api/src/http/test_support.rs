//! Shared helpers for router tests: a fake upstream and a oneshot sender.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use kisan_core::advisory::settings::{ProviderSettings, PRODUCTION_REFERER};
use kisan_core::credential::MapCredentialSource;
use kisan_types::config::ProxyConfig;

use crate::state::AppState;

pub(crate) const ALL_KEYS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "sk-openai"),
    ("OPENROUTER_API_KEY", "sk-openrouter"),
];

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn chat_completions(State(canned): State<Canned>, body: String) -> (StatusCode, &'static str) {
    let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
    canned.requests.lock().unwrap().push(parsed);
    (canned.status, canned.body)
}

pub(crate) struct FakeUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeUpstream {
    /// Chat-completion bodies received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve a canned chat-completions endpoint on an ephemeral port.
pub(crate) async fn spawn_upstream(status: StatusCode, body: &'static str) -> FakeUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(Canned {
            status,
            body,
            requests: requests.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    FakeUpstream {
        base_url: format!("http://{addr}/v1"),
        requests,
    }
}

/// State whose providers both point at `base_url`.
pub(crate) fn test_state(base_url: &str, keys: &[(&str, &str)]) -> AppState {
    let mut config = ProxyConfig::default();
    config.providers.openai.base_url = Some(base_url.to_string());
    config.providers.openrouter.base_url = Some(base_url.to_string());

    AppState::new(
        &config,
        ProviderSettings::from_config(&config, PRODUCTION_REFERER),
        Arc::new(MapCredentialSource::from_iter(keys.iter().copied())),
    )
    .unwrap()
}

/// Send one request; returns status, content type, and the body as JSON
/// (or as a JSON string when the body is not JSON).
pub(crate) async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&bytes).to_string();
    let value = serde_json::from_str(&text).unwrap_or(Value::String(text));

    (status, content_type, value)
}

/// Send a CORS preflight for `uri`; returns status, content type, the
/// `access-control-allow-origin` header, and the body as JSON.
pub(crate) async fn preflight(
    router: Router,
    uri: &str,
) -> (StatusCode, Option<String>, Option<String>, Value) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, "http://other.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let header_str = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    let content_type = header_str(header::CONTENT_TYPE);
    let allow_origin = header_str(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, content_type, allow_origin, value)
}

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use intent_relay::{
    config::OllamaConfig,
    intent::IntentClassifier,
    llm::OllamaClient,
    server::{handlers::AppState, router},
};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Build the full router against an Ollama server at `host`.
pub fn create_test_app(host: &str) -> Router {
    let config = OllamaConfig {
        host: host.to_string(),
        request_timeout_secs: None,
    };
    let client = OllamaClient::new(&config).expect("valid test host");
    router(AppState::new(IntentClassifier::new(Arc::new(client))))
}

/// Body Ollama sends for a non-streaming generation.
pub fn ollama_reply(response: &str) -> Value {
    json!({
        "model": "phi3:mini",
        "created_at": "2024-05-01T10:00:00Z",
        "response": response,
        "done": true
    })
}

/// Mount a `/api/generate` stub answering `response` and expecting `calls` hits.
pub async fn mount_generate(server: &MockServer, response: &str, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ollama_reply(response)))
        .expect(calls)
        .mount(server)
        .await;
}

/// Mount a `/api/generate` stub that must never be called.
pub async fn forbid_generate(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ollama_reply("unknown")))
        .expect(0)
        .mount(server)
        .await;
}

pub fn classify_request(http_method: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(http_method)
        .uri("/classify")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Address of a local port with nothing listening on it.
pub async fn unused_local_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn assert_cors_headers<B>(response: &Response<B>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

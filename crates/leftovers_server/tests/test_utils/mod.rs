//! Test helpers for driving the router in-process.

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use leftovers_core::{DecodingConfig, GeneratedText, Prompt};
use leftovers_error::{ModelError, ModelErrorKind};
use leftovers_interface::TextGenerator;
use leftovers_models::{ModelHandle, ModelProvider};
use leftovers_recipe::RecipeGenerator;
use leftovers_server::create_router;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Mock model that either continues the prompt or fails.
pub struct MockModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockModel {
    /// Number of generate calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompt text of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().expect("prompt lock poisoned").clone()
    }
}

#[async_trait]
impl TextGenerator for MockModel {
    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        prompt: &Prompt,
        _config: &DecodingConfig,
    ) -> Result<GeneratedText, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().expect("prompt lock poisoned") = Some(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(GeneratedText::from(format!("{}{}", prompt, text))),
            Err(message) => Err(ModelError::new(ModelErrorKind::Other(message.clone()))),
        }
    }
}

/// Router backed by a mock model replying with `reply`.
pub fn app(reply: Result<&str, &str>) -> (Router, Arc<MockModel>) {
    let mock = Arc::new(MockModel {
        reply: reply.map(str::to_string).map_err(str::to_string),
        calls: AtomicUsize::new(0),
        last_prompt: Mutex::new(None),
    });
    let handle: ModelHandle = mock.clone();
    let generator = RecipeGenerator::new(Arc::new(ModelProvider::with_handle(handle)));
    (create_router(Arc::new(generator)), mock)
}

/// Sends a request and returns status and body text.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Form-encoded POST to `/`.
pub fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// JSON POST to `path`.
pub fn json_post(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

//! Test utilities for recipe generation tests.
//!
//! Provides a scriptable stand-in for the text-generation model.

use async_trait::async_trait;
use leftovers_core::{DecodingConfig, GeneratedText, Prompt};
use leftovers_error::{ModelError, ModelErrorKind};
use leftovers_interface::TextGenerator;
use leftovers_models::{ModelHandle, ModelProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// How the mock model responds.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Echo the prompt followed by this continuation
    Continue(String),
    /// Return this text verbatim
    Raw(String),
    /// Return no candidates
    Empty,
    /// Fail with this description
    Fail(String),
}

/// Mock text-generation model recording every call.
#[derive(Debug)]
pub struct MockGenerator {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_config: Mutex<Option<DecodingConfig>>,
}

impl MockGenerator {
    /// Creates a mock with the given behavior.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_config: Mutex::new(None),
        }
    }

    /// Number of generate calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Decoding settings of the most recent call.
    pub fn last_config(&self) -> Option<DecodingConfig> {
        *self.last_config.lock().expect("config lock poisoned")
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        prompt: &Prompt,
        config: &DecodingConfig,
    ) -> Result<GeneratedText, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_config.lock().expect("config lock poisoned") = Some(*config);

        match &self.behavior {
            MockBehavior::Continue(text) => Ok(GeneratedText::from(format!("{}{}", prompt, text))),
            MockBehavior::Raw(text) => Ok(GeneratedText::from(text.clone())),
            MockBehavior::Empty => Ok(GeneratedText::default()),
            MockBehavior::Fail(message) => {
                Err(ModelError::new(ModelErrorKind::Other(message.clone())))
            }
        }
    }
}

/// Builds a provider preloaded with a mock, returning both.
pub fn mock_provider(behavior: MockBehavior) -> (Arc<ModelProvider>, Arc<MockGenerator>) {
    let mock = Arc::new(MockGenerator::new(behavior));
    let handle: ModelHandle = mock.clone();
    (Arc::new(ModelProvider::with_handle(handle)), mock)
}

//! HuggingFace text-generation driver.

use super::{HubModelInfo, HuggingFaceErrorBody, HuggingFaceResponse, conversions};
use crate::ModelConfig;
use async_trait::async_trait;
use leftovers_core::{DecodingConfig, GeneratedText, Prompt};
use leftovers_error::{ModelError, ModelErrorKind};
use leftovers_interface::TextGenerator;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, error, info, instrument};

const TEXT_GENERATION: &str = "text-generation";

/// Client for the HuggingFace Inference API text-generation task.
///
/// Behaves like a local transformers `text-generation` pipeline: the
/// returned text is the prompt followed by the model's continuation.
#[derive(Debug, Clone)]
pub struct HuggingFaceGenerator {
    client: Client,
    model: String,
    endpoint: String,
    api_token: Option<String>,
}

impl HuggingFaceGenerator {
    /// Creates a generator for `model`, verifying it against the hub when
    /// `config.verify_on_load()` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, the hub cannot be
    /// reached, the model does not exist, or it serves a task other than
    /// text generation.
    #[instrument(skip(config))]
    pub async fn connect(model: &str, config: &ModelConfig) -> Result<Self, ModelError> {
        let model = model.to_string();
        let client = Client::builder()
            .user_agent(concat!("leftovers/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                error!(error = ?e, "Failed to build HTTP client");
                ModelError::new(ModelErrorKind::ClientCreation(e.to_string()))
            })?;

        let endpoint = format!(
            "{}/models/{}",
            config.inference_url().trim_end_matches('/'),
            model
        );

        let generator = Self {
            client,
            model,
            endpoint,
            api_token: config.api_token().clone(),
        };

        if *config.verify_on_load() {
            generator.verify(config.hub_url()).await?;
        }

        info!(model = %generator.model, endpoint = %generator.endpoint, "Model ready");
        Ok(generator)
    }

    /// Endpoint generation requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Checks the hub metadata for the model.
    #[instrument(skip(self), fields(model = %self.model))]
    async fn verify(&self, hub_url: &str) -> Result<(), ModelError> {
        let url = format!("{}/api/models/{}", hub_url.trim_end_matches('/'), self.model);
        debug!(url = %url, "Verifying model on hub");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Hub request failed");
                ModelError::new(ModelErrorKind::Http(e.to_string()))
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ModelError::new(ModelErrorKind::ModelNotFound(
                self.model.clone(),
            )));
        }
        let response = Self::check_status(response).await?;

        let info: HubModelInfo = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse hub metadata");
            ModelError::new(ModelErrorKind::ResponseParsing(e.to_string()))
        })?;

        match info.pipeline_tag() {
            Some(tag) if tag != TEXT_GENERATION => {
                Err(ModelError::new(ModelErrorKind::UnsupportedPipeline {
                    model: self.model.clone(),
                    pipeline: tag.clone(),
                }))
            }
            _ => {
                debug!(pipeline = ?info.pipeline_tag(), "Model verified");
                Ok(())
            }
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Maps a non-success response to [`ModelErrorKind::Api`].
    async fn check_status(response: Response) -> Result<Response, ModelError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<HuggingFaceErrorBody>(&text)
            .map(|body| body.error().clone())
            .unwrap_or(text);

        error!(status = %status, error = %message, "API error");
        Err(ModelError::new(ModelErrorKind::Api {
            status: status.as_u16(),
            message,
        }))
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt, config), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(
        &self,
        prompt: &Prompt,
        config: &DecodingConfig,
    ) -> Result<GeneratedText, ModelError> {
        let body = conversions::to_request(prompt, config)?;

        debug!(endpoint = %self.endpoint, "Sending text-generation request");

        let response = self
            .authorize(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ModelError::new(ModelErrorKind::Http(e.to_string()))
            })?;
        let response = Self::check_status(response).await?;

        let responses: Vec<HuggingFaceResponse> = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ModelError::new(ModelErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(candidates = responses.len(), "Received response");
        conversions::from_response(responses)
    }
}

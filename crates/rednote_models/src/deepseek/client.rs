//! Client for DeepSeek and other OpenAI-compatible chat endpoints.

use crate::deepseek::{ChatResponse, conversions};
use async_trait::async_trait;
use rednote_core::{GenerateRequest, GenerateResponse};
use rednote_error::{DeepSeekError, DeepSeekErrorKind, RednoteResult};
use rednote_interface::RednoteDriver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Environment variable holding the API credential.
pub const DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";

/// Default base URL for a locally hosted DeepSeek model (Ollama-style).
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Client for any API that speaks the OpenAI chat completions format.
///
/// Construct once at process start and inject wherever generation happens;
/// there is no global client state.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl DeepSeekClient {
    /// Creates a new client with an explicit credential.
    #[instrument(skip(api_key), fields(model = %model, url = %base_url))]
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        debug!(model = %model, url = %base_url, "Created DeepSeek client");

        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Creates a client with the credential taken from `DEEPSEEK_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `DeepSeekErrorKind::MissingApiKey` when the variable is
    /// unset. This is checked at construction, before any request is made.
    pub fn from_env(model: impl Into<String>, base_url: impl Into<String>) -> Result<Self, DeepSeekError> {
        let api_key = std::env::var(DEEPSEEK_API_KEY)
            .map_err(|_| DeepSeekError::new(DeepSeekErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key, model.into(), base_url.into()))
    }

    /// Rebuilds the client with a per-request timeout.
    ///
    /// The remote boundary enforces no timeout of its own that we can rely
    /// on, so callers wanting deterministic latency bounds opt in here.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, DeepSeekError> {
        self.client = Client::builder().timeout(timeout).build().map_err(|e| {
            DeepSeekError::new(DeepSeekErrorKind::Http(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(self)
    }

    /// Generates a response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, DeepSeekError> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            model = %self.model,
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                DeepSeekError::new(DeepSeekErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(DeepSeekError::new(DeepSeekErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            DeepSeekError::new(DeepSeekErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        Ok(conversions::from_chat_response(&chat_response))
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RednoteDriver for DeepSeekClient {
    async fn generate(&self, request: &GenerateRequest) -> RednoteResult<GenerateResponse> {
        Ok(DeepSeekClient::generate(self, request).await?)
    }

    fn name(&self) -> &str {
        "deepseek"
    }
}

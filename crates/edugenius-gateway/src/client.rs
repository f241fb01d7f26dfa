//! The model gateway: the sole boundary to the generation service.

use tracing::{debug, error, warn};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::fallback;
use crate::session::ChatSession;
use crate::wire::{
    extract_api_message, Content, GenerateContentRequest, GenerateContentResponse,
    SystemInstruction,
};

/// Gateway to the Gemini text-generation endpoint.
///
/// Cheap to clone: the underlying HTTP client is reference-counted. The
/// public generation operations never fail across the boundary; provider
/// failures are logged and mapped to the fixed strings in [`fallback`].
#[derive(Debug, Clone)]
pub struct ModelGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl ModelGateway {
    /// Creates a gateway with the given configuration.
    ///
    /// A missing API credential does not fail construction; requests fail
    /// at first use with the error fallback text instead.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a gateway configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Sends a single prompt with no persisted history.
    ///
    /// Always returns a usable string: the model's text on success, the
    /// fixed empty-generation fallback when the provider produces no text,
    /// and the fixed generation-error fallback on any other failure.
    pub async fn one_shot_generate(&self, prompt: &str) -> String {
        let contents = [Content::user(prompt)];
        match self.generate(None, &contents).await {
            Ok(text) => text,
            Err(GatewayError::EmptyResponse) => {
                warn!("provider returned an empty payload for one-shot generation");
                fallback::EMPTY_GENERATION.to_string()
            }
            Err(err) => {
                error!(
                    kind = %err.kind(),
                    transient = err.is_transient(),
                    error = %err,
                    "one-shot generation failed"
                );
                fallback::GENERATION_ERROR.to_string()
            }
        }
    }

    /// Opens a stateful session bound to one system instruction.
    ///
    /// The session owns the provider-side turn history; it must be created
    /// once per conversation and reused for every turn so the model keeps
    /// its context.
    #[must_use]
    pub fn create_session(&self, system_instruction: impl Into<String>) -> ChatSession {
        ChatSession::new(self.clone(), system_instruction.into())
    }

    /// Internal request path shared by both operation shapes.
    pub(crate) async fn generate(
        &self,
        system_instruction: Option<&str>,
        contents: &[Content],
    ) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey)?;

        let request = GenerateContentRequest {
            system_instruction: system_instruction.map(SystemInstruction::new),
            contents: contents.to_vec(),
        };

        debug!(
            model = %self.config.model,
            turns = contents.len(),
            "dispatching generateContent request"
        );

        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(GatewayError::api(
                status.as_u16(),
                extract_api_message(&payload),
            ));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload)?;
        parsed.into_text().ok_or(GatewayError::EmptyResponse)
    }
}

//! Configuration for the model gateway.
//!
//! The API credential is read from the process environment at startup.
//! A missing credential is tolerated at construction time: the gateway is
//! still built, and every request fails at first use with the standard
//! error fallback text instead of crashing the application.

use serde::{Deserialize, Serialize};

/// Model identifier used for all generation requests.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API credential.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Fallback credential variable, matching older deployments.
const LEGACY_API_KEY_VAR: &str = "API_KEY";

/// Environment variable overriding the provider base URL.
const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

/// Default base URL of the Gemini REST API.
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Default model identifier.
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Configuration for the model gateway.
///
/// Controls which provider endpoint and model the gateway talks to and
/// which credential it authenticates with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// API credential. `None` is tolerated at construction time; every
    /// gateway call fails with the error fallback text until a key is set.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the provider REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

impl GatewayConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Looks for the credential in `GEMINI_API_KEY`, then `API_KEY`.
    /// Blank values are treated as absent. `GEMINI_BASE_URL` overrides
    /// the provider endpoint (useful for tests and proxies).
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .or_else(|| std::env::var(LEGACY_API_KEY_VAR).ok())
            .filter(|key| !key.trim().is_empty());

        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_base_url);

        Self {
            api_key,
            base_url,
            model: default_model(),
        }
    }

    /// Creates a configuration with the given credential and defaults for
    /// everything else.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Replaces the base URL, consuming and returning the configuration.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the model identifier, consuming and returning the
    /// configuration.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    pub(crate) fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

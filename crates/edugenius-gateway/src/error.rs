//! Error types for the model gateway.
//!
//! These errors never cross the gateway's public generation surface:
//! `one_shot_generate` and `send_turn` absorb them into fixed fallback
//! strings. They exist for the internal request path, for logging, and for
//! classifying provider failures.

/// A specialized `Result` type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur while talking to the model provider.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No API credential was configured.
    ///
    /// The gateway is constructed without a key on purpose (startup must
    /// not crash); the error surfaces at first use.
    #[error("No API credential configured\n\nSuggestion: Set GEMINI_API_KEY in the environment")]
    MissingApiKey,

    /// The HTTP request itself failed (DNS, connect, TLS, body read).
    #[error("Provider request failed: {0}\n\nSuggestion: Check your network connection")]
    Transport(#[from] reqwest::Error),

    /// The provider returned a non-success status.
    #[error("Provider API error ({kind}): {message}\n\nSuggestion: {suggestion}")]
    Api {
        /// Classified kind of the failure.
        kind: GatewayErrorKind,
        /// Message extracted from the provider's error payload.
        message: String,
        /// Actionable suggestion for the operator.
        suggestion: String,
    },

    /// The provider answered successfully but produced no usable text.
    #[error("Provider returned an empty payload")]
    EmptyResponse,

    /// The provider's response body could not be decoded.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Categories of provider failures for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// Authentication failure (invalid or missing API key).
    Authentication,
    /// Rate limit or quota exceeded.
    RateLimit,
    /// Server error (5xx responses).
    Server,
    /// Network connectivity issues.
    Network,
    /// Successful transport but an empty payload.
    Empty,
    /// Other unclassified errors.
    Other,
}

impl std::fmt::Display for GatewayErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication => write!(f, "authentication"),
            Self::RateLimit => write!(f, "rate_limit"),
            Self::Server => write!(f, "server"),
            Self::Network => write!(f, "network"),
            Self::Empty => write!(f, "empty"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl GatewayErrorKind {
    /// Classifies an HTTP status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Authentication,
            429 => Self::RateLimit,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }

    /// Returns a suggestion message for this error kind.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::Authentication => "Check your API key or credentials",
            Self::RateLimit => "Wait and retry, or reduce request frequency",
            Self::Server => "Retry later; the provider may be experiencing issues",
            Self::Network => "Check your network connection",
            Self::Empty => "Retry the request; the model produced no text",
            Self::Other => "Check the provider's status page",
        }
    }
}

impl GatewayError {
    /// Creates an `Api` error from an HTTP status and provider message,
    /// attaching the suggestion for the classified kind.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        let kind = GatewayErrorKind::from_status(status);
        Self::Api {
            kind,
            message: message.into(),
            suggestion: kind.suggestion().to_string(),
        }
    }

    /// Returns the classified kind of this error.
    #[must_use]
    pub const fn kind(&self) -> GatewayErrorKind {
        match self {
            Self::MissingApiKey => GatewayErrorKind::Authentication,
            Self::Transport(_) => GatewayErrorKind::Network,
            Self::Api { kind, .. } => *kind,
            Self::EmptyResponse => GatewayErrorKind::Empty,
            Self::MalformedResponse(_) => GatewayErrorKind::Other,
        }
    }

    /// Returns `true` if this error is transient and may be retried.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self.kind(),
            GatewayErrorKind::RateLimit | GatewayErrorKind::Server | GatewayErrorKind::Network
        )
    }
}

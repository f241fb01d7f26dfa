//! Wire types for the Gemini `generateContent` endpoint.
//!
//! The provider protocol is treated as opaque beyond this module: requests
//! carry an optional system instruction and an ordered list of turns, and
//! the only thing extracted from a response is the first candidate's text.

use serde::{Deserialize, Serialize};

/// Author of a conversation turn, as the provider names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    /// Text supplied by the end user.
    User,
    /// Text produced by the model.
    Model,
}

/// One turn of provider-side conversation content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Who authored this turn.
    pub role: ContentRole,
    /// Text parts of the turn.
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates a user turn with a single text part.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Creates a model turn with a single text part.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::Model,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A single text part of a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text payload.
    pub text: String,
}

/// System instruction block persisted for the lifetime of a session.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SystemInstruction {
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    pub contents: Vec<Content>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the first candidate's text.
    ///
    /// Whitespace-only text counts as absent, so an effectively blank
    /// payload maps to the empty-response error.
    pub(crate) fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .find_map(|part| part.text.filter(|text| !text.trim().is_empty()))
    }
}

/// Extracts a human-readable message from a provider error payload.
///
/// Falls back to the raw body when the payload is not the documented
/// `{"error": {...}}` envelope.
pub(crate) fn extract_api_message(body: &str) -> String {
    #[derive(Debug, Deserialize)]
    struct ErrorEnvelope {
        error: Option<ApiError>,
    }
    #[derive(Debug, Deserialize)]
    struct ApiError {
        message: Option<String>,
        status: Option<String>,
        code: Option<i64>,
    }

    if let Ok(ErrorEnvelope { error: Some(err) }) = serde_json::from_str::<ErrorEnvelope>(body) {
        let message = err.message.unwrap_or_else(|| "unknown error".to_string());
        let status = err.status.unwrap_or_else(|| "unknown".to_string());
        let code = err
            .code
            .map_or_else(|| "none".to_string(), |value| value.to_string());
        return format!("{message} (status={status}, code={code})");
    }
    body.to_string()
}

//! EduGenius Model Gateway
//!
//! Sole boundary to the external text-generation service (Google Gemini).
//! Exposes two operation shapes: one-shot completion and a multi-turn
//! session with a persisted system instruction. All provider failures are
//! absorbed here and mapped to fixed user-presentable strings; callers
//! never see provider-specific error shapes.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod session;
pub mod wire;

pub use client::ModelGateway;
pub use config::{GatewayConfig, DEFAULT_MODEL};
pub use error::{GatewayError, GatewayErrorKind, Result};
pub use session::ChatSession;
pub use wire::Content;

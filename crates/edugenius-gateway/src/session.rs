//! Stateful chat sessions with a persisted system instruction.

use tracing::{error, warn};

use crate::client::ModelGateway;
use crate::error::GatewayError;
use crate::fallback;
use crate::wire::Content;

/// Handle to one multi-turn conversation with the model.
///
/// Bound at creation to a fixed system instruction and model identifier.
/// The provider's REST endpoint is stateless, so the session accumulates
/// the turn history locally and resends it with every request; callers
/// only see the "append a turn, get a reply" shape.
#[derive(Debug)]
pub struct ChatSession {
    gateway: ModelGateway,
    system_instruction: String,
    history: Vec<Content>,
}

impl ChatSession {
    pub(crate) const fn new(gateway: ModelGateway, system_instruction: String) -> Self {
        Self {
            gateway,
            system_instruction,
            history: Vec::new(),
        }
    }

    /// Sends one user turn and returns the model's reply.
    ///
    /// Follows the gateway's failure policy: always returns a usable
    /// string. A failed exchange is rolled back out of the provider-side
    /// history so synthetic error text never becomes model context.
    pub async fn send_turn(&mut self, user_text: &str) -> String {
        self.history.push(Content::user(user_text));

        match self
            .gateway
            .generate(Some(&self.system_instruction), &self.history)
            .await
        {
            Ok(reply) => {
                self.history.push(Content::model(reply.clone()));
                reply
            }
            Err(err) => {
                // The failed turn is not part of the conversation.
                self.history.pop();
                match err {
                    GatewayError::EmptyResponse => {
                        warn!("provider returned an empty payload for chat turn");
                        fallback::EMPTY_REPLY.to_string()
                    }
                    other => {
                        error!(
                            kind = %other.kind(),
                            transient = other.is_transient(),
                            error = %other,
                            "chat turn failed"
                        );
                        fallback::CONNECTION_ERROR.to_string()
                    }
                }
            }
        }
    }

    /// Number of turns currently held in the provider-side history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The system instruction this session was created with.
    #[must_use]
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}

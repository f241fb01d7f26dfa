//! Chat session manager for the student dashboard.
//!
//! A two-state machine (`Idle` / `AwaitingReply`) over an append-only
//! transcript. Only one turn may be in flight at a time, so replies can
//! never be reordered and no queue is needed. Completions carry an epoch
//! so a reply that resolves after a reset is detectably discarded instead
//! of mutating stale state.

use tracing::debug;

use edugenius_gateway::{ChatSession, ModelGateway};

use crate::message::Message;
use crate::prompts::tutor_system_instruction;

/// Greeting seeded into every fresh transcript.
pub const GREETING: &str = "Привет! Я твой персональный ИИ-репетитор. \
Какую тему ты хочешь разобрать сегодня? Я могу объяснить материал или дать интересное задание.";

/// State of the chat turn cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatState {
    /// Ready to accept a new user turn.
    #[default]
    Idle,
    /// A turn was dispatched and its reply has not resolved yet.
    AwaitingReply,
}

/// Why a submission was rejected before dispatch.
///
/// Rejections are not failures: nothing was appended and nothing was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnRejected {
    /// The text was empty or whitespace-only.
    #[error("message text is empty")]
    EmptyInput,
    /// A previous turn is still awaiting its reply.
    #[error("a reply is already pending")]
    ReplyPending,
}

/// Proof that a turn was begun; required to complete it.
///
/// Carries the epoch the turn belongs to. A ticket issued before a
/// [`ChatManager::reset`] no longer matches and its completion is ignored.
#[derive(Debug, PartialEq, Eq)]
pub struct TurnTicket {
    epoch: u64,
}

/// Owns one tutoring conversation: the gateway session, the local
/// transcript, and the turn state machine.
///
/// Created exactly once per student dashboard and torn down on logout;
/// recreating it would reset the model-side context.
#[derive(Debug)]
pub struct ChatManager {
    session: ChatSession,
    transcript: Vec<Message>,
    state: ChatState,
    epoch: u64,
}

impl ChatManager {
    /// Opens the tutoring session and seeds the transcript with the
    /// greeting message.
    #[must_use]
    pub fn new(gateway: &ModelGateway) -> Self {
        Self {
            session: gateway.create_session(tutor_system_instruction()),
            transcript: vec![Message::model(GREETING)],
            state: ChatState::Idle,
            epoch: 0,
        }
    }

    /// The conversation so far, in insertion order.
    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Current turn state.
    #[must_use]
    pub const fn state(&self) -> ChatState {
        self.state
    }

    /// The underlying gateway session.
    #[must_use]
    pub const fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Starts a turn: validates the input, appends the user message, and
    /// transitions to `AwaitingReply`.
    ///
    /// Rejects empty or whitespace-only text, and rejects any submission
    /// while a reply is pending so duplicate concurrent sends are
    /// structurally impossible.
    pub fn begin_turn(&mut self, text: &str) -> Result<TurnTicket, TurnRejected> {
        if text.trim().is_empty() {
            return Err(TurnRejected::EmptyInput);
        }
        if self.state == ChatState::AwaitingReply {
            return Err(TurnRejected::ReplyPending);
        }

        self.transcript.push(Message::user(text));
        self.state = ChatState::AwaitingReply;
        self.epoch += 1;
        Ok(TurnTicket { epoch: self.epoch })
    }

    /// Finishes a turn: appends the model message and returns to `Idle`.
    ///
    /// Returns `false` without mutating anything when the ticket is stale
    /// (the manager was reset after the turn began).
    pub fn complete_turn(&mut self, ticket: TurnTicket, reply: impl Into<String>) -> bool {
        if ticket.epoch != self.epoch || self.state != ChatState::AwaitingReply {
            debug!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "discarding stale chat completion"
            );
            return false;
        }

        self.transcript.push(Message::model(reply));
        self.state = ChatState::Idle;
        true
    }

    /// Sends one user turn end to end and returns the reply text.
    ///
    /// Drives `begin_turn`, the gateway call, and `complete_turn` in
    /// order. The reply is always a usable string (real or synthetic), so
    /// every user turn gains exactly one paired model message.
    pub async fn send(&mut self, text: &str) -> Result<String, TurnRejected> {
        let ticket = self.begin_turn(text)?;
        let reply = self.session.send_turn(text).await;
        self.complete_turn(ticket, reply.clone());
        Ok(reply)
    }

    /// Invalidates any in-flight turn and returns to `Idle`.
    ///
    /// Outstanding tickets become stale; their completions are discarded.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = ChatState::Idle;
    }
}

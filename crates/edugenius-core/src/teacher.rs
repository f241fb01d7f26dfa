//! Request orchestrator for the teacher dashboard.
//!
//! Owns the state of one-shot generation requests (`Idle` / `Loading` /
//! `Done` / `Failed`) and routes to lesson-plan or quiz prompt
//! construction based on the selected content type. Exactly one result is
//! live at a time; each new request clears the previous one, and an epoch
//! guard discards completions that resolve after a tab switch.

use tracing::debug;

use edugenius_gateway::ModelGateway;

use crate::prompts::{build_lesson_prompt, build_quiz_prompt, parse_question_count, Difficulty};

/// Default grade label preselected in the teacher form.
pub const DEFAULT_GRADE: &str = "9 Класс";

/// Which generator the teacher currently has selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    /// Lesson-plan generation (default tab).
    #[default]
    Lesson,
    /// Quiz generation.
    Quiz,
}

/// State of the one-shot generation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    /// No request has been made (or the previous result was cleared).
    #[default]
    Idle,
    /// A request is in flight; the trigger is disabled.
    Loading,
    /// The last request resolved with this Markdown text.
    Done(String),
    /// An unexpected failure escaped the gateway's absorption.
    Failed,
}

impl GenerationState {
    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The live result text, if any.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::Done(text) => Some(text),
            _ => None,
        }
    }
}

/// Why a generation request was rejected before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GenerateRejected {
    /// The topic field was empty or whitespace-only.
    #[error("topic is empty")]
    EmptyTopic,
    /// A generation request is already in flight.
    #[error("a generation request is already in flight")]
    AlreadyLoading,
}

/// Form parameters for one generation request.
///
/// Transient: rebuilt from the form fields on each request, never
/// persisted. `detail` is a duration for lessons and a question count for
/// quizzes, interpreted contextually.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Subject of the lesson or quiz. Must be non-empty to dispatch.
    pub topic: String,
    /// Grade label, e.g. `"9 Класс"`.
    pub grade_level: String,
    /// Duration text (lesson) or raw question count (quiz).
    pub detail: String,
    /// Quiz difficulty; ignored by the lesson flow.
    pub difficulty: Difficulty,
}

/// An accepted generation request; required to publish its result.
///
/// Carries the built prompt and the epoch it belongs to. A request issued
/// before a tab switch no longer matches and its completion is discarded.
#[derive(Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    epoch: u64,
    prompt: String,
}

impl GenerationRequest {
    /// The prompt to send to the gateway.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// The teacher dashboard's content generator.
#[derive(Debug, Default)]
pub struct ContentDesk {
    content_type: ContentType,
    state: GenerationState,
    epoch: u64,
}

impl ContentDesk {
    /// Creates a desk on the lesson tab with no result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected content type.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Current request state.
    #[must_use]
    pub const fn state(&self) -> &GenerationState {
        &self.state
    }

    /// The live result text, if any.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.state.result()
    }

    /// Switches the selected content type.
    ///
    /// Clears any prior result so stale content from the other generator
    /// is never shown under the new tab, and invalidates any in-flight
    /// request so its late completion is discarded.
    pub fn select(&mut self, content_type: ContentType) {
        if content_type == self.content_type {
            return;
        }
        self.content_type = content_type;
        self.state = GenerationState::Idle;
        self.epoch += 1;
    }

    /// Starts a generation request for the current content type.
    ///
    /// Rejects an empty topic and concurrent requests. On acceptance the
    /// previous result is cleared immediately (no stale content while
    /// loading) and the built prompt is returned for dispatch.
    pub fn begin(&mut self, params: &GenerationParams) -> Result<GenerationRequest, GenerateRejected> {
        let topic = params.topic.trim();
        if topic.is_empty() {
            return Err(GenerateRejected::EmptyTopic);
        }
        if self.state.is_loading() {
            return Err(GenerateRejected::AlreadyLoading);
        }

        let prompt = match self.content_type {
            ContentType::Lesson => {
                build_lesson_prompt(topic, &params.grade_level, &params.detail)
            }
            ContentType::Quiz => build_quiz_prompt(
                topic,
                params.difficulty,
                parse_question_count(&params.detail),
            ),
        };

        self.state = GenerationState::Loading;
        self.epoch += 1;
        Ok(GenerationRequest {
            epoch: self.epoch,
            prompt,
        })
    }

    /// Publishes the resolved text for an accepted request.
    ///
    /// Returns `false` without mutating anything when the request is stale
    /// (the tab was switched after it began).
    pub fn complete(&mut self, request: GenerationRequest, text: impl Into<String>) -> bool {
        if !self.accepts(&request) {
            return false;
        }
        self.state = GenerationState::Done(text.into());
        true
    }

    /// Records an unexpected failure for an accepted request.
    ///
    /// The gateway already maps provider failures to usable strings, so
    /// this path only covers exceptions escaping that absorption.
    pub fn fail(&mut self, request: GenerationRequest) -> bool {
        if !self.accepts(&request) {
            return false;
        }
        self.state = GenerationState::Failed;
        true
    }

    fn accepts(&self, request: &GenerationRequest) -> bool {
        if request.epoch != self.epoch || !self.state.is_loading() {
            debug!(
                request_epoch = request.epoch,
                current_epoch = self.epoch,
                "discarding stale generation completion"
            );
            return false;
        }
        true
    }

    /// Runs one generation request end to end and returns the text.
    ///
    /// The gateway guarantees a string, so the state always reaches
    /// `Done` unless the request was invalidated mid-flight.
    pub async fn generate(
        &mut self,
        gateway: &ModelGateway,
        params: &GenerationParams,
    ) -> Result<String, GenerateRejected> {
        let request = self.begin(params)?;
        let text = gateway.one_shot_generate(request.prompt()).await;
        self.complete(request, text.clone());
        Ok(text)
    }
}

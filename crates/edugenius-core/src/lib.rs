//! EduGenius Orchestration Core
//!
//! Turns user-facing dashboard state (role, topic, grade, conversation
//! history) into model requests and reconciles the replies back into local
//! state. Three pieces: pure prompt builders, the student chat session
//! manager, and the teacher content-generation orchestrator, tied together
//! by a role sum type that makes cross-role calls unrepresentable.

pub mod chat;
pub mod message;
pub mod prompts;
pub mod role;
pub mod teacher;

pub use chat::{ChatManager, ChatState, TurnRejected, TurnTicket, GREETING};
pub use message::{Message, MessageRole};
pub use prompts::{
    build_lesson_prompt, build_quiz_prompt, parse_question_count, tutor_system_instruction,
    Difficulty, DEFAULT_DURATION, DEFAULT_QUESTION_COUNT,
};
pub use role::{Dashboard, StudentDashboard, TeacherDashboard};
pub use teacher::{
    ContentDesk, ContentType, GenerateRejected, GenerationParams, GenerationRequest,
    GenerationState, DEFAULT_GRADE,
};

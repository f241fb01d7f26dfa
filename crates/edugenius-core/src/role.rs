//! Role lifecycle for the application.
//!
//! A sum type over the three reachable dashboards. Each variant carries
//! only the state relevant to it, so a teacher-flow call while logged in
//! as a student is unrepresentable. Logging out replaces the variant,
//! dropping the chat session handle and transcript with it.

use tracing::info;

use edugenius_gateway::ModelGateway;

use crate::chat::ChatManager;
use crate::teacher::ContentDesk;

/// State owned by a logged-in student.
#[derive(Debug)]
pub struct StudentDashboard {
    /// The tutoring conversation; created once per login.
    pub chat: ChatManager,
}

/// State owned by a logged-in teacher.
#[derive(Debug, Default)]
pub struct TeacherDashboard {
    /// The content generator; created once per login.
    pub desk: ContentDesk,
}

/// The application's role state.
///
/// Selected once at session start; immutable until logout, which discards
/// all in-memory conversation state.
#[derive(Debug, Default)]
pub enum Dashboard {
    /// No role selected; only login operations are reachable.
    #[default]
    LoggedOut,
    /// Student role with its tutoring chat.
    Student(StudentDashboard),
    /// Teacher role with its content generator.
    Teacher(TeacherDashboard),
}

impl Dashboard {
    /// Logs in as a student, opening the tutoring session.
    pub fn log_in_student(&mut self, gateway: &ModelGateway) {
        info!("logging in as student");
        *self = Self::Student(StudentDashboard {
            chat: ChatManager::new(gateway),
        });
    }

    /// Logs in as a teacher.
    pub fn log_in_teacher(&mut self) {
        info!("logging in as teacher");
        *self = Self::Teacher(TeacherDashboard::default());
    }

    /// Logs out, discarding the session handle and transcript.
    ///
    /// Any in-flight request's eventual resolution has nothing left to
    /// mutate; the dropped managers' epoch guards cover handles that
    /// outlived the switch.
    pub fn log_out(&mut self) {
        info!("logging out");
        *self = Self::LoggedOut;
    }

    /// Returns `true` if a role is selected.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        !matches!(self, Self::LoggedOut)
    }

    /// The student dashboard, if that role is active.
    #[must_use]
    pub fn as_student_mut(&mut self) -> Option<&mut StudentDashboard> {
        match self {
            Self::Student(student) => Some(student),
            _ => None,
        }
    }

    /// The teacher dashboard, if that role is active.
    #[must_use]
    pub fn as_teacher_mut(&mut self) -> Option<&mut TeacherDashboard> {
        match self {
            Self::Teacher(teacher) => Some(teacher),
            _ => None,
        }
    }
}

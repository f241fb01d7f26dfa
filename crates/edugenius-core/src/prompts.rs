//! Pure prompt builders.
//!
//! Deterministic, no side effects: the same inputs always yield the same
//! prompt text (the model's output may still vary). All templates are
//! fixed; only the caller-supplied parameters are interpolated.

use serde::{Deserialize, Serialize};

/// Default lesson duration substituted for blank input.
pub const DEFAULT_DURATION: &str = "45 минут";

/// Default question count substituted when the raw input does not parse
/// as a positive integer.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Quiz difficulty levels.
///
/// Rendered with the English labels inside the otherwise Russian prompt,
/// matching what the model was tuned against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    /// Introductory questions.
    Easy,
    /// Standard classroom level (default).
    #[default]
    Medium,
    /// Olympiad-leaning questions.
    Hard,
}

impl Difficulty {
    /// Parses a string into a `Difficulty`, case-insensitively.
    fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// The label embedded into prompts.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str_case_insensitive(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid difficulty '{s}': expected one of 'easy', 'medium', 'hard'"
            ))
        })
    }
}

impl Serialize for Difficulty {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Fixed persona for the student tutoring session.
///
/// Supplied once at session-creation time, not per message.
#[must_use]
pub const fn tutor_system_instruction() -> &'static str {
    "Ты — дружелюбный и терпеливый репетитор ИИ для школьников и студентов.
Твоя цель — объяснять сложные темы простым языком, приводить аналогии и помогать с решением задач.
Не давай прямых ответов на домашнее задание сразу — вместо этого направляй ученика к решению наводящими вопросами.
В конце объяснения всегда предлагай небольшое проверочное задание, чтобы закрепить материал."
}

/// Builds the lesson-plan prompt for the teacher flow.
///
/// Requires a non-empty topic (enforced by the orchestrator before
/// dispatch). A blank or whitespace-only duration is replaced with
/// [`DEFAULT_DURATION`].
#[must_use]
pub fn build_lesson_prompt(topic: &str, grade_level: &str, duration: &str) -> String {
    let duration = if duration.trim().is_empty() {
        DEFAULT_DURATION
    } else {
        duration
    };

    format!(
        "Составь подробный план урока для учителя.
Тема: {topic}
Класс/Уровень: {grade_level}
Продолжительность: {duration}

Структура ответа (используй Markdown):
1. Цели урока
2. Необходимые материалы
3. План урока (с таймингом)
4. Ключевые вопросы для обсуждения
5. Домашнее задание

Будь креативным и предложи интерактивные активности."
    )
}

/// Builds the quiz prompt for the teacher flow.
///
/// Requires a non-empty topic (enforced by the orchestrator before
/// dispatch). Use [`parse_question_count`] to derive `count` from raw
/// form input.
#[must_use]
pub fn build_quiz_prompt(topic: &str, difficulty: Difficulty, count: u32) -> String {
    format!(
        "Создай тест по теме \"{topic}\".
Сложность: {difficulty}
Количество вопросов: {count}

Формат вывода (Markdown):
### Вопрос N
Текст вопроса...
- [ ] Вариант A
- [ ] Вариант B
- [ ] Вариант C
- [ ] Вариант D

(В конце добавь блок \"Ответы\" с правильными вариантами и кратким пояснением)."
    )
}

/// Parses a raw question-count field.
///
/// Anything that is not a positive integer falls back to
/// [`DEFAULT_QUESTION_COUNT`].
#[must_use]
pub fn parse_question_count(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|count| *count > 0)
        .unwrap_or(DEFAULT_QUESTION_COUNT)
}

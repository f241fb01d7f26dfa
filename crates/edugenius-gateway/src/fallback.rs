//! Fixed user-presentable strings for absorbed provider failures.
//!
//! Every failure crossing the gateway boundary maps to one of these
//! strings, so upstream state machines never branch on provider-specific
//! error shapes. Diagnostic detail goes to the log, never to the user.

/// One-shot generation succeeded but the model produced no text.
pub const EMPTY_GENERATION: &str = "Не удалось сгенерировать ответ.";

/// One-shot generation failed (network, auth, quota).
pub const GENERATION_ERROR: &str =
    "Произошла ошибка при генерации. Пожалуйста, проверьте API ключ.";

/// A chat turn succeeded but the model produced no text.
pub const EMPTY_REPLY: &str = "Извини, я не смог ответить. Попробуй еще раз.";

/// A chat turn failed (network, auth, quota).
pub const CONNECTION_ERROR: &str =
    "Произошла ошибка соединения. Проверьте ваш API ключ или интернет.";

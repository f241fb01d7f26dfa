//! End-to-end tests for the student tutoring chat.
//!
//! Each test spawns a scripted mock provider and drives a real
//! `ChatManager` through the gateway, asserting on both the visible
//! transcript and the exact wire payloads.

mod support;

use edugenius_core::{ChatManager, ChatState, MessageRole, TurnRejected, GREETING};
use edugenius_gateway::{fallback, GatewayConfig, ModelGateway};

use support::{error_body, MockProvider, ProviderScript};

fn gateway_for(provider: &MockProvider) -> ModelGateway {
    ModelGateway::new(GatewayConfig::with_api_key("test-key").base_url(&provider.base_url))
}

/// A successful turn appends the user message and the model reply, in
/// that order, and returns the manager to `Idle`.
#[tokio::test]
async fn test_chat_turn_appends_user_and_model_messages() {
    let provider = MockProvider::spawn(ProviderScript::Reply(
        "Теорема Пифагора: a² + b² = c².".to_string(),
    ))
    .await;
    let gateway = gateway_for(&provider);
    let mut chat = ChatManager::new(&gateway);

    assert_eq!(chat.transcript()[0].text, GREETING);

    let reply = chat
        .send("Объясни теорему Пифагора")
        .await
        .expect("Turn was rejected");

    assert_eq!(reply, "Теорема Пифагора: a² + b² = c².");
    assert_eq!(chat.state(), ChatState::Idle);

    let roles: Vec<MessageRole> = chat.transcript().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![MessageRole::Model, MessageRole::User, MessageRole::Model]
    );
    assert_eq!(
        chat.transcript()[1].text,
        "Объясни теорему Пифагора"
    );
    assert_eq!(
        chat.transcript()[2].text,
        "Теорема Пифагора: a² + b² = c²."
    );
}

/// The wire request carries the tutor persona as `system_instruction` and
/// the conversation as `contents`, with the greeting excluded (it is a
/// local seed, not model context).
#[tokio::test]
async fn test_chat_request_carries_persona_and_history() {
    let provider = MockProvider::spawn(ProviderScript::Reply("Хорошо.".to_string())).await;
    let gateway = gateway_for(&provider);
    let mut chat = ChatManager::new(&gateway);

    chat.send("Привет").await.expect("Turn was rejected");

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);

    let persona = requests[0]["system_instruction"]["parts"][0]["text"]
        .as_str()
        .expect("Missing system instruction");
    assert!(persona.contains("репетитор"));

    let contents = requests[0]["contents"]
        .as_array()
        .expect("Missing contents");
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[0]["parts"][0]["text"], "Привет");
}

/// A provider failure yields the fixed connection fallback as the reply,
/// and the failed turn is not replayed as model context: the next request
/// starts from a clean history.
#[tokio::test]
async fn test_chat_failure_falls_back_and_rolls_back_history() {
    let provider = MockProvider::spawn_sequence(vec![
        ProviderScript::Error(
            500,
            error_body(500, "INTERNAL", "Internal error encountered."),
        ),
        ProviderScript::Reply("Теперь получилось.".to_string()),
    ])
    .await;
    let gateway = gateway_for(&provider);
    let mut chat = ChatManager::new(&gateway);

    let reply = chat.send("Первый вопрос").await.expect("Turn was rejected");
    assert_eq!(reply, fallback::CONNECTION_ERROR);
    // The synthetic reply still lands in the transcript and the chat
    // stays usable.
    assert_eq!(chat.transcript().len(), 3);
    assert_eq!(chat.state(), ChatState::Idle);

    let reply = chat.send("Второй вопрос").await.expect("Turn was rejected");
    assert_eq!(reply, "Теперь получилось.");

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    // The failed first turn was dropped from the provider-side history.
    let contents = requests[1]["contents"]
        .as_array()
        .expect("Missing contents");
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["parts"][0]["text"], "Второй вопрос");
}

/// An HTTP 200 with no candidates maps to the fixed empty-reply fallback.
#[tokio::test]
async fn test_chat_empty_candidates_fall_back() {
    let provider = MockProvider::spawn(ProviderScript::NoCandidates).await;
    let gateway = gateway_for(&provider);
    let mut chat = ChatManager::new(&gateway);

    let reply = chat.send("Вопрос").await.expect("Turn was rejected");

    assert_eq!(reply, fallback::EMPTY_REPLY);
    assert_eq!(chat.state(), ChatState::Idle);
}

/// Without a credential the gateway fails locally: the user sees the
/// connection fallback and no request ever reaches the provider.
#[tokio::test]
async fn test_chat_without_credential_never_hits_provider() {
    let provider = MockProvider::spawn(ProviderScript::Reply("ответ".to_string())).await;
    let config = GatewayConfig::default().base_url(&provider.base_url);
    let gateway = ModelGateway::new(config);
    let mut chat = ChatManager::new(&gateway);

    let reply = chat.send("Вопрос").await.expect("Turn was rejected");

    assert_eq!(reply, fallback::CONNECTION_ERROR);
    assert_eq!(provider.request_count(), 0);
}

/// Submissions are validated before anything is appended or sent.
#[tokio::test]
async fn test_chat_rejects_blank_input_without_dispatch() {
    let provider = MockProvider::spawn(ProviderScript::Reply("ответ".to_string())).await;
    let gateway = gateway_for(&provider);
    let mut chat = ChatManager::new(&gateway);

    assert_eq!(chat.send("   ").await, Err(TurnRejected::EmptyInput));
    assert_eq!(chat.transcript().len(), 1);
    assert_eq!(provider.request_count(), 0);
}

/// Consecutive turns accumulate: the second request replays the first
/// exchange so the model keeps the conversation context.
#[tokio::test]
async fn test_chat_history_accumulates_across_turns() {
    let provider = MockProvider::spawn_sequence(vec![
        ProviderScript::Reply("Ответ один.".to_string()),
        ProviderScript::Reply("Ответ два.".to_string()),
    ])
    .await;
    let gateway = gateway_for(&provider);
    let mut chat = ChatManager::new(&gateway);

    chat.send("Вопрос один").await.expect("Turn was rejected");
    chat.send("Вопрос два").await.expect("Turn was rejected");

    let requests = provider.requests();
    let contents = requests[1]["contents"]
        .as_array()
        .expect("Missing contents");
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[1]["parts"][0]["text"], "Ответ один.");
    assert_eq!(contents[2]["parts"][0]["text"], "Вопрос два");

    assert_eq!(chat.transcript().len(), 5);
}

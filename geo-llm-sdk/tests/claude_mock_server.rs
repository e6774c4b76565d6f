use geo_llm_sdk::claude::ClaudeClient;
use geo_llm_sdk::client::LlmClient;
use geo_llm_sdk::error::LlmError;
use geo_llm_sdk::types::{CompletionRequest, Message, Role};
use mockito::Matcher;
use serde_json::json;

fn success_body(text: &str, input_tokens: u32, output_tokens: u32) -> String {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-7-sonnet-20250219",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": input_tokens, "output_tokens": output_tokens}
    })
    .to_string()
}

fn error_body(error_type: &str, message: &str) -> String {
    json!({
        "type": "error",
        "error": {"type": error_type, "message": message}
    })
    .to_string()
}

#[tokio::test]
async fn test_create_message_sends_headers_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "test-key")
        .match_header("anthropic-version", "2023-06-01")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "claude-3-7-sonnet-20250219",
            "max_tokens": 1000,
            "temperature": 0.3,
            "system": "Vous êtes un expert en GEO.",
            "messages": [
                {"role": "user", "content": [{"type": "text", "text": "Bonjour"}]}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body("Salut", 12, 3))
        .create_async()
        .await;

    let client = ClaudeClient::new("test-key")
        .unwrap()
        .with_base_url(server.url());
    let response = client
        .message_builder()
        .model("claude-3-7-sonnet-20250219")
        .max_tokens(1000)
        .temperature(0.3)
        .system("Vous êtes un expert en GEO.")
        .user_message("Bonjour")
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.id, "msg_test");
    assert_eq!(response.text(), Some("Salut"));
    assert_eq!(response.usage.input_tokens, 12);
    assert_eq!(response.usage.output_tokens, 3);
    assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
}

#[tokio::test]
async fn test_complete_through_trait() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_body(Matcher::PartialJson(json!({
            "system": "Be brief.",
            "max_tokens": 50
        })))
        .with_status(200)
        .with_body(success_body("OK", 100, 50))
        .create_async()
        .await;

    let client = ClaudeClient::new("test-key")
        .unwrap()
        .with_base_url(server.url());
    let request = CompletionRequest::new(client.model_name(), 50, vec![Message::user("Ping")])
        .with_system("Be brief.");

    let response = client.complete(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.role, Role::Assistant);
    assert_eq!(response.text(), Some("OK"));
    assert_eq!(response.usage.input_tokens, 100);
    assert_eq!(response.usage.output_tokens, 50);
}

#[tokio::test]
async fn test_complete_rejects_system_role_without_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .expect(0)
        .create_async()
        .await;

    let client = ClaudeClient::new("test-key")
        .unwrap()
        .with_base_url(server.url());
    let request = CompletionRequest::new(
        "claude-3-7-sonnet-20250219",
        10,
        vec![Message::text(Role::System, "sys")],
    );

    let err = client.complete(request).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, LlmError::InvalidRequest { .. }));
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(401)
        .with_body(error_body("authentication_error", "invalid x-api-key"))
        .create_async()
        .await;

    let client = ClaudeClient::new("bad-key")
        .unwrap()
        .with_base_url(server.url());
    let err = client
        .message_builder()
        .model("claude-3-7-sonnet-20250219")
        .max_tokens(10)
        .user_message("Hello")
        .send()
        .await
        .unwrap_err();

    match err {
        LlmError::Authentication { message } => assert_eq!(message, "invalid x-api-key"),
        other => panic!("Expected authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_reads_retry_after() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(429)
        .with_header("retry-after", "17")
        .with_body(error_body("rate_limit_error", "Number of requests has exceeded your rate limit"))
        .create_async()
        .await;

    let client = ClaudeClient::new("test-key")
        .unwrap()
        .with_base_url(server.url());
    let err = client
        .message_builder()
        .model("claude-3-7-sonnet-20250219")
        .max_tokens(10)
        .user_message("Hello")
        .send()
        .await
        .unwrap_err();

    match err {
        LlmError::RateLimit { retry_after, .. } => assert_eq!(retry_after, Some(17)),
        other => panic!("Expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_payload_too_large_keeps_server_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(413)
        .with_body(error_body("request_too_large", "prompt is too long"))
        .create_async()
        .await;

    let client = ClaudeClient::new("test-key")
        .unwrap()
        .with_base_url(server.url());
    let err = client
        .message_builder()
        .model("claude-3-7-sonnet-20250219")
        .max_tokens(10)
        .user_message("Hello")
        .send()
        .await
        .unwrap_err();

    match err {
        LlmError::InvalidRequest { message } => assert_eq!(message, "prompt is too long"),
        other => panic!("Expected invalid request error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(502)
        .with_body("upstream connect error")
        .create_async()
        .await;

    let client = ClaudeClient::new("test-key")
        .unwrap()
        .with_base_url(server.url());
    let err = client
        .message_builder()
        .model("claude-3-7-sonnet-20250219")
        .max_tokens(10)
        .user_message("Hello")
        .send()
        .await
        .unwrap_err();

    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream connect error");
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_body("{\"id\": \"msg_test\"")
        .create_async()
        .await;

    let client = ClaudeClient::new("test-key")
        .unwrap()
        .with_base_url(server.url());
    let err = client
        .message_builder()
        .model("claude-3-7-sonnet-20250219")
        .max_tokens(10)
        .user_message("Hello")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Parse { .. }));
}

//! Deterministic `LlmClient` for tests.
//!
//! Responses are queued and handed out in order; every request is recorded.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use geo_llm_sdk::{
    client::LlmClient,
    error::LlmError,
    providers,
    types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage},
};

#[derive(Debug, Default)]
pub struct MockClient {
    results: Mutex<VecDeque<Result<CompletionResponse, LlmError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose only response has the given text and usage
    pub fn replying(text: &str, input_tokens: u32, output_tokens: u32) -> Self {
        let client = Self::new();
        client.push_text(text, input_tokens, output_tokens);
        client
    }

    /// A client whose only response is `error`
    pub fn failing(error: LlmError) -> Self {
        let client = Self::new();
        client.push_error(error);
        client
    }

    pub fn push_text(&self, text: &str, input_tokens: u32, output_tokens: u32) {
        lock(&self.results).push_back(Ok(CompletionResponse {
            content: vec![ContentBlock::Text {
                text: text.to_string(),
            }],
            role: Role::Assistant,
            usage: Usage {
                input_tokens,
                output_tokens,
            },
            stop_reason: Some("end_turn".to_string()),
        }));
    }

    pub fn push_error(&self, error: LlmError) {
        lock(&self.results).push_back(Err(error));
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl LlmClient for MockClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        lock(&self.requests).push(request);
        lock(&self.results)
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::internal("MockClient has no queued response")))
    }

    fn provider_name(&self) -> &str {
        providers::ANTHROPIC
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

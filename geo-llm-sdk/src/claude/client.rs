use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::{
    claude::types::{
        ClaudeContentBlock, ClaudeErrorResponse, ClaudeMessage, ClaudeMessageRequest,
        ClaudeMessageResponse, ClaudeRole,
    },
    error::LlmError,
    types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage},
};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const API_VERSION: &str = "2023-06-01";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Claude (Anthropic) LLM client
pub struct ClaudeClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for ClaudeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaudeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ClaudeClient {
    /// Create a new Claude client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: build_http_client(DEFAULT_TIMEOUT)?,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.http_client = build_http_client(timeout)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a message using the Claude Messages API
    pub async fn create_message(
        &self,
        request: ClaudeMessageRequest,
    ) -> Result<ClaudeMessageResponse, LlmError> {
        let url = format!("{}/v1/messages", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            messages = request.messages.len(),
            "Sending Claude message request"
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            let claude_response: ClaudeMessageResponse = serde_json::from_str(&body)?;
            tracing::debug!(
                id = %claude_response.id,
                input_tokens = claude_response.usage.input_tokens,
                output_tokens = claude_response.usage.output_tokens,
                "Claude message response received"
            );
            return Ok(claude_response);
        }

        // Read retry-after before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok());

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = serde_json::from_str::<ClaudeErrorResponse>(&error_text)
            .map(|e| e.error.message)
            .unwrap_or(error_text);

        tracing::debug!(status = status.as_u16(), %message, "Claude API returned an error");
        Err(error_for_status(status, message, retry_after))
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Network { source: e })
}

fn error_for_status(status: StatusCode, message: String, retry_after: Option<u64>) -> LlmError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::PAYLOAD_TOO_LARGE => {
            LlmError::invalid_request(message)
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::authentication(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::rate_limit(message, retry_after),
        _ => LlmError::api_error(status.as_u16(), message),
    }
}

#[async_trait]
impl crate::client::LlmClient for ClaudeClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let messages = request
            .messages
            .into_iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => ClaudeRole::User,
                    Role::Assistant => ClaudeRole::Assistant,
                    Role::System => {
                        return Err(LlmError::invalid_request(
                            "System messages should be provided via the system parameter",
                        ));
                    }
                };
                let content = msg
                    .content
                    .into_iter()
                    .map(|block| match block {
                        ContentBlock::Text { text } => ClaudeContentBlock::Text { text },
                    })
                    .collect();
                Ok(ClaudeMessage { role, content })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let claude_request = ClaudeMessageRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            messages,
            system: request.system,
            temperature: request.temperature,
            top_p: request.top_p,
            stop_sequences: request.stop_sequences,
        };

        let claude_response = self.create_message(claude_request).await?;

        let content = claude_response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ClaudeContentBlock::Text { text } => Some(ContentBlock::Text { text }),
                ClaudeContentBlock::Other => None,
            })
            .collect();

        Ok(CompletionResponse {
            content,
            role: match claude_response.role {
                ClaudeRole::User => Role::User,
                ClaudeRole::Assistant => Role::Assistant,
            },
            usage: Usage {
                input_tokens: claude_response.usage.input_tokens,
                output_tokens: claude_response.usage.output_tokens,
            },
            stop_reason: claude_response.stop_reason,
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::ANTHROPIC
    }

    fn model_name(&self) -> &str {
        crate::models::claude::SONNET_3_7_ID
    }
}

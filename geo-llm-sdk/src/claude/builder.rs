use crate::{
    claude::{
        client::ClaudeClient,
        types::{ClaudeMessage, ClaudeMessageRequest, ClaudeMessageResponse, ClaudeRole},
    },
    error::LlmError,
};

/// Builder for creating Claude message requests
pub struct MessageBuilder<'a> {
    client: &'a ClaudeClient,
    model: Option<String>,
    max_tokens: Option<u32>,
    messages: Vec<ClaudeMessage>,
    system: Option<String>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    stop_sequences: Option<Vec<String>>,
}

impl<'a> MessageBuilder<'a> {
    /// Create a new message builder
    pub fn new(client: &'a ClaudeClient) -> Self {
        Self {
            client,
            model: None,
            max_tokens: None,
            messages: Vec::new(),
            system: None,
            temperature: None,
            top_p: None,
            stop_sequences: None,
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Add a message to the conversation
    pub fn message(mut self, role: ClaudeRole, content: impl Into<String>) -> Self {
        self.messages.push(ClaudeMessage::text(role, content));
        self
    }

    /// Add a user message
    pub fn user_message(self, content: impl Into<String>) -> Self {
        self.message(ClaudeRole::User, content)
    }

    /// Add an assistant message
    pub fn assistant_message(self, content: impl Into<String>) -> Self {
        self.message(ClaudeRole::Assistant, content)
    }

    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature for randomness
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the top-p sampling parameter
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set custom stop sequences
    pub fn stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(stop_sequences);
        self
    }

    /// Assemble the request without sending it
    pub fn build(self) -> Result<ClaudeMessageRequest, LlmError> {
        Ok(ClaudeMessageRequest {
            model: self
                .model
                .ok_or_else(|| LlmError::invalid_request("Model must be specified"))?,
            max_tokens: self
                .max_tokens
                .ok_or_else(|| LlmError::invalid_request("max_tokens must be specified"))?,
            messages: self.messages,
            system: self.system,
            temperature: self.temperature,
            top_p: self.top_p,
            stop_sequences: self.stop_sequences,
        })
    }

    /// Send the request and get the response
    pub async fn send(self) -> Result<ClaudeMessageResponse, LlmError> {
        let client = self.client;
        let request = self.build()?;
        client.create_message(request).await
    }
}

impl ClaudeClient {
    /// Start building a message request
    pub fn message_builder(&self) -> MessageBuilder<'_> {
        MessageBuilder::new(self)
    }
}

//! # GEO LLM SDK
//!
//! A small LLM client library for the GEO tooling, currently covering the
//! Anthropic Messages API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use geo_llm_sdk::claude::ClaudeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClaudeClient::new("your-api-key")?;
//!     let response = client
//!         .message_builder()
//!         .model("claude-3-7-sonnet-20250219")
//!         .max_tokens(1024)
//!         .user_message("Hello, Claude!")
//!         .send()
//!         .await?;
//!
//!     println!("Response: {}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Provider-agnostic usage
//!
//! ```rust,no_run
//! use geo_llm_sdk::claude::ClaudeClient;
//! use geo_llm_sdk::client::LlmClient;
//! use geo_llm_sdk::types::{CompletionRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client: Box<dyn LlmClient> = Box::new(ClaudeClient::new("your-api-key")?);
//!     let request = CompletionRequest::new(
//!         client.model_name(),
//!         256,
//!         vec![Message::user("Hello!")],
//!     );
//!     let response = client.complete(request).await?;
//!     println!("{:?}", response.text());
//!     Ok(())
//! }
//! ```

pub mod claude;
pub mod client;
pub mod error;
pub mod models;
pub mod pricing;
pub mod providers;
pub mod types;

use geo_llm_sdk::error::LlmError;
use thiserror::Error;

/// Main error type for geo-smoke
#[derive(Error, Debug)]
pub enum SmokeError {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API key in the environment or the configuration
    #[error("Configuration error: ANTHROPIC_API_KEY is not set (export it or set anthropic.api_key in the config file)")]
    MissingApiKey,

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),

    /// Client construction failed
    #[error("Client error: {0}")]
    Llm(#[from] LlmError),

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SmokeError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            SmokeError::Config(_) | SmokeError::MissingApiKey => 2,
            SmokeError::Io(_) => 3,
            SmokeError::Logging(_) | SmokeError::Llm(_) => 1,
        }
    }
}

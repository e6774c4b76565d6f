//! Model constants for supported LLM providers
//!
//! Model IDs are sourced from official provider documentation.

/// Claude model constants
pub mod claude {
    /// Claude 3.7 Sonnet - Hybrid reasoning model
    /// Released: 2025-02-19
    pub const SONNET_3_7_ID: &str = "claude-3-7-sonnet-20250219";
    pub const SONNET_3_7_NAME: &str = "Claude 3.7 Sonnet";

    /// Claude Sonnet 4.5 - Smart model for complex agents and coding
    /// Released: 2025-09-29
    pub const SONNET_4_5_ID: &str = "claude-sonnet-4-5-20250929";
    pub const SONNET_4_5_NAME: &str = "Claude Sonnet 4.5";

    /// Claude 3.5 Sonnet (October 2024)
    pub const SONNET_3_5_ID: &str = "claude-3-5-sonnet-20241022";
    pub const SONNET_3_5_NAME: &str = "Claude 3.5 Sonnet";

    /// Claude 3.5 Sonnet (June 2024)
    pub const SONNET_3_5_JUNE_ID: &str = "claude-3-5-sonnet-20240620";
    pub const SONNET_3_5_JUNE_NAME: &str = "Claude 3.5 Sonnet (June 2024)";

    /// Claude 3.5 Sonnet alias tracking the newest 3.5 snapshot
    pub const SONNET_3_5_LATEST_ID: &str = "claude-3-5-sonnet-latest";
    pub const SONNET_3_5_LATEST_NAME: &str = "Claude 3.5 Sonnet (latest)";

    /// Bare Claude 3.5 Sonnet alias
    pub const SONNET_3_5_ALIAS_ID: &str = "claude-3-5-sonnet";
    pub const SONNET_3_5_ALIAS_NAME: &str = "Claude 3.5 Sonnet (alias)";

    /// Claude 3 Haiku - Fast legacy model
    pub const HAIKU_3_ID: &str = "claude-3-haiku-20240307";
    pub const HAIKU_3_NAME: &str = "Claude 3 Haiku";

    /// Claude 3 Opus - Legacy premium model
    pub const OPUS_3_ID: &str = "claude-3-opus-20240229";
    pub const OPUS_3_NAME: &str = "Claude 3 Opus";

    /// Every Claude model ID above, newest first
    pub const ALL_IDS: &[&str] = &[
        SONNET_4_5_ID,
        SONNET_3_7_ID,
        SONNET_3_5_ID,
        SONNET_3_5_JUNE_ID,
        SONNET_3_5_LATEST_ID,
        SONNET_3_5_ALIAS_ID,
        HAIKU_3_ID,
        OPUS_3_ID,
    ];
}

pub use claude::*;

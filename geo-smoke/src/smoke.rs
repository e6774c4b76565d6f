//! One round trip to the completion endpoint, reported to a writer.
//!
//! The request is fixed: a GEO scoring question in French against Claude 3.7
//! Sonnet. Any client failure is reported and swallowed; the routine itself
//! only fails when the writer does.

use std::io::Write;

use geo_llm_sdk::{
    client::LlmClient,
    error::LlmError,
    models::claude::SONNET_3_7_ID,
    pricing::{CostEstimate, ModelPricing},
    types::{CompletionRequest, CompletionResponse, Message, Usage},
};
use tracing::{info, warn};

pub const MODEL: &str = SONNET_3_7_ID;
pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.3;
pub const SYSTEM_PROMPT: &str = "Vous êtes un expert en GEO.";
pub const USER_PROMPT: &str =
    "Donnez-moi un score GEO de 0-10 pour le site example.com et expliquez en 2 phrases.";

/// $3 per million input tokens, $15 per million output tokens
pub const PRICING: ModelPricing = ModelPricing::from_cents_per_million(300, 1500);

const RULE: &str = "================================================================================";

/// The request every smoke run sends
pub fn smoke_request() -> CompletionRequest {
    CompletionRequest::new(MODEL, MAX_TOKENS, vec![Message::user(USER_PROMPT)])
        .with_system(SYSTEM_PROMPT)
        .with_temperature(TEMPERATURE)
}

#[derive(Debug)]
pub enum SmokeOutcome {
    Succeeded {
        text: String,
        usage: Usage,
        cost: CostEstimate,
    },
    Failed {
        error: LlmError,
    },
}

impl SmokeOutcome {
    fn from_response(response: CompletionResponse) -> Self {
        let cost = PRICING.estimate_usage(&response.usage);
        SmokeOutcome::Succeeded {
            text: response.text().unwrap_or_default().to_string(),
            usage: response.usage,
            cost,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SmokeOutcome::Succeeded { .. })
    }
}

/// Send the smoke request once
pub async fn run(client: &dyn LlmClient) -> SmokeOutcome {
    info!(
        provider = client.provider_name(),
        model = MODEL,
        "Sending smoke request"
    );

    match client.complete(smoke_request()).await {
        Ok(response) => {
            let outcome = SmokeOutcome::from_response(response);
            if let SmokeOutcome::Succeeded { usage, cost, .. } = &outcome {
                info!(
                    input_tokens = usage.input_tokens,
                    output_tokens = usage.output_tokens,
                    cost_usd = cost.usd(),
                    "Smoke request succeeded"
                );
            }
            outcome
        }
        Err(error) => {
            warn!(%error, status = ?error.status(), "Smoke request failed");
            SmokeOutcome::Failed { error }
        }
    }
}

/// Print an outcome in the human-readable report format
pub fn report<W: Write>(outcome: &SmokeOutcome, out: &mut W) -> std::io::Result<()> {
    match outcome {
        SmokeOutcome::Succeeded { text, usage, cost } => {
            writeln!(out)?;
            writeln!(out, "SUCCESS! Response received:")?;
            writeln!(out, "{RULE}")?;
            writeln!(out, "{text}")?;
            writeln!(out, "{RULE}")?;
            writeln!(out)?;
            writeln!(
                out,
                "Tokens used: Input={}, Output={}",
                usage.input_tokens, usage.output_tokens
            )?;
            writeln!(out, "Estimated cost: ~{cost}")?;
        }
        SmokeOutcome::Failed { error } => {
            writeln!(out)?;
            writeln!(out, "ERROR: {error}")?;
        }
    }
    Ok(())
}

/// Run the smoke test and print the outcome
pub async fn run_and_report<W: Write>(
    client: &dyn LlmClient,
    out: &mut W,
) -> std::io::Result<SmokeOutcome> {
    let outcome = run(client).await;
    report(&outcome, out)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClient;
    use geo_llm_sdk::types::Role;

    fn output_of(outcome: &SmokeOutcome) -> String {
        let mut buf = Vec::new();
        report(outcome, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_request_carries_fixed_values() {
        let request = smoke_request();
        assert_eq!(request.model, "claude-3-7-sonnet-20250219");
        assert_eq!(request.max_tokens, 1000);
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.system.as_deref(), Some("Vous êtes un expert en GEO."));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
        assert_eq!(
            request.messages[0],
            Message::user(
                "Donnez-moi un score GEO de 0-10 pour le site example.com et expliquez en 2 phrases."
            )
        );
    }

    #[tokio::test]
    async fn test_success_prints_text_and_cost() {
        let client = MockClient::replying("Score GEO : 7/10.", 100, 50);
        let mut buf = Vec::new();

        let outcome = run_and_report(&client, &mut buf).await.unwrap();

        assert!(outcome.is_success());
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Score GEO : 7/10."));
        assert!(output.contains("Tokens used: Input=100, Output=50"));
        assert!(output.contains("Estimated cost: ~$0.0011"));
    }

    #[tokio::test]
    async fn test_exactly_one_request_with_fixed_values() {
        let client = MockClient::replying("ok", 1, 1);

        run(&client).await;

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], smoke_request());
    }

    #[tokio::test]
    async fn test_failure_prints_error_and_returns_ok() {
        let client = MockClient::failing(LlmError::authentication("invalid x-api-key"));
        let mut buf = Vec::new();

        let outcome = run_and_report(&client, &mut buf).await;

        let outcome = outcome.expect("client failures must not propagate");
        assert!(!outcome.is_success());
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("ERROR: Authentication failed: invalid x-api-key"));
        assert!(!output.contains("Estimated cost"));
        assert_eq!(client.requests().len(), 1);
    }

    #[test]
    fn test_report_with_empty_text() {
        let outcome = SmokeOutcome::from_response(CompletionResponse {
            content: Vec::new(),
            role: Role::Assistant,
            usage: Usage {
                input_tokens: 40,
                output_tokens: 0,
            },
            stop_reason: Some("max_tokens".to_string()),
        });

        assert!(outcome.is_success());
        let output = output_of(&outcome);
        assert!(output.contains(&format!("{RULE}\n\n{RULE}")));
        assert!(output.contains("Estimated cost: ~$0.0001"));
    }

    #[test]
    fn test_report_layout() {
        let outcome = SmokeOutcome::Succeeded {
            text: "Bonjour".to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
            },
            cost: PRICING.estimate(10, 20),
        };
        let expected = format!(
            "\nSUCCESS! Response received:\n{RULE}\nBonjour\n{RULE}\n\nTokens used: Input=10, Output=20\nEstimated cost: ~$0.0003\n"
        );
        assert_eq!(output_of(&outcome), expected);
    }
}

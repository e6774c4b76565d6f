//! Check which Claude models an API key can reach.

use std::io::Write;

use geo_llm_sdk::{
    client::LlmClient,
    error::LlmError,
    models,
    types::{CompletionRequest, Message},
};
use tracing::{debug, info};

pub const PROBE_MAX_TOKENS: u32 = 50;
pub const PROBE_PROMPT: &str = "Respond with 'OK' if you receive this message.";

/// Models probed when none are given on the command line
pub fn default_models() -> Vec<String> {
    models::claude::ALL_IDS
        .iter()
        .map(|id| id.to_string())
        .collect()
}

pub fn probe_request(model: &str) -> CompletionRequest {
    CompletionRequest::new(model, PROBE_MAX_TOKENS, vec![Message::user(PROBE_PROMPT)])
}

#[derive(Debug)]
pub struct ProbeResult {
    pub model: String,
    pub outcome: Result<String, LlmError>,
}

#[derive(Debug, Default)]
pub struct ProbeReport {
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    pub fn working_models(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.outcome.is_ok())
            .map(|r| r.model.as_str())
            .collect()
    }

    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let working = self.working_models();
        writeln!(out)?;
        writeln!(out, "SUMMARY:")?;
        writeln!(out, "Working models: {}", working.len())?;
        for model in &working {
            writeln!(out, "  OK {model}")?;
        }
        if working.is_empty() {
            writeln!(out, "No Claude models are working with this API key!")?;
        }
        Ok(())
    }
}

/// Probe each model in turn, printing progress, then the summary
pub async fn probe_models<W: Write>(
    client: &dyn LlmClient,
    models: &[String],
    out: &mut W,
) -> std::io::Result<ProbeReport> {
    let mut report = ProbeReport::default();

    for model in models {
        writeln!(out)?;
        writeln!(out, "Testing model: {model}")?;
        debug!(%model, "Probing model");

        let outcome = client
            .complete(probe_request(model))
            .await
            .map(|response| response.text().unwrap_or_default().to_string());

        match &outcome {
            Ok(text) => writeln!(out, "SUCCESS: {text}")?,
            Err(error) => writeln!(out, "FAILED: {error}")?,
        }

        report.results.push(ProbeResult {
            model: model.clone(),
            outcome,
        });
    }

    info!(
        probed = report.results.len(),
        working = report.working_models().len(),
        "Model probe finished"
    );
    report.write_summary(out)?;
    Ok(report)
}

//! GEO smoke test: one request to the Anthropic Messages API, reported with
//! token usage and an estimated cost, plus a probe for model availability.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
#[cfg(test)]
mod mock;
pub mod probe;
pub mod smoke;

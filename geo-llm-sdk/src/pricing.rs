//! Token pricing and cost estimation.
//!
//! Amounts are kept in integer nano-dollars so that rounding a cost for
//! display is exact. Float arithmetic would print `(100 * 3 + 50 * 15) / 1e6`
//! as `0.0010` at four places because `0.00105` is not representable.

use serde::{Deserialize, Serialize};

use crate::types::Usage;

const NANO_USD_PER_USD: u64 = 1_000_000_000;

/// Per-token prices for one model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPricing {
    pub input_nano_usd_per_token: u64,
    pub output_nano_usd_per_token: u64,
}

impl ModelPricing {
    /// Build pricing from list prices in US cents per million tokens.
    ///
    /// `$3 / $15` per million is `from_cents_per_million(300, 1500)`.
    pub const fn from_cents_per_million(input: u64, output: u64) -> Self {
        // one cent per million tokens is ten nano-dollars per token
        Self {
            input_nano_usd_per_token: input * 10,
            output_nano_usd_per_token: output * 10,
        }
    }

    pub fn estimate(&self, input_tokens: u32, output_tokens: u32) -> CostEstimate {
        let total_nano_usd = u64::from(input_tokens) * self.input_nano_usd_per_token
            + u64::from(output_tokens) * self.output_nano_usd_per_token;
        CostEstimate {
            input_tokens,
            output_tokens,
            total_nano_usd,
        }
    }

    pub fn estimate_usage(&self, usage: &Usage) -> CostEstimate {
        self.estimate(usage.input_tokens, usage.output_tokens)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_nano_usd: u64,
}

impl CostEstimate {
    /// Total cost in dollars, for logging and comparisons
    pub fn usd(&self) -> f64 {
        self.total_nano_usd as f64 / NANO_USD_PER_USD as f64
    }

    /// Dollar amount rounded half-up to `decimals` places (at most 9), without the `$` sign
    pub fn format_usd(&self, decimals: u32) -> String {
        let decimals = decimals.min(9);
        let unit = 10u64.pow(9 - decimals);
        let rounded = (self.total_nano_usd + unit / 2) / unit;
        if decimals == 0 {
            return rounded.to_string();
        }
        let scale = 10u64.pow(decimals);
        format!(
            "{}.{:0width$}",
            rounded / scale,
            rounded % scale,
            width = decimals as usize
        )
    }
}

impl std::fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.format_usd(4))
    }
}

//! Report structs for SEO analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of a single SEO check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    /// Unit score in [0, 1].
    pub score: f64,
    /// Human-readable suggestions, in the order they were raised.
    pub suggestions: Vec<String>,
}

impl CheckResult {
    /// A passing result with no suggestions.
    pub const fn pass() -> Self {
        Self {
            score: 1.0,
            suggestions: Vec::new(),
        }
    }

    /// A result with the given score and a single suggestion.
    pub fn flagged(score: f64, suggestion: impl Into<String>) -> Self {
        Self {
            score,
            suggestions: vec![suggestion.into()],
        }
    }
}

/// Aggregate SEO report across all checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeoReport {
    /// Mean of the check scores, scaled to 0–100 and rounded.
    pub overall_score: u8,
    /// All suggestions, concatenated in fixed check order.
    pub suggestions: Vec<String>,
}

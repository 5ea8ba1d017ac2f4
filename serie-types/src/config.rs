//! Configuration types shared across the pipeline and the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Knobs for column resolution and series building.
///
/// Defaults reproduce the standard policy: look for a `date` column, try the
/// requested price name followed by the usual close/price spellings, fall back to
/// any label containing `close` or `adj`, and keep business days only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Label (compared case-insensitively) that identifies the date column.
    pub date_label: String,
    /// Price names tried, in order, after the requested name.
    pub price_fallbacks: Vec<String>,
    /// Substrings (lowercase) used by the fuzzy price match.
    pub fuzzy_needles: Vec<String>,
    /// Promote a calendar-like row index to a `Date` column when no date column exists.
    pub promote_index: bool,
    /// Drop rows falling on Saturday or Sunday.
    pub business_days_only: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            date_label: "date".to_string(),
            price_fallbacks: [
                "Adj Close",
                "Close",
                "close",
                "Adj_Close",
                "Price",
                "price",
                "AdjClose",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            fuzzy_needles: vec!["close".to_string(), "adj".to_string()],
            promote_index: true,
            business_days_only: true,
        }
    }
}

/// Global configuration for the `Serie` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerieConfig {
    /// Normalization policy applied after fetching.
    pub normalize: NormalizeOptions,
    /// Timeout for an individual source fetch.
    pub provider_timeout: Duration,
}

impl Default for SerieConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            provider_timeout: Duration::from_secs(10),
        }
    }
}

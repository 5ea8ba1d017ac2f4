use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the serie workspace.
///
/// The first three variants are the normalization failures surfaced to end users;
/// the rest cover argument validation, source collaborators, and forecasters.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SerieError {
    /// The raw frame was absent or had no rows.
    #[error("no data returned for the requested range; try a different ticker or widen the date range")]
    EmptyInput,

    /// No column could be identified as the price column, exactly or fuzzily.
    #[error("no valid price column found for '{requested}'. Available columns: {available:?}")]
    ColumnResolution {
        /// Price column name the caller asked for.
        requested: String,
        /// Normalized labels present in the frame.
        available: Vec<String>,
    },

    /// The frame had rows but none survived date/value coercion.
    #[error("no valid rows after cleaning {input_rows} input rows; check data content and column names")]
    EmptySeries {
        /// Number of rows in the frame before cleaning.
        input_rows: usize,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Malformed input data that could not be read at all (e.g. broken CSV).
    #[error("data issue: {0}")]
    Data(String),

    /// A frame source returned an error.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A frame source exceeded the configured timeout.
    #[error("source timed out: {source_name}")]
    SourceTimeout {
        /// Source name that timed out.
        source_name: String,
    },

    /// Every registered source failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<SerieError>),

    /// `predict` was called on a forecaster that has not been fitted.
    #[error("model not fitted; call fit() first")]
    NotFitted,

    /// A forecaster failed to fit or predict.
    #[error("forecast failed: {0}")]
    Forecast(String),
}

impl SerieError {
    /// Helper: build a `ColumnResolution` error from the requested name and available labels.
    pub fn column_resolution<I, S>(requested: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ColumnResolution {
            requested: requested.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source_name: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source_name: source_name.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Normalization failures and argument errors are actionable; a forecaster used
    /// out of order is a programming error. Aggregates are classified by their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::NotFitted => false,
            Self::AllSourcesFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// The available column labels carried by a `ColumnResolution` error.
    #[must_use]
    pub fn available_columns(&self) -> Option<&[String]> {
        match self {
            Self::ColumnResolution { available, .. } => Some(available),
            _ => None,
        }
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

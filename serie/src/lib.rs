//! Serie fetches raw market data from pluggable sources and prepares it for forecasting.
//!
//! Overview
//! - Tries registered [`FrameSource`]s in order with a per-source timeout; errors,
//!   timeouts and empty frames fall through to the next source.
//! - Normalizes whatever frame shape the winning source returned (multi-level labels,
//!   ticker-suffixed labels, a date index) into a canonical `(ds, y)` series of
//!   business-day observations.
//! - Hands the series to a [`Forecaster`] and predicts over a business-day horizon.
//!
//! The normalization itself lives in `serie_core` and is re-exported here; it is
//! synchronous and never mutates its input, so a fetched frame can be normalized again
//! with a different price column.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use serie::{FetchRequest, Horizon, Serie};
//!
//! let serie = Serie::builder()
//!     .with_source(Arc::new(MySource::new()))
//!     .provider_timeout(std::time::Duration::from_secs(5))
//!     .build()?;
//!
//! let req = FetchRequest::new("TCS.NS", start, end)?;
//! let prepared = serie.prepare(&req, "Close").await?;
//! let forecast = serie.forecast(&mut model, prepared.series(), &Horizon::business_days(30)?)?;
//! ```
//!
//! See `serie/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Fetched, Prepared, Serie, SerieBuilder};

// Re-export core types for convenience
pub use serie_core::{
    BuildReport, CanonicalSeries, ColumnRef, CsvOptions, FetchRequest, Forecast, ForecastPoint,
    Forecaster, FrameSource, Horizon, Label, MatchStrategy, NormalizeOptions, Normalized,
    Observation, PriceMatch, RawFrame, RowIndex, Scalar, SerieConfig, SerieError,
    normalize_for_forecasting, read_csv,
};

#[cfg(feature = "dataframe")]
pub use serie_core::ToDataFrame;

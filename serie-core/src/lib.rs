//! serie-core
//!
//! Turns loosely-shaped market-data frames into the strict `(ds, y)` series a
//! forecasting model trains on.
//!
//! - `resolve`: label flattening/cleanup and date/price column identification.
//! - `build`: lenient type coercion, invalid-row elimination, and the business-day filter.
//! - `pipeline`: the `normalize_for_forecasting` entry point tying both together.
//! - `calendar`: business-day arithmetic and the forecast horizon.
//! - `connector`: traits for the fetch and forecasting collaborators.
//! - `ingest`: CSV to `RawFrame`, including multi-row (hierarchical) headers.
//!
//! Everything in `resolve`, `build`, and `pipeline` is synchronous and free of
//! side effects; the caller's frame is never mutated, so the same raw data can be
//! normalized again with a different requested price column.
#![warn(missing_docs)]

/// Lenient parsing and construction of the canonical series.
pub mod build;
/// Business-day calendar helpers and forecast horizons.
pub mod calendar;
/// Collaborator traits: frame sources and forecasters.
pub mod connector;
/// CSV ingestion into `RawFrame`.
pub mod ingest;
/// The normalization entry point.
pub mod pipeline;
/// Column label normalization and column resolution.
pub mod resolve;
pub mod types;

#[cfg(feature = "dataframe")]
/// Polars conversion for canonical series.
pub mod dataframe;

pub use build::{
    BuildReport, build_series, build_series_with_report, parse_date, parse_date_str, parse_number,
};
pub use calendar::{
    Horizon, future_business_days, future_frame, is_business_day, next_business_day,
};
pub use connector::{FetchRequest, Forecast, ForecastPoint, Forecaster, FrameSource, ensure_trainable};
pub use ingest::{CsvOptions, read_csv};
pub use pipeline::{Normalized, normalize_detailed, normalize_for_forecasting, normalize_with_options};
pub use resolve::{
    ColumnRef, MatchStrategy, PriceMatch, ResolvedFrame, normalize_label, normalize_labels,
    price_strategies, resolve_date_column, resolve_price_column,
};
pub use types::*;

#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;

//! Data transfer types and configuration primitives for the serie workspace.
//!
//! - `Label`, `Scalar`, `RawFrame`: the loosely-shaped tabular input a market-data
//!   source hands over.
//! - `CanonicalSeries`: the strict `(ds, y)` series handed to a forecaster.
//! - `SerieError`: the unified error type.
//! - `NormalizeOptions`, `SerieConfig`: serde-friendly configuration.
#![warn(missing_docs)]

mod config;
mod error;
mod frame;
mod label;
mod scalar;
mod series;

pub use config::{NormalizeOptions, SerieConfig};
pub use error::SerieError;
pub use frame::{RawFrame, RowIndex};
pub use label::Label;
pub use scalar::Scalar;
pub use series::{CanonicalSeries, Observation};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Horizon;
use crate::{CanonicalSeries, RawFrame, SerieError};

/// Parameters for one fetch of raw market data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchRequest {
    ticker: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl FetchRequest {
    /// Build a request for `ticker` over `[start, end)`.
    ///
    /// # Errors
    /// Returns `SerieError::InvalidArg` if the ticker is blank or `start >= end`.
    pub fn new(ticker: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self, SerieError> {
        let ticker = ticker.into().trim().to_string();
        if ticker.is_empty() {
            return Err(SerieError::InvalidArg("ticker must not be empty".into()));
        }
        if start >= end {
            return Err(SerieError::InvalidArg(format!(
                "start date {start} must be before end date {end}"
            )));
        }
        Ok(Self { ticker, start, end })
    }

    /// The instrument symbol, e.g. `TCS.NS`.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// First date of the range (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range (exclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

/// A market-data source producing raw frames.
///
/// Implementations hand back whatever shape the upstream returns (composite labels,
/// ticker-suffixed labels, a date index instead of a date column); normalization is
/// not their concern. Index timestamps must be timezone-naive: localize to the
/// exchange zone, then drop the zone. An empty frame means "no data for the range".
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Stable, human-readable source name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Fetch raw OHLCV-like data for the request.
    async fn fetch(&self, req: &FetchRequest) -> Result<RawFrame, SerieError>;
}

/// One predicted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Prediction date.
    pub ds: NaiveDate,
    /// Point estimate.
    pub yhat: f64,
    /// Lower bound of the uncertainty interval.
    pub yhat_lower: f64,
    /// Upper bound of the uncertainty interval.
    pub yhat_upper: f64,
}

/// Output of a forecaster over the history plus the horizon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    /// Points in date order.
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    /// The last `n` points (all of them if fewer).
    #[must_use]
    pub fn tail(&self, n: usize) -> &[ForecastPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Points dated strictly after `date`.
    pub fn after(&self, date: NaiveDate) -> impl Iterator<Item = &ForecastPoint> + '_ {
        self.points.iter().filter(move |p| p.ds > date)
    }
}

/// A forecasting model trained on a canonical series.
///
/// The model itself lives outside this workspace; this trait fixes the boundary.
pub trait Forecaster: Send {
    /// Train on the series.
    ///
    /// # Errors
    /// Implementations return `SerieError::EmptySeries` for an empty series and
    /// `SerieError::Forecast` for model failures.
    fn fit(&mut self, series: &CanonicalSeries) -> Result<(), SerieError>;

    /// Predict over the history dates plus `horizon` upcoming business days.
    ///
    /// # Errors
    /// Returns `SerieError::NotFitted` if called before a successful `fit`.
    fn predict(&self, horizon: &Horizon) -> Result<Forecast, SerieError>;
}

/// Reject series a forecaster cannot train on.
///
/// # Errors
/// Returns `SerieError::EmptySeries` if the series has no rows.
pub fn ensure_trainable(series: &CanonicalSeries) -> Result<(), SerieError> {
    if series.is_empty() {
        return Err(SerieError::EmptySeries { input_rows: 0 });
    }
    Ok(())
}

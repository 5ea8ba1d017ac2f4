use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serie_core::{FetchRequest, FrameSource, RawFrame, RowIndex, SerieError, parse_date};

mod dynamic;
mod fixtures;
mod forecaster;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use forecaster::NaiveForecaster;

/// Mock frame source for CI-safe examples. Provides deterministic frames from static fixtures.
///
/// Frames come back in the shapes real downloads have: `TCS.NS` and `INFY.NS` use
/// `(field, ticker)` labels over a calendar index, `WIPRO.NS` has a text `Date`
/// column and ticker-suffixed labels. `NOPRICE` has no price-like column and `BLANK`
/// has no numeric prices. `FAIL` errors and `TIMEOUT` answers slowly. Any other
/// ticker yields an empty frame.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Latency of the `TIMEOUT` ticker.
    pub const SLOW_FETCH: Duration = Duration::from_millis(200);

    /// Create the fixture source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_stall(ticker: &str) -> Result<(), SerieError> {
        match ticker {
            "FAIL" => Err(SerieError::source("serie-mock", "forced failure: fetch")),
            "TIMEOUT" => {
                tokio::time::sleep(Self::SLOW_FETCH).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl FrameSource for MockSource {
    fn name(&self) -> &'static str {
        "serie-mock"
    }

    async fn fetch(&self, req: &FetchRequest) -> Result<RawFrame, SerieError> {
        let t = req.ticker();
        Self::maybe_fail_or_stall(t).await?;
        let frame = fixtures::history::by_symbol(t)
            .or_else(|| fixtures::ticker_columns::by_symbol(t))
            .unwrap_or_else(RawFrame::empty);
        within_range(frame, req.start(), req.end())
    }
}

/// Keep the rows whose date falls in `[start, end)`.
///
/// The date comes from the calendar index when present, otherwise from the first
/// column; rows without a readable date are kept.
fn within_range(frame: RawFrame, start: NaiveDate, end: NaiveDate) -> Result<RawFrame, SerieError> {
    let in_range = |d: Option<NaiveDate>| d.is_none_or(|d| d >= start && d < end);
    let keep: Vec<bool> = match frame.index() {
        RowIndex::Dates(dates) => dates.iter().map(|ts| in_range(Some(ts.date()))).collect(),
        _ => frame.column(0).map(|c| in_range(parse_date(c))).collect(),
    };

    let (labels, rows, index) = frame.into_parts();
    let index = match index {
        RowIndex::Dates(v) => RowIndex::Dates(retain(v, &keep)),
        RowIndex::Labels(v) => RowIndex::Labels(retain(v, &keep)),
        RowIndex::Positional => RowIndex::Positional,
    };
    RawFrame::new(labels, retain(rows, &keep))?.with_index(index)
}

fn retain<T>(items: Vec<T>, keep: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, k)| k.then_some(item))
        .collect()
}

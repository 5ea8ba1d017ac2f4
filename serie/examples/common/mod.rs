#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use serie::{FetchRequest, FrameSource};

/// The deterministic fixture source; swap in a network-backed `FrameSource` for live data.
#[must_use]
pub fn get_source() -> Arc<dyn FrameSource> {
    Arc::new(serie_mock::MockSource::new())
}

/// `TICKER [START [END]]` from the command line, defaulting to `TCS.NS` over January 2024.
pub fn request_from_args() -> Result<FetchRequest, Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let ticker = args.next().unwrap_or_else(|| "TCS.NS".to_string());
    let start = match args.next() {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")?,
        None => NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad default start")?,
    };
    let end = match args.next() {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")?,
        None => NaiveDate::from_ymd_opt(2024, 2, 1).ok_or("bad default end")?,
    };
    Ok(FetchRequest::new(ticker, start, end)?)
}

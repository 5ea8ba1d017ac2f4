#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_source;

pub use mock_source::MockSource;

use chrono::NaiveDate;
use serie::{FetchRequest, Label, RawFrame, Scalar};

pub const TCS: &str = "TCS.NS";

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("invalid date")
}

pub fn req(ticker: &str) -> FetchRequest {
    FetchRequest::new(ticker, d(2024, 1, 1), d(2024, 2, 1)).unwrap()
}

/// A flat `Date` / `Close <ticker>` / `Open <ticker>` frame.
pub fn flat_frame(ticker: &str, rows: &[(&str, f64, f64)]) -> RawFrame {
    RawFrame::new(
        vec![
            Label::simple("Date"),
            Label::simple(format!("Close {ticker}")),
            Label::simple(format!("Open {ticker}")),
        ],
        rows.iter()
            .map(|(ds, c, o)| vec![Scalar::text(*ds), Scalar::Float(*c), Scalar::Float(*o)])
            .collect(),
    )
    .unwrap()
}

//! Multi-level download shape: `(field, ticker)` column labels and a calendar
//! index built from upstream UTC bar timestamps.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Asia::Kolkata;
use serie_core::{Label, RawFrame, RowIndex, Scalar};

const FIELDS: [&str; 6] = ["Adj Close", "Close", "High", "Low", "Open", "Volume"];

type Bar = (&'static str, f64, f64, f64, f64, f64, Option<i64>);

// Upstream daily bars for NSE are stamped at local midnight, i.e. 18:30 UTC the
// previous evening.
const TCS_BARS: &[Bar] = &[
    ("2024-01-01T18:30:00Z", 3701.2, 3745.0, 3760.0, 3712.0, 3730.0, Some(1_410_000)),
    ("2024-01-02T18:30:00Z", 3655.4, 3698.5, 3741.0, 3690.1, 3735.0, Some(1_820_000)),
    ("2024-01-03T18:30:00Z", 3686.9, 3730.4, 3745.9, 3690.0, 3701.0, Some(1_390_000)),
    ("2024-01-04T18:30:00Z", 3697.7, 3741.3, 3758.0, 3712.5, 3730.4, Some(1_605_000)),
    // Special Saturday session.
    ("2024-01-05T18:30:00Z", 3701.0, 3744.6, 3750.0, 3735.0, 3741.3, Some(210_000)),
    ("2024-01-07T18:30:00Z", f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN, None),
    ("2024-01-08T18:30:00Z", 3664.8, 3708.0, 3752.0, 3700.2, 3744.6, Some(1_930_000)),
    ("2024-01-09T18:30:00Z", 3634.3, 3677.1, 3716.7, 3670.0, 3708.0, Some(2_040_000)),
    ("2024-01-10T18:30:00Z", 3672.5, 3715.8, 3722.0, 3660.3, 3677.1, Some(1_760_000)),
    ("2024-01-11T18:30:00Z", 3830.1, 3874.6, 3889.0, 3780.0, 3800.0, Some(4_880_000)),
];

const INFY_BARS: &[Bar] = &[
    ("2024-01-01T18:30:00Z", 1597.1, 1620.9, 1631.0, 1611.0, 1615.0, Some(3_200_000)),
    ("2024-01-02T18:30:00Z", 1573.6, 1597.0, 1625.0, 1591.6, 1620.0, Some(4_100_000)),
    ("2024-01-03T18:30:00Z", 1583.2, 1606.8, 1612.0, 1590.0, 1597.0, Some(3_300_000)),
    ("2024-01-04T18:30:00Z", 1592.9, 1616.6, 1623.0, 1601.2, 1606.8, Some(3_500_000)),
    ("2024-01-07T18:30:00Z", 1596.3, 1620.0, 1629.0, 1610.0, 1616.6, Some(3_900_000)),
];

pub fn by_symbol(s: &str) -> Option<RawFrame> {
    match s {
        "TCS.NS" | "TIMEOUT" => Some(build(s, TCS_BARS)),
        "INFY.NS" => Some(build(s, INFY_BARS)),
        _ => None,
    }
}

fn local_bar_time(utc: &str) -> NaiveDateTime {
    DateTime::parse_from_rfc3339(utc)
        .unwrap()
        .with_timezone(&Kolkata)
        .naive_local()
}

fn price(v: f64) -> Scalar {
    if v.is_nan() { Scalar::Null } else { Scalar::Float(v) }
}

fn build(ticker: &str, bars: &[Bar]) -> RawFrame {
    let labels = FIELDS
        .iter()
        .map(|field| Label::composite([*field, ticker]))
        .collect();
    let mut index = Vec::with_capacity(bars.len());
    let mut rows = Vec::with_capacity(bars.len());
    for &(ts, adj, close, high, low, open, volume) in bars {
        index.push(local_bar_time(ts));
        rows.push(vec![
            price(adj),
            price(close),
            price(high),
            price(low),
            price(open),
            volume.into(),
        ]);
    }
    RawFrame::new(labels, rows)
        .and_then(|f| f.with_index(RowIndex::Dates(index)))
        .unwrap()
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;

use crate::calendar::is_business_day;
use crate::resolve::ResolvedFrame;
use crate::{CanonicalSeries, NormalizeOptions, Observation, Scalar, SerieError};

// Datetime layouts with an explicit offset; the local calendar date is kept.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

// Month-first for slashed dates, as general-purpose parsers default to. Dotted
// dates are day-first unless the year leads.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
];

/// Parse a date out of free-form text.
///
/// Accepts ISO-8601/RFC 3339 (with or without time and offset), slashed and compact
/// numeric dates, and dates with month names. Returns `None` for anything else.
#[must_use]
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.naive_local().date());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(s, fmt) {
            return Some(ts.naive_local().date());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Leniently read a cell as a calendar date.
///
/// Timestamps keep their date; text goes through [`parse_date_str`]; numbers are
/// parsed from their string form (so `20240105` reads as 2024-01-05). Missing and
/// boolean cells, and anything unparseable, yield `None`.
#[must_use]
pub fn parse_date(cell: &Scalar) -> Option<NaiveDate> {
    match cell {
        Scalar::Null | Scalar::Bool(_) => None,
        Scalar::DateTime(ts) => Some(ts.date()),
        Scalar::Text(s) => parse_date_str(s),
        Scalar::Int(i) => parse_date_str(&i.to_string()),
        Scalar::Float(x) if x.is_finite() => parse_date_str(&x.to_string()),
        Scalar::Float(_) => None,
        Scalar::Decimal(d) => parse_date_str(&d.normalize().to_string()),
    }
}

/// Leniently read a cell as a finite number.
///
/// Integers, floats, decimals and booleans (`1`/`0`) convert directly; text is
/// trimmed and parsed as a float literal. Timestamps, missing cells, unparseable
/// text, and non-finite results yield `None`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parse_number(cell: &Scalar) -> Option<f64> {
    let v = match cell {
        Scalar::Null | Scalar::DateTime(_) => None,
        Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Scalar::Int(i) => Some(*i as f64),
        Scalar::Float(x) => Some(*x),
        Scalar::Decimal(d) => d.to_f64(),
        Scalar::Text(s) => s.trim().parse::<f64>().ok(),
    };
    v.filter(|x| x.is_finite())
}

/// Row accounting for one `build_series` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildReport {
    /// Rows in the resolved frame.
    pub input_rows: usize,
    /// Rows dropped because the date or the value was missing/unparseable.
    pub unparseable_rows: usize,
    /// Rows dropped by the business-day filter.
    pub weekend_rows: usize,
    /// Rows in the resulting series.
    pub output_rows: usize,
}

/// Build the canonical series from a resolved frame.
///
/// # Errors
/// Returns `SerieError::EmptySeries` if no row has both a parseable date and a
/// finite value.
pub fn build_series(
    frame: &ResolvedFrame,
    date_col: usize,
    price_col: usize,
    opts: &NormalizeOptions,
) -> Result<CanonicalSeries, SerieError> {
    build_series_with_report(frame, date_col, price_col, opts).map(|(s, _)| s)
}

/// [`build_series`] plus a [`BuildReport`] describing what was dropped.
///
/// Steps, in order: coerce dates and values, drop rows missing either, fail if
/// nothing is left, then drop weekend rows (when `opts.business_days_only`). Rows
/// keep their frame order and duplicate dates are not merged. A frame whose valid
/// rows all fall on weekends therefore yields an empty series rather than an error.
///
/// # Errors
/// Returns `SerieError::EmptySeries` if no row survives coercion.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "serie_core::build::build_series",
        skip(frame, opts),
        fields(rows = frame.height()),
    )
)]
pub fn build_series_with_report(
    frame: &ResolvedFrame,
    date_col: usize,
    price_col: usize,
    opts: &NormalizeOptions,
) -> Result<(CanonicalSeries, BuildReport), SerieError> {
    let input_rows = frame.height();
    let parsed: Vec<Observation> = (0..input_rows)
        .filter_map(|r| {
            let ds = parse_date(frame.get(r, date_col))?;
            let y = parse_number(frame.get(r, price_col))?;
            Some(Observation::new(ds, y))
        })
        .collect();

    let unparseable_rows = input_rows - parsed.len();
    if parsed.is_empty() {
        return Err(SerieError::EmptySeries { input_rows });
    }

    let valid = parsed.len();
    let rows: Vec<Observation> = if opts.business_days_only {
        parsed.into_iter().filter(|o| is_business_day(o.ds)).collect()
    } else {
        parsed
    };

    let report = BuildReport {
        input_rows,
        unparseable_rows,
        weekend_rows: valid - rows.len(),
        output_rows: rows.len(),
    };

    #[cfg(feature = "tracing")]
    {
        if report.unparseable_rows > 0 || report.weekend_rows > 0 {
            tracing::debug!(
                target: "serie_core::build",
                unparseable = report.unparseable_rows,
                weekend = report.weekend_rows,
                kept = report.output_rows,
                "dropped rows while building series"
            );
        }
        if report.output_rows == 0 {
            tracing::warn!(target: "serie_core::build", "every valid row fell on a weekend");
        }
    }

    Ok((CanonicalSeries::from_rows(rows), report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn offset_timestamps_keep_local_date() {
        assert_eq!(
            parse_date_str("2024-01-05T00:00:00+05:30"),
            Some(d(2024, 1, 5))
        );
        assert_eq!(
            parse_date_str("2024-01-05 23:30:00-05:00"),
            Some(d(2024, 1, 5))
        );
    }

    #[test]
    fn month_name_layouts() {
        assert_eq!(parse_date_str("05-Jan-2024"), Some(d(2024, 1, 5)));
        assert_eq!(parse_date_str("Jan 5, 2024"), Some(d(2024, 1, 5)));
        assert_eq!(parse_date_str("5 January 2024"), Some(d(2024, 1, 5)));
    }

    #[test]
    fn slashed_dates_are_month_first() {
        assert_eq!(parse_date_str("01/05/2024"), Some(d(2024, 1, 5)));
        assert_eq!(parse_date_str("2024/01/05"), Some(d(2024, 1, 5)));
    }

    #[test]
    fn dotted_dates() {
        assert_eq!(parse_date_str("2024.01.05"), Some(d(2024, 1, 5)));
        assert_eq!(parse_date_str("05.01.2024"), Some(d(2024, 1, 5)));
        assert_eq!(parse_date_str("101.25"), None);
    }

    #[test]
    fn garbage_is_missing() {
        assert_eq!(parse_date_str("bad"), None);
        assert_eq!(parse_date_str("   "), None);
        assert_eq!(parse_date_str("2024-02-30"), None);
    }
}

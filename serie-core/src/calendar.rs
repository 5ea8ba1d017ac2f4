use chrono::{Datelike, NaiveDate};

use crate::{CanonicalSeries, SerieError};

/// Monday through Friday.
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}

/// First business day strictly after `date`, or `None` past the end of the calendar.
#[must_use]
pub fn next_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let mut d = date.succ_opt()?;
    while !is_business_day(d) {
        d = d.succ_opt()?;
    }
    Some(d)
}

/// The `periods` business days following `last`, in order.
#[must_use]
pub fn future_business_days(last: NaiveDate, periods: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(periods);
    let mut cur = last;
    while out.len() < periods {
        let Some(next) = next_business_day(cur) else {
            break;
        };
        out.push(next);
        cur = next;
    }
    out
}

/// Forecast horizon expressed as a count of upcoming business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Horizon {
    periods: usize,
}

impl Horizon {
    /// Largest accepted horizon.
    pub const MAX_PERIODS: usize = 365;

    /// A horizon of `periods` business days.
    ///
    /// # Errors
    /// Returns `SerieError::InvalidArg` unless `1 <= periods <= 365`.
    pub fn business_days(periods: usize) -> Result<Self, SerieError> {
        if periods == 0 || periods > Self::MAX_PERIODS {
            return Err(SerieError::InvalidArg(format!(
                "forecast horizon must be between 1 and {} business days, got {periods}",
                Self::MAX_PERIODS
            )));
        }
        Ok(Self { periods })
    }

    /// Number of business days ahead.
    #[must_use]
    pub const fn periods(self) -> usize {
        self.periods
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self { periods: 30 }
    }
}

/// Dates a forecaster predicts over: the distinct history dates in ascending order,
/// followed by `horizon` business days after the last of them.
///
/// # Errors
/// Returns `SerieError::EmptySeries` if the history is empty, since there is no
/// anchor date for the horizon.
pub fn future_frame(history: &CanonicalSeries, horizon: &Horizon) -> Result<Vec<NaiveDate>, SerieError> {
    let mut dates = history.dates();
    dates.sort_unstable();
    dates.dedup();
    let Some(&last) = dates.last() else {
        return Err(SerieError::EmptySeries { input_rows: 0 });
    };
    dates.extend(future_business_days(last, horizon.periods()));
    Ok(dates)
}

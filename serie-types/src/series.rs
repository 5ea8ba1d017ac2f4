use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Label, RawFrame, Scalar};

/// One row of a canonical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation.
    pub ds: NaiveDate,
    /// Finite numeric value.
    pub y: f64,
}

impl Observation {
    /// Build an observation.
    #[must_use]
    pub const fn new(ds: NaiveDate, y: f64) -> Self {
        Self { ds, y }
    }
}

/// The normalized `(ds, y)` series handed to a forecaster.
///
/// Every value is finite and no date falls on a weekend when produced by the
/// series builder. Rows keep their source order and duplicate dates are not merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalSeries {
    rows: Vec<Observation>,
}

impl CanonicalSeries {
    /// Wrap already-validated observations.
    #[must_use]
    pub const fn from_rows(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    /// Observations in order.
    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Iterate observations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First observation.
    #[must_use]
    pub fn first(&self) -> Option<&Observation> {
        self.rows.first()
    }

    /// Last observation.
    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.rows.last()
    }

    /// The `ds` column.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|o| o.ds).collect()
    }

    /// The `y` column.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|o| o.y).collect()
    }

    /// Re-express the series as a two-column raw frame labeled `ds` and `y`.
    #[must_use]
    pub fn to_raw_frame(&self) -> RawFrame {
        let rows = self
            .rows
            .iter()
            .map(|o| {
                vec![
                    Scalar::Text(o.ds.format("%Y-%m-%d").to_string()),
                    Scalar::Float(o.y),
                ]
            })
            .collect();
        RawFrame::new(vec![Label::simple("ds"), Label::simple("y")], rows)
            .unwrap_or_else(|_| RawFrame::empty())
    }
}

impl<'a> IntoIterator for &'a CanonicalSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for CanonicalSeries {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

use chrono::NaiveDateTime;

use crate::{Label, Scalar, SerieError};

/// Row index carried alongside a frame's columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RowIndex {
    /// Plain `0..n` positions with no meaning of their own.
    #[default]
    Positional,
    /// Timezone-naive timestamps; the date dimension is carried out of band.
    Dates(Vec<NaiveDateTime>),
    /// Any other labeled index.
    Labels(Vec<Scalar>),
}

impl RowIndex {
    /// Returns true if the index is a calendar-like sequence eligible for promotion.
    #[must_use]
    pub const fn is_calendar(&self) -> bool {
        matches!(self, Self::Dates(_))
    }

    fn len(&self) -> Option<usize> {
        match self {
            Self::Positional => None,
            Self::Dates(v) => Some(v.len()),
            Self::Labels(v) => Some(v.len()),
        }
    }
}

/// Tabular input as handed over by a market-data source.
///
/// Rows are stored positionally against `labels`; row order is the source order
/// and is never re-sorted by anything in this workspace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFrame {
    labels: Vec<Label>,
    rows: Vec<Vec<Scalar>>,
    index: RowIndex,
}

impl RawFrame {
    /// Build a frame from labels and rows.
    ///
    /// # Errors
    /// Returns `SerieError::InvalidArg` if any row width differs from the label count.
    pub fn new(labels: Vec<Label>, rows: Vec<Vec<Scalar>>) -> Result<Self, SerieError> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != labels.len())
        {
            return Err(SerieError::InvalidArg(format!(
                "row {i} has {} cells but the frame has {} columns",
                row.len(),
                labels.len()
            )));
        }
        Ok(Self {
            labels,
            rows,
            index: RowIndex::Positional,
        })
    }

    /// An empty frame with no columns and no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach a row index.
    ///
    /// # Errors
    /// Returns `SerieError::InvalidArg` if the index length differs from the row count.
    pub fn with_index(mut self, index: RowIndex) -> Result<Self, SerieError> {
        if let Some(n) = index.len()
            && n != self.rows.len()
        {
            return Err(SerieError::InvalidArg(format!(
                "index has {n} entries but the frame has {} rows",
                self.rows.len()
            )));
        }
        self.index = index;
        Ok(self)
    }

    /// Column labels in source order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    /// The row index.
    #[must_use]
    pub const fn index(&self) -> &RowIndex {
        &self.index
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` for the column at position `col`; out-of-range reads are missing.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &Scalar {
        static NULL: Scalar = Scalar::Null;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&NULL)
    }

    /// Cells of the column at position `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Scalar> + '_ {
        (0..self.rows.len()).map(move |r| self.get(r, col))
    }

    /// Decompose into labels, rows and index.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Label>, Vec<Vec<Scalar>>, RowIndex) {
        (self.labels, self.rows, self.index)
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::{NormalizeOptions, RawFrame, RowIndex, Scalar, SerieError};

/// Label given to a promoted calendar index.
pub const PROMOTED_DATE_LABEL: &str = "Date";

#[allow(clippy::expect_used)] // Literal pattern; compilation cannot fail
fn suffix_regex() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    SUFFIX.get_or_init(|| {
        Regex::new(r"\s+[A-Za-z0-9.\-]+\n?\z").expect("suffix regex is valid")
    })
}

/// Normalize one flattened label.
///
/// Removes a single trailing whitespace-separated token made of letters, digits,
/// `.` or `-` (an instrument suffix such as `" TCS.NS"`), then trims. Only the last
/// token is considered, so `"Close TCS.NS"` becomes `"Close"` and `"Adj Close"`
/// becomes `"Adj"`. A label with trailing whitespace keeps its last token.
#[must_use]
pub fn normalize_label(flat: &str) -> String {
    suffix_regex().replace(flat, "").trim().to_string()
}

/// Flatten and normalize a sequence of labels, preserving order and count.
#[must_use]
pub fn normalize_labels(labels: &[crate::Label]) -> Vec<String> {
    labels
        .iter()
        .map(|l| normalize_label(&l.flatten()))
        .collect()
}

/// Position and normalized label of a resolved column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Zero-based position in the resolved frame.
    pub position: usize,
    /// Normalized label at that position.
    pub label: String,
}

/// A frame after label normalization (and optional index promotion), prior to
/// type coercion. Owns its data; the source `RawFrame` is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFrame {
    labels: Vec<String>,
    rows: Vec<Vec<Scalar>>,
    index: RowIndex,
}

impl ResolvedFrame {
    /// Copy a raw frame and normalize its labels.
    #[must_use]
    pub fn from_raw(raw: &RawFrame) -> Self {
        Self {
            labels: normalize_labels(raw.labels()),
            rows: raw.rows().to_vec(),
            index: raw.index().clone(),
        }
    }

    /// Normalized labels in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    /// Row index still attached to the frame (`Positional` after promotion).
    #[must_use]
    pub const fn index(&self) -> &RowIndex {
        &self.index
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `row` for column `col`; out-of-range reads are missing.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &Scalar {
        static NULL: Scalar = Scalar::Null;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&NULL)
    }

    fn find_label(&self, wanted: &str) -> Option<ColumnRef> {
        let wanted = wanted.to_lowercase();
        self.labels
            .iter()
            .position(|l| l.to_lowercase() == wanted)
            .map(|position| self.column_ref(position))
    }

    fn column_ref(&self, position: usize) -> ColumnRef {
        ColumnRef {
            position,
            label: self.labels[position].clone(),
        }
    }

    /// Move a calendar-like index into a leading `Date` column.
    ///
    /// Returns false (and leaves the frame alone) if the index is not calendar-like.
    pub fn promote_index(&mut self) -> bool {
        if !self.index.is_calendar() {
            return false;
        }
        let RowIndex::Dates(dates) = std::mem::take(&mut self.index) else {
            return false;
        };
        for (row, ts) in self.rows.iter_mut().zip(dates) {
            row.insert(0, Scalar::DateTime(ts));
        }
        self.labels.insert(0, PROMOTED_DATE_LABEL.to_string());
        true
    }

    /// Identify the date column.
    ///
    /// Looks for a label equal (case-insensitively) to `opts.date_label`. If none is
    /// present and the row index is calendar-like, the index is promoted to a `Date`
    /// column first. Otherwise the first column is used as a best effort; a wrong
    /// guess surfaces later as rows that fail to parse.
    ///
    /// Returns `None` only when the frame has no columns at all.
    pub fn resolve_date_column(&mut self, opts: &NormalizeOptions) -> Option<ColumnRef> {
        if let Some(found) = self.find_label(&opts.date_label) {
            return Some(found);
        }
        if opts.promote_index && self.promote_index() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "serie_core::resolve", "promoted calendar index to a Date column");
            if let Some(found) = self.find_label(&opts.date_label) {
                return Some(found);
            }
        }
        if self.labels.is_empty() {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "serie_core::resolve",
            column = %self.labels[0],
            "no date column; falling back to the first column"
        );
        Some(self.column_ref(0))
    }
}

/// Free-function form of [`ResolvedFrame::resolve_date_column`].
pub fn resolve_date_column(frame: &mut ResolvedFrame, opts: &NormalizeOptions) -> Option<ColumnRef> {
    frame.resolve_date_column(opts)
}

/// One step of the price column search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Case-insensitive equality with a candidate name.
    Exact(String),
    /// Case-insensitive containment of any of the given substrings.
    Contains(Vec<String>),
}

impl MatchStrategy {
    /// First label (lowercased) satisfied by this strategy.
    fn find(&self, lowered: &[String]) -> Option<usize> {
        match self {
            Self::Exact(name) => {
                let name = name.to_lowercase();
                lowered.iter().position(|l| *l == name)
            }
            Self::Contains(needles) => lowered
                .iter()
                .position(|l| needles.iter().any(|n| l.contains(n.as_str()))),
        }
    }
}

/// Ordered search plan for a requested price column.
///
/// The requested name always comes first, followed by the configured fallbacks,
/// then a single fuzzy containment step.
#[must_use]
pub fn price_strategies(requested: &str, opts: &NormalizeOptions) -> Vec<MatchStrategy> {
    let mut plan = Vec::with_capacity(opts.price_fallbacks.len() + 2);
    plan.push(MatchStrategy::Exact(requested.to_string()));
    plan.extend(opts.price_fallbacks.iter().cloned().map(MatchStrategy::Exact));
    plan.push(MatchStrategy::Contains(
        opts.fuzzy_needles.iter().map(|n| n.to_lowercase()).collect(),
    ));
    plan
}

/// Outcome of a successful price column resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceMatch {
    /// The chosen column.
    pub column: ColumnRef,
    /// The strategy that matched.
    pub strategy: MatchStrategy,
    /// Zero-based rank of that strategy in the plan (0 = requested name).
    pub rank: usize,
}

impl PriceMatch {
    /// True if the match came from the fuzzy containment step.
    #[must_use]
    pub const fn is_fuzzy(&self) -> bool {
        matches!(self.strategy, MatchStrategy::Contains(_))
    }
}

/// Identify the price column for `requested`.
///
/// Evaluates [`price_strategies`] in order and stops at the first strategy that
/// matches any column; within a strategy, the leftmost matching column wins.
///
/// # Errors
/// Returns `SerieError::ColumnResolution` listing every normalized label when no
/// strategy matches.
pub fn resolve_price_column(
    frame: &ResolvedFrame,
    requested: &str,
    opts: &NormalizeOptions,
) -> Result<PriceMatch, SerieError> {
    let lowered: Vec<String> = frame.labels.iter().map(|l| l.to_lowercase()).collect();
    for (rank, strategy) in price_strategies(requested, opts).into_iter().enumerate() {
        if let Some(position) = strategy.find(&lowered) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "serie_core::resolve",
                requested,
                column = %frame.labels[position],
                rank,
                fuzzy = matches!(strategy, MatchStrategy::Contains(_)),
                "resolved price column"
            );
            return Ok(PriceMatch {
                column: frame.column_ref(position),
                strategy,
                rank,
            });
        }
    }
    Err(SerieError::column_resolution(
        requested,
        frame.labels.iter().cloned(),
    ))
}

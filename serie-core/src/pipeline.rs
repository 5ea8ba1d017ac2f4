use crate::build::{BuildReport, build_series_with_report};
use crate::resolve::{ColumnRef, PriceMatch, ResolvedFrame, resolve_price_column};
use crate::{CanonicalSeries, NormalizeOptions, RawFrame, SerieError};

/// Full result of a normalization run: the series plus how it was derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// The canonical series.
    pub series: CanonicalSeries,
    /// Column used for dates.
    pub date_column: ColumnRef,
    /// Column used for values and the strategy that picked it.
    pub price_column: PriceMatch,
    /// Row accounting.
    pub report: BuildReport,
}

/// Normalize a raw frame into a canonical series with the default policy.
///
/// Accepts either `&RawFrame` or `None` (an absent frame).
///
/// # Errors
/// - `SerieError::EmptyInput` if the frame is absent or has no rows.
/// - `SerieError::ColumnResolution` if no price column can be identified.
/// - `SerieError::EmptySeries` if no row survives coercion.
///
/// ```
/// use serie_core::{Label, RawFrame, Scalar, normalize_for_forecasting};
///
/// let frame = RawFrame::new(
///     vec![Label::simple("Date"), Label::from(("Close", "TCS.NS"))],
///     vec![
///         vec![Scalar::text("2024-01-05"), Scalar::Float(100.0)],
///         vec![Scalar::text("2024-01-06"), Scalar::Float(101.0)],
///     ],
/// )?;
/// let series = normalize_for_forecasting(&frame, "Close")?;
/// assert_eq!(series.len(), 1);
/// # Ok::<(), serie_core::SerieError>(())
/// ```
pub fn normalize_for_forecasting<'a>(
    raw: impl Into<Option<&'a RawFrame>>,
    requested_price: &str,
) -> Result<CanonicalSeries, SerieError> {
    normalize_with_options(raw, requested_price, &NormalizeOptions::default())
}

/// [`normalize_for_forecasting`] with an explicit policy.
///
/// # Errors
/// Same as [`normalize_for_forecasting`].
pub fn normalize_with_options<'a>(
    raw: impl Into<Option<&'a RawFrame>>,
    requested_price: &str,
    opts: &NormalizeOptions,
) -> Result<CanonicalSeries, SerieError> {
    normalize_detailed(raw, requested_price, opts).map(|n| n.series)
}

/// [`normalize_with_options`] returning the chosen columns and row accounting too.
///
/// # Errors
/// Same as [`normalize_for_forecasting`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "serie_core::pipeline::normalize",
        skip(raw, opts),
    )
)]
pub fn normalize_detailed<'a>(
    raw: impl Into<Option<&'a RawFrame>>,
    requested_price: &str,
    opts: &NormalizeOptions,
) -> Result<Normalized, SerieError> {
    let raw = match raw.into() {
        Some(frame) if !frame.is_empty() => frame,
        _ => return Err(SerieError::EmptyInput),
    };

    let mut frame = ResolvedFrame::from_raw(raw);
    let date_column = frame.resolve_date_column(opts);
    let price_column = resolve_price_column(&frame, requested_price, opts)?;
    // A frame without columns cannot have matched a price column above.
    let date_column = date_column.ok_or_else(|| {
        SerieError::column_resolution(requested_price, frame.labels().iter().cloned())
    })?;

    let (series, report) = build_series_with_report(
        &frame,
        date_column.position,
        price_column.column.position,
        opts,
    )?;

    Ok(Normalized {
        series,
        date_column,
        price_column,
        report,
    })
}

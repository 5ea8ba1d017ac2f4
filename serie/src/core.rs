use std::sync::Arc;
use std::time::Duration;

use serie_core::{
    CanonicalSeries, FetchRequest, Forecast, Forecaster, FrameSource, Horizon, NormalizeOptions,
    Normalized, RawFrame, SerieConfig, SerieError, ensure_trainable, normalize_detailed,
};

/// Orchestrator that fetches from registered sources and prepares forecasting input.
pub struct Serie {
    sources: Vec<Arc<dyn FrameSource>>,
    cfg: SerieConfig,
}

/// Builder for constructing a `Serie` orchestrator with custom configuration.
pub struct SerieBuilder {
    sources: Vec<Arc<dyn FrameSource>>,
    cfg: SerieConfig,
}

impl Default for SerieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SerieBuilder {
    /// Create a new builder with default configuration and no sources.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: SerieConfig::default(),
        }
    }

    /// Register a frame source.
    ///
    /// Sources are tried in registration order. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_source(mut self, s: Arc<dyn FrameSource>) -> Self {
        self.sources.push(s);
        self
    }

    /// Set the timeout applied to each individual source fetch.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the normalization policy applied by [`Serie::prepare`].
    #[must_use]
    pub fn options(mut self, opts: NormalizeOptions) -> Self {
        self.cfg.normalize = opts;
        self
    }

    /// Replace the whole configuration, e.g. one deserialized from JSON.
    #[must_use]
    pub fn config(mut self, cfg: SerieConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Serie` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources have been registered via [`with_source`](Self::with_source)
    /// or the provider timeout is zero.
    pub fn build(self) -> Result<Serie, SerieError> {
        if self.sources.is_empty() {
            return Err(SerieError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }
        if self.cfg.provider_timeout.is_zero() {
            return Err(SerieError::InvalidArg(
                "provider timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Serie {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

/// A raw frame together with the source that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    /// Name of the source that answered.
    pub source: &'static str,
    /// The frame as the source returned it.
    pub frame: RawFrame,
}

/// Output of [`Serie::prepare`]: the fetched frame and its normalization.
///
/// The raw frame is kept so it can be normalized again with another price column
/// through [`Serie::normalize`] without fetching twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    /// Name of the source that answered.
    pub source: &'static str,
    /// The frame as the source returned it.
    pub frame: RawFrame,
    /// Normalized series plus the columns it came from.
    pub normalized: Normalized,
}

impl Prepared {
    /// The canonical series.
    #[must_use]
    pub const fn series(&self) -> &CanonicalSeries {
        &self.normalized.series
    }
}

fn tag_err(source_name: &str, e: SerieError) -> SerieError {
    match e {
        e @ (SerieError::Source { .. }
        | SerieError::SourceTimeout { .. }
        | SerieError::AllSourcesFailed(_)) => e,
        other => SerieError::source(source_name, other.to_string()),
    }
}

impl Serie {
    /// Start building a new `Serie` instance.
    #[must_use]
    pub fn builder() -> SerieBuilder {
        SerieBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SerieConfig {
        &self.cfg
    }

    /// Wrap a source fetch with the configured timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "serie::core::fetch_with_timeout",
            skip(source, req),
            fields(
                source = source.name(),
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    async fn fetch_with_timeout(
        source: &dyn FrameSource,
        req: &FetchRequest,
        timeout: Duration,
    ) -> Result<RawFrame, SerieError> {
        (tokio::time::timeout(timeout, source.fetch(req)).await)
            .unwrap_or_else(|_| Err(SerieError::source_timeout(source.name())))
    }

    /// Fetch a raw frame, trying sources in registration order.
    ///
    /// A source that errors, times out, or returns an empty frame hands over to the
    /// next one; the first non-empty frame wins.
    ///
    /// # Errors
    /// - `SerieError::EmptyInput` if every source answered with an empty frame.
    /// - `SerieError::AllSourcesFailed` otherwise, listing each source's failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "serie::core::fetch",
            skip(self, req),
            fields(ticker = %req.ticker(), start = %req.start(), end = %req.end()),
        )
    )]
    pub async fn fetch(&self, req: &FetchRequest) -> Result<Fetched, SerieError> {
        let mut errors: Vec<SerieError> = Vec::new();

        for s in &self.sources {
            match Self::fetch_with_timeout(s.as_ref(), req, self.cfg.provider_timeout).await {
                Ok(frame) if frame.is_empty() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(source = s.name(), "empty frame; trying next source");
                }
                Ok(frame) => {
                    return Ok(Fetched {
                        source: s.name(),
                        frame,
                    });
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(source = s.name(), error = %e, "source failed; trying next source");
                    errors.push(tag_err(s.name(), e));
                }
            }
        }

        if errors.is_empty() {
            Err(SerieError::EmptyInput)
        } else {
            Err(SerieError::AllSourcesFailed(errors))
        }
    }

    /// Normalize a frame with the configured policy.
    ///
    /// # Errors
    /// Same as [`serie_core::normalize_for_forecasting`].
    pub fn normalize(&self, frame: &RawFrame, requested_price: &str) -> Result<Normalized, SerieError> {
        normalize_detailed(frame, requested_price, &self.cfg.normalize)
    }

    /// Fetch and normalize in one step.
    ///
    /// # Errors
    /// Any error from [`fetch`](Self::fetch) or [`normalize`](Self::normalize).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "serie::core::prepare",
            skip(self, req),
            fields(ticker = %req.ticker()),
        )
    )]
    pub async fn prepare(&self, req: &FetchRequest, requested_price: &str) -> Result<Prepared, SerieError> {
        let Fetched { source, frame } = self.fetch(req).await?;
        let normalized = self.normalize(&frame, requested_price)?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            source,
            column = %normalized.price_column.column.label,
            rows = normalized.series.len(),
            dropped = normalized.report.input_rows.saturating_sub(normalized.report.output_rows),
            "prepared series"
        );
        Ok(Prepared {
            source,
            frame,
            normalized,
        })
    }

    /// Train `model` on `series` and predict over the history plus `horizon`.
    ///
    /// # Errors
    /// - `SerieError::EmptySeries` if the series is empty (e.g. weekend-only input).
    /// - Whatever the model returns from `fit` or `predict`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "serie::core::forecast",
            skip(self, model, series),
            fields(rows = series.len(), periods = horizon.periods()),
        )
    )]
    pub fn forecast(
        &self,
        model: &mut dyn Forecaster,
        series: &CanonicalSeries,
        horizon: &Horizon,
    ) -> Result<Forecast, SerieError> {
        ensure_trainable(series)?;
        model.fit(series)?;
        model.predict(horizon)
    }
}

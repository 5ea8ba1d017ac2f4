use chrono::NaiveDate;
use serie_core::{
    CanonicalSeries, Forecast, ForecastPoint, Forecaster, Horizon, SerieError, ensure_trainable,
    future_frame,
};

/// z-score of a 95% interval.
const Z95: f64 = 1.96;

/// Persistence model: every future day repeats the last observed value.
///
/// The interval widens with the square root of the steps ahead, scaled by the
/// standard deviation of day-over-day changes. Good enough to exercise the
/// forecasting boundary in tests and examples; not a real model.
#[derive(Debug, Clone, Default)]
pub struct NaiveForecaster {
    history: Option<CanonicalSeries>,
    step_sd: f64,
}

impl NaiveForecaster {
    /// An unfitted model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True after a successful [`Forecaster::fit`].
    #[must_use]
    pub const fn is_fitted(&self) -> bool {
        self.history.is_some()
    }
}

fn step_sd(values: &[f64]) -> f64 {
    if values.len() < 3 {
        return 0.0;
    }
    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let n = diffs.len() as f64;
    let mean = diffs.iter().sum::<f64>() / n;
    let var = diffs.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / (n - 1.0);
    var.sqrt()
}

impl Forecaster for NaiveForecaster {
    fn fit(&mut self, series: &CanonicalSeries) -> Result<(), SerieError> {
        ensure_trainable(series)?;
        let mut rows = series.rows().to_vec();
        rows.sort_by_key(|o| o.ds);
        let sorted = CanonicalSeries::from_rows(rows);
        self.step_sd = step_sd(&sorted.values());
        self.history = Some(sorted);
        Ok(())
    }

    fn predict(&self, horizon: &Horizon) -> Result<Forecast, SerieError> {
        let history = self.history.as_ref().ok_or(SerieError::NotFitted)?;
        let last = history
            .last()
            .ok_or(SerieError::EmptySeries { input_rows: 0 })?;
        let value_at = |ds: NaiveDate| {
            history
                .iter()
                .rev()
                .find(|o| o.ds == ds)
                .map(|o| o.y)
        };

        let mut ahead = 0usize;
        let points = future_frame(history, horizon)?
            .into_iter()
            .map(|ds| {
                let (yhat, spread) = match value_at(ds) {
                    Some(y) => (y, 0.0),
                    None => {
                        ahead += 1;
                        (last.y, Z95 * self.step_sd * (ahead as f64).sqrt())
                    }
                };
                ForecastPoint {
                    ds,
                    yhat,
                    yhat_lower: yhat - spread,
                    yhat_upper: yhat + spread,
                }
            })
            .collect();
        Ok(Forecast { points })
    }
}

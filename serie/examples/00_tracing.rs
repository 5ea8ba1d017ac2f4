mod common;

use serie::{Horizon, Serie};
use serie_mock::NaiveForecaster;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=debug cargo run --example 00_tracing --features tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let serie = Serie::builder().with_source(common::get_source()).build()?;
    let req = common::request_from_args()?;

    // Fetch + normalize: resolution fallbacks and dropped rows show up as events
    let prepared = serie.prepare(&req, "Close").await?;

    // Fit + predict
    let mut model = NaiveForecaster::new();
    let _ = serie.forecast(&mut model, prepared.series(), &Horizon::business_days(10)?)?;

    Ok(())
}

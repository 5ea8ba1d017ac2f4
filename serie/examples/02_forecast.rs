mod common;

use serie::{Horizon, Serie};
use serie_mock::NaiveForecaster;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let serie = Serie::builder().with_source(common::get_source()).build()?;
    let req = common::request_from_args()?;

    let prepared = serie.prepare(&req, "Close").await?;
    let horizon = Horizon::business_days(30)?;

    let mut model = NaiveForecaster::new();
    let forecast = serie.forecast(&mut model, prepared.series(), &horizon)?;

    println!("{:<12}{:>12}{:>12}{:>12}", "ds", "yhat", "lower", "upper");
    for p in forecast.tail(horizon.periods()) {
        println!(
            "{:<12}{:>12.2}{:>12.2}{:>12.2}",
            p.ds.to_string(),
            p.yhat,
            p.yhat_lower,
            p.yhat_upper
        );
    }
    Ok(())
}

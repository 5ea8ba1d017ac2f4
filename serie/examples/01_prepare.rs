mod common;

use serie::Serie;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the orchestrator with a single source.
    let serie = Serie::builder().with_source(common::get_source()).build()?;

    // 2. Ticker and date range from the command line.
    let req = common::request_from_args()?;

    // 3. Fetch and normalize. The source decides the frame shape; we only name the price.
    let prepared = serie.prepare(&req, "Close").await?;
    let n = &prepared.normalized;
    println!(
        "{} via {}: date column '{}', price column '{}' ({:?})",
        req.ticker(),
        prepared.source,
        n.date_column.label,
        n.price_column.column.label,
        n.price_column.strategy,
    );
    println!(
        "{} input rows, {} unparseable, {} on weekends, {} kept",
        n.report.input_rows, n.report.unparseable_rows, n.report.weekend_rows, n.report.output_rows
    );
    for obs in prepared.series() {
        println!("{}  {:>10.2}", obs.ds, obs.y);
    }

    // 4. Re-select another column from the same frame without fetching again.
    let adj = serie.normalize(&prepared.frame, "Adj Close")?;
    println!("last adjusted close: {:?}", adj.series.last().map(|o| o.y));

    Ok(())
}

mod common;
#[cfg(feature = "dataframe")]
use serie::{Serie, ToDataFrame};

#[cfg(feature = "dataframe")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let serie = Serie::builder().with_source(common::get_source()).build()?;
    let req = common::request_from_args()?;

    let prepared = serie.prepare(&req, "Close").await?;
    let df = prepared.series().to_dataframe()?;
    println!("{df}");
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}

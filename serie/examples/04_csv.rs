use serie::{CsvOptions, normalize_for_forecasting, read_csv};

// Layout of a saved multi-ticker download: field row, ticker row, index-name row.
const EXPORT: &str = "\
Price,Close,High,Low,Open,Volume
Ticker,INFY.NS,INFY.NS,INFY.NS,INFY.NS,INFY.NS
Date,,,,,
2024-01-02,1620.9,1631.0,1611.0,1615.0,3200000
2024-01-03,1597.0,1625.0,1591.6,1620.0,4100000
2024-01-06,1601.0,1603.0,1599.0,1600.0,120000
2024-01-08,1620.0,1629.0,1610.0,1616.6,3900000
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1);
    let text = match &path {
        Some(p) => std::fs::read_to_string(p)?,
        None => EXPORT.to_string(),
    };

    let frame = read_csv(
        text.as_bytes(),
        &CsvOptions {
            header_rows: 3,
            ..CsvOptions::default()
        },
    )?;
    let series = normalize_for_forecasting(&frame, "Close")?;
    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}

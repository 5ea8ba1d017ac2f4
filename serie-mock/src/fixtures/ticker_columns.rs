//! Flat shapes: the index already reset into a text `Date` column, with labels
//! that carry the ticker as a trailing token.

use rust_decimal::Decimal;
use serie_core::{Label, RawFrame, Scalar};

pub fn by_symbol(s: &str) -> Option<RawFrame> {
    match s {
        "WIPRO.NS" => Some(wipro()),
        "NOPRICE" => Some(no_price()),
        "BLANK" => Some(blank()),
        _ => None,
    }
}

fn dec(s: &str) -> Scalar {
    Scalar::Decimal(s.parse::<Decimal>().unwrap())
}

fn wipro() -> RawFrame {
    RawFrame::new(
        vec![
            Label::simple("Date"),
            Label::simple("Open WIPRO.NS"),
            Label::simple("Close WIPRO.NS"),
            Label::simple("Volume WIPRO.NS"),
        ],
        vec![
            vec![Scalar::text("2024-01-02"), dec("466.10"), dec("462.35"), Scalar::Int(5_100_000)],
            vec![Scalar::text("2024-01-03"), dec("462.35"), dec("458.90"), Scalar::Int(4_700_000)],
            vec![Scalar::text("2024-01-04"), dec("458.90"), Scalar::text("-"), Scalar::Int(0)],
            vec![Scalar::text("2024-01-05"), dec("461.00"), dec("465.55"), Scalar::Int(6_300_000)],
            vec![Scalar::text("2024-01-08"), dec("465.55"), dec("470.20"), Scalar::Int(5_900_000)],
        ],
    )
    .unwrap()
}

fn no_price() -> RawFrame {
    RawFrame::new(
        vec![Label::simple("Date"), Label::simple("Open"), Label::simple("Volume")],
        vec![vec![Scalar::text("2024-01-05"), Scalar::Float(10.0), Scalar::Int(1)]],
    )
    .unwrap()
}

fn blank() -> RawFrame {
    RawFrame::new(
        vec![Label::simple("Date"), Label::simple("Close")],
        vec![
            vec![Scalar::text("2024-01-05"), Scalar::Null],
            vec![Scalar::text("2024-01-08"), Scalar::text("n/a")],
        ],
    )
    .unwrap()
}

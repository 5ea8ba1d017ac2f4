use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{Label, RawFrame, Scalar, SerieError};

/// How to read a CSV export into a [`RawFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Number of leading header rows. More than one produces composite labels,
    /// one level per header row (the layout of a multi-level column export).
    pub header_rows: usize,
    /// Field delimiter.
    pub delimiter: u8,
    /// Trim whitespace around fields and headers.
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            header_rows: 1,
            delimiter: b',',
            trim: true,
        }
    }
}

/// Read CSV text into a raw frame.
///
/// Empty cells become `Scalar::Null`; everything else is kept as `Scalar::Text`
/// for the series builder to coerce. Short records are padded with nulls. An input
/// with no header at all yields an empty frame.
///
/// # Errors
/// - `SerieError::InvalidArg` if `header_rows` is zero or a record is wider than the header.
/// - `SerieError::Data` if the CSV itself cannot be read.
pub fn read_csv<R: Read>(reader: R, opts: &CsvOptions) -> Result<RawFrame, SerieError> {
    if opts.header_rows == 0 {
        return Err(SerieError::InvalidArg(
            "CSV input needs at least one header row".into(),
        ));
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(opts.delimiter)
        .trim(if opts.trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let mut records = rdr.records();
    let mut headers: Vec<StringRecord> = Vec::with_capacity(opts.header_rows);
    for rec in records.by_ref().take(opts.header_rows) {
        headers.push(rec.map_err(|e| SerieError::Data(e.to_string()))?);
    }
    let Some(first) = headers.first() else {
        return Ok(RawFrame::empty());
    };
    let width = first.len();
    let labels = build_labels(&headers, width);

    let mut rows = Vec::new();
    for (i, rec) in records.enumerate() {
        let rec = rec.map_err(|e| SerieError::Data(e.to_string()))?;
        if rec.len() > width {
            return Err(SerieError::InvalidArg(format!(
                "CSV record {} has {} fields but the header has {width}",
                i + opts.header_rows + 1,
                rec.len()
            )));
        }
        let mut row: Vec<Scalar> = rec.iter().map(cell).collect();
        row.resize(width, Scalar::Null);
        rows.push(row);
    }

    RawFrame::new(labels, rows)
}

fn build_labels(headers: &[StringRecord], width: usize) -> Vec<Label> {
    (0..width)
        .map(|col| {
            if headers.len() == 1 {
                Label::simple(headers[0].get(col).unwrap_or_default())
            } else {
                Label::composite(headers.iter().map(|h| h.get(col).unwrap_or_default()))
            }
        })
        .collect()
}

fn cell(field: &str) -> Scalar {
    if field.is_empty() {
        Scalar::Null
    } else {
        Scalar::text(field)
    }
}

//! CSV export of prepared rows.
//!
//! Columns: date, open, high, low, close, volume, ma50, ma200, sentiment.
//! Undefined averages are written as empty fields. The output keeps the
//! loader's required columns, so an export can be loaded again.

use std::io::Write;

use crate::domain::DerivedRecord;

pub const EXPORT_COLUMNS: [&str; 9] = [
    "date", "open", "high", "low", "close", "volume", "ma50", "ma200", "sentiment",
];

/// Write `rows` with a header line.
pub fn write_rows_csv<W: Write>(rows: &[DerivedRecord], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_COLUMNS)?;

    for r in rows {
        let p = &r.record;
        wtr.write_record([
            p.date.format("%Y-%m-%d").to_string(),
            p.open.to_string(),
            p.high.to_string(),
            p.low.to_string(),
            p.close.to_string(),
            p.volume.to_string(),
            optional(r.ma50),
            optional(r.ma200),
            r.sentiment.label().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

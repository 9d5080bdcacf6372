//! CSV ingestion for OHLCV tables.
//!
//! Columns are located by header name (case-insensitive, surrounding
//! whitespace ignored), so extra columns and any column order are fine.
//! Every failure names the 1-based line and the column that broke.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::PriceRecord;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

/// Errors from loading the source table. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{column}' (header has: {found})")]
    MissingColumn { column: &'static str, found: String },

    #[error("line {line}: cannot parse date '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: column '{column}' is not numeric: '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("data file has a header but no rows")]
    Empty,
}

/// Open and parse a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<PriceRecord>, DataLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_csv(file)?;
    info!(path = %path.display(), rows = rows.len(), "loaded price data");
    Ok(rows)
}

/// Parse CSV from any reader. Rows come back in file order.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<PriceRecord>, DataLoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(rdr.headers()?)?;
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row = columns.parse_row(&record, line)?;
        if !row.is_sane() {
            warn!(line, date = %row.date, "OHLC values are inconsistent; keeping row");
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DataLoadError::Empty);
    }
    Ok(rows)
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DataLoadError> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_ascii_lowercase()).collect();
        let find = |column: &'static str| {
            names
                .iter()
                .position(|n| n == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column,
                    found: names.join(","),
                })
        };

        let [date, open, high, low, close, volume] = REQUIRED_COLUMNS;
        Ok(Self {
            date: find(date)?,
            open: find(open)?,
            high: find(high)?,
            low: find(low)?,
            close: find(close)?,
            volume: find(volume)?,
        })
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        line: u64,
    ) -> Result<PriceRecord, DataLoadError> {
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let raw_date = field(self.date);
        let date = parse_date(raw_date).ok_or_else(|| DataLoadError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        Ok(PriceRecord {
            date,
            open: parse_price(field(self.open), "open", line)?,
            high: parse_price(field(self.high), "high", line)?,
            low: parse_price(field(self.low), "low", line)?,
            close: parse_price(field(self.close), "close", line)?,
            volume: parse_volume(field(self.volume), line)?,
        })
    }
}

/// Parse a calendar date, discarding any time-of-day component.
///
/// Accepted: `2020-01-31`, `2020-01-31 16:00:00`, RFC 3339
/// (`2020-01-31T16:00:00-05:00`), and `01/31/2020`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }
    None
}

fn parse_price(value: &str, column: &'static str, line: u64) -> Result<f64, DataLoadError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataLoadError::InvalidNumber {
            line,
            column,
            value: value.to_string(),
        }),
    }
}

/// Volume must be a non-negative whole number; `"1500.0"` is accepted.
fn parse_volume(value: &str, line: u64) -> Result<u64, DataLoadError> {
    if let Ok(v) = value.parse::<u64>() {
        return Ok(v);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 => {
            Ok(v as u64)
        }
        _ => Err(DataLoadError::InvalidNumber {
            line,
            column: "volume",
            value: value.to_string(),
        }),
    }
}

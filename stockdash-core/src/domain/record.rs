//! Price rows — raw OHLCV and the derived row used by every view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Sentiment;

/// One OHLCV row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceRecord {
    /// OHLC consistency: `low <= min(open, close) <= max(open, close) <= high`.
    ///
    /// The loader does not reject rows that fail this; it only logs them.
    pub fn is_sane(&self) -> bool {
        self.low <= self.open.min(self.close) && self.open.max(self.close) <= self.high
    }
}

/// A price row extended with trailing moving averages and a sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    #[serde(flatten)]
    pub record: PriceRecord,
    /// Mean close over this row and the 49 before it. `None` during warmup.
    pub ma50: Option<f64>,
    /// Mean close over this row and the 199 before it. `None` during warmup.
    pub ma200: Option<f64>,
    pub sentiment: Sentiment,
}

impl DerivedRecord {
    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    pub fn close(&self) -> f64 {
        self.record.close
    }

    pub fn volume(&self) -> u64 {
        self.record.volume
    }
}

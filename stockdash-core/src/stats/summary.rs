//! Summary statistics over the filtered rows.

use serde::Serialize;

use crate::domain::DerivedRecord;

/// Shown instead of statistics when the selected range matches no rows.
pub const NO_DATA_MESSAGE: &str = "No data available for the selected date range.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub avg_close: f64,
    pub max_close: f64,
    pub total_volume: u64,
    pub row_count: usize,
}

impl SummaryStats {
    /// `None` for an empty slice; the mean is undefined there.
    pub fn compute(rows: &[DerivedRecord]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let sum: f64 = rows.iter().map(|r| r.close()).sum();
        let max_close = rows
            .iter()
            .map(|r| r.close())
            .fold(f64::NEG_INFINITY, f64::max);
        let total_volume = rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.volume()));

        Some(Self {
            avg_close: sum / rows.len() as f64,
            max_close,
            total_volume,
            row_count: rows.len(),
        })
    }

    pub fn to_text(&self) -> String {
        format!(
            "Average Close Price: ${:.2} | Max Close Price: ${:.2} | Total Volume: {}",
            self.avg_close,
            self.max_close,
            format_thousands(self.total_volume)
        )
    }
}

/// `1234567` → `"1,234,567"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

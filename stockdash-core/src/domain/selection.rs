//! View selection — the three user controls.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Price chart rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Candlestick,
}

impl ChartType {
    pub fn label(self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Candlestick => "Candlestick Chart",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ChartType::Line => ChartType::Candlestick,
            ChartType::Candlestick => ChartType::Line,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartType::Line => f.write_str("line"),
            ChartType::Candlestick => f.write_str("candlestick"),
        }
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ChartType::Line),
            "candlestick" | "candle" => Ok(ChartType::Candlestick),
            other => Err(format!("unknown chart type '{other}' (expected line or candlestick)")),
        }
    }
}

/// Chart type plus an inclusive date range.
///
/// `start > end` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSelection {
    pub chart_type: ChartType,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ViewSelection {
    pub fn new(chart_type: ChartType, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            chart_type,
            start,
            end,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

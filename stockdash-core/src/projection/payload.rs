//! Chart payloads — plain data, no styling.
//!
//! Each payload has an empty form so the empty-range policy can blank every
//! view without special cases in the renderer.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Sentiment;
use crate::stats::SentimentCount;

/// A named line over dates. Undefined points are omitted, never zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, points: Vec<(NaiveDate, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest y value, or `None` with no points.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.1).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

/// Up/down classification; picks one of two fixed candle styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandleDirection {
    Increasing,
    Decreasing,
}

impl CandleDirection {
    /// `close >= open` counts as increasing.
    pub fn of(open: f64, close: f64) -> Self {
        if close >= open {
            CandleDirection::Increasing
        } else {
            CandleDirection::Decreasing
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub direction: CandleDirection,
}

/// Price chart in one of the two selectable forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PriceChart {
    Empty,
    Line {
        close: LineSeries,
        ma50: LineSeries,
        ma200: LineSeries,
    },
    Candlestick {
        candles: Vec<Candle>,
        ma50: LineSeries,
        ma200: LineSeries,
    },
}

impl PriceChart {
    pub fn is_empty(&self) -> bool {
        matches!(self, PriceChart::Empty)
    }
}

/// One bar per filtered row; duplicate dates give duplicate bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeBar {
    pub date: NaiveDate,
    pub volume: u64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VolumeChart {
    pub bars: Vec<VolumeBar>,
}

impl VolumeChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub volume: u64,
    pub close: f64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScatterChart {
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points belonging to one label, for per-category rendering.
    pub fn by_sentiment(&self, sentiment: Sentiment) -> impl Iterator<Item = &ScatterPoint> {
        self.points.iter().filter(move |p| p.sentiment == sentiment)
    }
}

/// Label counts, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentChart {
    pub bars: Vec<SentimentCount>,
}

impl SentimentChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn total(&self) -> usize {
        self.bars.iter().map(|b| b.count).sum()
    }
}

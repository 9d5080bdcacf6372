//! View projection — one pure call from a selection to all six payloads.
//!
//! `project` filters the prepared dataset to the selected inclusive date
//! range and builds every view from that slice. An empty slice short-circuits
//! to `ViewBundle::empty()` before any aggregate runs.

pub mod payload;

use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::domain::{ChartType, DerivedRecord, ViewSelection};
use crate::stats::{tally, CorrelationMatrix, SummaryStats, NO_DATA_MESSAGE};

pub use payload::{
    Candle, CandleDirection, LineSeries, PriceChart, ScatterChart, ScatterPoint, SentimentChart,
    VolumeBar, VolumeChart,
};

pub const CLOSE_SERIES: &str = "Close Price";
pub const MA50_SERIES: &str = "50-Day MA";
pub const MA200_SERIES: &str = "200-Day MA";

/// Heatmap column labels, in matrix order.
pub const NUMERIC_COLUMNS: [&str; 7] = ["open", "high", "low", "close", "volume", "ma50", "ma200"];

/// Everything the six views need, computed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewBundle {
    pub price_chart: PriceChart,
    pub summary_text: String,
    /// Structured form of `summary_text`; `None` for an empty range.
    pub summary: Option<SummaryStats>,
    pub volume_chart: VolumeChart,
    pub scatter_chart: ScatterChart,
    pub heatmap: CorrelationMatrix,
    pub sentiment_chart: SentimentChart,
}

impl ViewBundle {
    /// Blank charts and the placeholder summary.
    pub fn empty() -> Self {
        Self {
            price_chart: PriceChart::Empty,
            summary_text: NO_DATA_MESSAGE.to_string(),
            summary: None,
            volume_chart: VolumeChart::default(),
            scatter_chart: ScatterChart::default(),
            heatmap: CorrelationMatrix::default(),
            sentiment_chart: SentimentChart::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }
}

/// Build every view for `selection` over `data`.
pub fn project(data: &Dataset, selection: &ViewSelection) -> ViewBundle {
    let rows = data.filter(selection.start, selection.end);
    debug!(
        start = %selection.start,
        end = %selection.end,
        chart_type = %selection.chart_type,
        rows = rows.len(),
        "projecting view"
    );

    let Some(summary) = SummaryStats::compute(rows) else {
        return ViewBundle::empty();
    };

    ViewBundle {
        price_chart: price_chart(rows, selection.chart_type),
        summary_text: summary.to_text(),
        summary: Some(summary),
        volume_chart: volume_chart(rows),
        scatter_chart: scatter_chart(rows),
        heatmap: heatmap(rows),
        sentiment_chart: SentimentChart {
            bars: tally(rows.iter().map(|r| r.sentiment)),
        },
    }
}

fn ma_series(rows: &[DerivedRecord]) -> (LineSeries, LineSeries) {
    let ma50 = rows
        .iter()
        .filter_map(|r| r.ma50.map(|v| (r.date(), v)))
        .collect();
    let ma200 = rows
        .iter()
        .filter_map(|r| r.ma200.map(|v| (r.date(), v)))
        .collect();
    (
        LineSeries::new(MA50_SERIES, ma50),
        LineSeries::new(MA200_SERIES, ma200),
    )
}

fn price_chart(rows: &[DerivedRecord], chart_type: ChartType) -> PriceChart {
    let (ma50, ma200) = ma_series(rows);
    match chart_type {
        ChartType::Line => PriceChart::Line {
            close: LineSeries::new(
                CLOSE_SERIES,
                rows.iter().map(|r| (r.date(), r.close())).collect(),
            ),
            ma50,
            ma200,
        },
        ChartType::Candlestick => PriceChart::Candlestick {
            candles: rows
                .iter()
                .map(|r| Candle {
                    date: r.date(),
                    open: r.record.open,
                    high: r.record.high,
                    low: r.record.low,
                    close: r.record.close,
                    direction: CandleDirection::of(r.record.open, r.record.close),
                })
                .collect(),
            ma50,
            ma200,
        },
    }
}

fn volume_chart(rows: &[DerivedRecord]) -> VolumeChart {
    VolumeChart {
        bars: rows
            .iter()
            .map(|r| VolumeBar {
                date: r.date(),
                volume: r.volume(),
                sentiment: r.sentiment,
            })
            .collect(),
    }
}

fn scatter_chart(rows: &[DerivedRecord]) -> ScatterChart {
    ScatterChart {
        points: rows
            .iter()
            .map(|r| ScatterPoint {
                volume: r.volume(),
                close: r.close(),
                sentiment: r.sentiment,
            })
            .collect(),
    }
}

/// Correlation over the numeric columns only; date and sentiment are excluded.
fn heatmap(rows: &[DerivedRecord]) -> CorrelationMatrix {
    let column = |f: fn(&DerivedRecord) -> Option<f64>| rows.iter().map(f).collect::<Vec<_>>();
    let columns = [
        (NUMERIC_COLUMNS[0], column(|r| Some(r.record.open))),
        (NUMERIC_COLUMNS[1], column(|r| Some(r.record.high))),
        (NUMERIC_COLUMNS[2], column(|r| Some(r.record.low))),
        (NUMERIC_COLUMNS[3], column(|r| Some(r.record.close))),
        (NUMERIC_COLUMNS[4], column(|r| Some(r.record.volume as f64))),
        (NUMERIC_COLUMNS[5], column(|r| r.ma50)),
        (NUMERIC_COLUMNS[6], column(|r| r.ma200)),
    ];
    CorrelationMatrix::compute(&columns)
}

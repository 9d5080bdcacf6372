//! Dashboard panels — one ratatui widget per view payload.
//!
//! Widgets borrow their payload from the current `ViewBundle` and never
//! compute statistics themselves; all numbers come from `project`.

pub mod candle_chart;
pub mod heatmap;
pub mod price_line;
pub mod scatter;
pub mod sentiment;
pub mod summary;
pub mod volume;

pub use candle_chart::CandleChartPanel;
pub use heatmap::HeatmapPanel;
pub use price_line::PriceLinePanel;
pub use scatter::ScatterPanel;
pub use sentiment::SentimentPanel;
pub use summary::SummaryPanel;
pub use volume::VolumePanel;

use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use stockdash_core::projection::PriceChart;

use crate::theme::Theme;

/// Bordered block shared by every panel. Empty payloads get a `[No Data]` tag.
pub fn panel_block<'a>(title: &str, focused: bool, empty: bool, theme: &Theme) -> Block<'a> {
    let title = if empty {
        format!(" {title} [No Data] ")
    } else {
        format!(" {title} ")
    };
    let border = if focused { theme.accent } else { theme.muted };
    let title_color = if focused { theme.accent } else { theme.text_secondary };
    let mut title_style = Style::default().fg(title_color);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    Block::default()
        .title(title)
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background))
}

/// Days since the common era, for plotting dates on a numeric axis.
pub fn date_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn to_points(points: &[(NaiveDate, f64)]) -> Vec<(f64, f64)> {
    points.iter().map(|&(d, v)| (date_x(d), v)).collect()
}

/// `[lo, hi]` widened by 5% of the span, or by 1.0 when the span is zero.
pub fn padded_bounds(lo: f64, hi: f64) -> [f64; 2] {
    let range = hi - lo;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    [lo - pad, hi + pad]
}

/// Min/max over any number of value iterators.
pub fn value_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Price view: dispatches to the line or candlestick widget.
pub struct PricePanel<'a> {
    chart: &'a PriceChart,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PricePanel<'a> {
    pub fn new(chart: &'a PriceChart, title: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            chart,
            title,
            focused,
            theme,
        }
    }
}

impl Widget for PricePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.chart {
            PriceChart::Empty => {
                panel_block(self.title, self.focused, true, self.theme).render(area, buf)
            }
            PriceChart::Line { close, ma50, ma200 } => {
                PriceLinePanel::new(close, ma50, ma200, self.title, self.focused, self.theme)
                    .render(area, buf)
            }
            PriceChart::Candlestick { candles, ma50, ma200 } => {
                CandleChartPanel::new(candles, ma50, ma200, self.title, self.focused, self.theme)
                    .render(area, buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, sample_bundle};
    use stockdash_core::ChartType;

    #[test]
    fn padded_bounds_handles_flat_series() {
        assert_eq!(padded_bounds(5.0, 5.0), [4.0, 6.0]);
        let [lo, hi] = padded_bounds(0.0, 100.0);
        assert!((lo + 5.0).abs() < 1e-12 && (hi - 105.0).abs() < 1e-12);
    }

    #[test]
    fn value_range_of_nothing_is_none() {
        assert_eq!(value_range(std::iter::empty()), None);
        assert_eq!(value_range([3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
    }

    #[test]
    fn empty_price_chart_is_tagged() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);
        let panel = PricePanel::new(&PriceChart::Empty, "Tesla Stock Prices", true, &theme);
        panel.render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Tesla Stock Prices [No Data]"));
    }

    #[test]
    fn price_panel_renders_both_chart_types() {
        let theme = Theme::default();
        for chart_type in [ChartType::Line, ChartType::Candlestick] {
            let bundle = sample_bundle(30, chart_type);
            let area = Rect::new(0, 0, 80, 20);
            let mut buf = Buffer::empty(area);
            PricePanel::new(&bundle.price_chart, "Prices", false, &theme).render(area, &mut buf);
            assert!(buffer_text(&buf).contains("Prices"));
        }
    }
}

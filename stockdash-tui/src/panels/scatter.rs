//! Scatter panel — volume (x) against close price (y), one dataset per
//! sentiment label.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    symbols,
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use stockdash_core::projection::ScatterChart;
use stockdash_core::Sentiment;

use super::{padded_bounds, panel_block, value_range};
use crate::theme::Theme;

pub const SCATTER_TITLE: &str = "Volume vs Close Price";

pub struct ScatterPanel<'a> {
    chart: &'a ScatterChart,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ScatterPanel<'a> {
    pub fn new(chart: &'a ScatterChart, focused: bool, theme: &'a Theme) -> Self {
        Self {
            chart,
            focused,
            theme,
        }
    }
}

impl Widget for ScatterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.chart.is_empty() {
            panel_block(SCATTER_TITLE, self.focused, true, self.theme).render(area, buf);
            return;
        }

        let groups: Vec<(Sentiment, Vec<(f64, f64)>)> = Sentiment::ALL
            .iter()
            .map(|&s| {
                let points = self
                    .chart
                    .by_sentiment(s)
                    .map(|p| (p.volume as f64, p.close))
                    .collect();
                (s, points)
            })
            .collect();

        let (x_min, x_max) =
            value_range(self.chart.points.iter().map(|p| p.volume as f64)).unwrap_or((0.0, 1.0));
        let (y_min, y_max) =
            value_range(self.chart.points.iter().map(|p| p.close)).unwrap_or((0.0, 1.0));
        let [x_lower, x_upper] = padded_bounds(x_min, x_max);
        let [y_lower, y_upper] = padded_bounds(y_min, y_max);

        let datasets: Vec<Dataset> = groups
            .iter()
            .filter(|(_, points)| !points.is_empty())
            .map(|(s, points)| {
                Dataset::default()
                    .name(s.label())
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(self.theme.sentiment_color(*s)))
                    .data(points)
            })
            .collect();

        let axis_style = Style::default().fg(self.theme.muted);
        Chart::new(datasets)
            .block(panel_block(SCATTER_TITLE, self.focused, false, self.theme))
            .x_axis(
                Axis::default()
                    .title("Volume")
                    .style(axis_style)
                    .bounds([x_lower, x_upper])
                    .labels([format!("{x_min:.0}"), format!("{x_max:.0}")]),
            )
            .y_axis(
                Axis::default()
                    .title("Close Price")
                    .style(axis_style)
                    .bounds([y_lower, y_upper])
                    .labels([format!("{y_min:.1}"), format!("{y_max:.1}")]),
            )
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Percentage(50), Constraint::Percentage(60)))
            .render(area, buf);
    }
}

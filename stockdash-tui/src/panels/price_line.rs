//! Price panel, line mode — close price with MA-50 / MA-200 overlays.
//!
//! Uses ratatui's `Chart` with braille markers. Overlay series only carry
//! points where the average is defined, so they start later than the close.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use stockdash_core::projection::LineSeries;

use super::{padded_bounds, panel_block, to_points};
use crate::theme::Theme;

pub struct PriceLinePanel<'a> {
    close: &'a LineSeries,
    ma50: &'a LineSeries,
    ma200: &'a LineSeries,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PriceLinePanel<'a> {
    pub fn new(
        close: &'a LineSeries,
        ma50: &'a LineSeries,
        ma200: &'a LineSeries,
        title: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            close,
            ma50,
            ma200,
            title,
            focused,
            theme,
        }
    }
}

impl Widget for PriceLinePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(first), Some(last)) = (self.close.points.first(), self.close.points.last()) else {
            panel_block(self.title, self.focused, true, self.theme).render(area, buf);
            return;
        };

        let close_data = to_points(&self.close.points);
        let ma50_data = to_points(&self.ma50.points);
        let ma200_data = to_points(&self.ma200.points);

        let (y_min, y_max) = [self.close, self.ma50, self.ma200]
            .iter()
            .filter_map(|s| s.y_range())
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
            .unwrap_or((0.0, 1.0));
        let [y_lower, y_upper] = padded_bounds(y_min, y_max);
        let x_lower = super::date_x(first.0) - 0.5;
        let x_upper = super::date_x(last.0) + 0.5;

        let series = [
            (self.close, &close_data, self.theme.accent),
            (self.ma50, &ma50_data, self.theme.warning),
            (self.ma200, &ma200_data, self.theme.neutral),
        ];
        let datasets: Vec<Dataset> = series
            .iter()
            .map(|(s, data, color)| {
                Dataset::default()
                    .name(s.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(*color))
                    .data(data)
            })
            .collect();

        let axis_style = Style::default().fg(self.theme.muted);
        let chart = Chart::new(datasets)
            .block(panel_block(self.title, self.focused, false, self.theme))
            .x_axis(
                Axis::default()
                    .title("Date")
                    .style(axis_style)
                    .bounds([x_lower, x_upper])
                    .labels([first.0.to_string(), last.0.to_string()]),
            )
            .y_axis(
                Axis::default()
                    .title("Price (USD)")
                    .style(axis_style)
                    .bounds([y_lower, y_upper])
                    .labels([
                        format!("{y_lower:.1}"),
                        format!("{:.1}", (y_lower + y_upper) / 2.0),
                        format!("{y_upper:.1}"),
                    ]),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((
                ratatui::layout::Constraint::Percentage(60),
                ratatui::layout::Constraint::Percentage(60),
            ));

        chart.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, d};

    fn series(name: &str, values: &[f64]) -> LineSeries {
        LineSeries::new(
            name,
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (d(2020, 1, 1) + chrono::Duration::days(i as i64), v))
                .collect(),
        )
    }

    #[test]
    fn renders_title_axes_and_legend() {
        let theme = Theme::default();
        let close = series("Close Price", &[100.0, 110.0, 105.0, 120.0]);
        let ma50 = series("50-Day MA", &[]);
        let ma200 = series("200-Day MA", &[]);
        let panel = PriceLinePanel::new(&close, &ma50, &ma200, "Tesla Stock Prices", true, &theme);

        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("Tesla Stock Prices"));
        assert!(content.contains("2020-01-01"));
        assert!(content.contains("2020-01-04"));
        assert!(content.contains("Close Price"));
    }

    #[test]
    fn y_axis_spans_overlays_beyond_close() {
        let theme = Theme::default();
        let close = series("Close Price", &[100.0, 110.0]);
        let ma50 = series("50-Day MA", &[200.0]);
        let ma200 = series("200-Day MA", &[]);
        let panel = PriceLinePanel::new(&close, &ma50, &ma200, "Prices", false, &theme);

        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("95.0"));
        assert!(content.contains("205.0"));
    }

    #[test]
    fn single_point_renders_without_panic() {
        let theme = Theme::default();
        let close = series("Close Price", &[42.0]);
        let empty = series("50-Day MA", &[]);
        let panel = PriceLinePanel::new(&close, &empty, &empty, "Prices", false, &theme);

        let area = Rect::new(0, 0, 60, 15);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
    }

    #[test]
    fn tiny_area_renders_without_panic() {
        let theme = Theme::default();
        let close = series("Close Price", &[1.0, 2.0, 3.0]);
        let empty = series("50-Day MA", &[]);
        let panel = PriceLinePanel::new(&close, &empty, &empty, "Prices", false, &theme);

        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
    }
}

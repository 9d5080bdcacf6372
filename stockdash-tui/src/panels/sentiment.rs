//! Sentiment panel — label counts for the view, largest first.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Widget},
};

use stockdash_core::projection::SentimentChart;

use super::panel_block;
use crate::theme::Theme;

pub const SENTIMENT_TITLE: &str = "Sentiment Distribution";

pub struct SentimentPanel<'a> {
    chart: &'a SentimentChart,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SentimentPanel<'a> {
    pub fn new(chart: &'a SentimentChart, focused: bool, theme: &'a Theme) -> Self {
        Self {
            chart,
            focused,
            theme,
        }
    }
}

impl Widget for SentimentPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(SENTIMENT_TITLE, self.focused, self.chart.is_empty(), self.theme);
        if self.chart.is_empty() {
            block.render(area, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .chart
            .bars
            .iter()
            .map(|b| {
                let style = Style::default().fg(self.theme.sentiment_color(b.sentiment));
                Bar::default()
                    .value(b.count as u64)
                    .label(Line::from(b.sentiment.label()))
                    .style(style)
                    .value_style(style.add_modifier(Modifier::REVERSED))
            })
            .collect();

        BarChart::default()
            .block(block)
            .bar_width(8)
            .bar_gap(2)
            .label_style(Style::default().fg(self.theme.text_secondary))
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

//! Volume panel — one bar per row, colored by sentiment.
//!
//! Bars are one column wide with no gap; when the view has more rows than
//! columns the newest rows are shown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Widget},
};

use stockdash_core::projection::VolumeChart;

use super::panel_block;
use crate::theme::Theme;

pub const VOLUME_TITLE: &str = "Volume Over Time";

pub struct VolumePanel<'a> {
    chart: &'a VolumeChart,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> VolumePanel<'a> {
    pub fn new(chart: &'a VolumeChart, focused: bool, theme: &'a Theme) -> Self {
        Self {
            chart,
            focused,
            theme,
        }
    }
}

impl Widget for VolumePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(first), Some(last)) = (self.chart.bars.first(), self.chart.bars.last()) else {
            panel_block(VOLUME_TITLE, self.focused, true, self.theme).render(area, buf);
            return;
        };

        let title = format!("{VOLUME_TITLE} | {} .. {}", first.date, last.date);
        let block = panel_block(&title, self.focused, false, self.theme);
        let width = block.inner(area).width as usize;

        let start = self.chart.bars.len().saturating_sub(width);
        let bars: Vec<Bar> = self.chart.bars[start..]
            .iter()
            .map(|b| {
                Bar::default()
                    .value(b.volume)
                    .text_value(String::new())
                    .style(Style::default().fg(self.theme.sentiment_color(b.sentiment)))
            })
            .collect();

        BarChart::default()
            .block(block)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

//! Summary panel — the one-line statistics text, plus row count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use stockdash_core::stats::SummaryStats;

use super::panel_block;
use crate::theme::Theme;

pub struct SummaryPanel<'a> {
    text: &'a str,
    stats: Option<&'a SummaryStats>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(
        text: &'a str,
        stats: Option<&'a SummaryStats>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            text,
            stats,
            focused,
            theme,
        }
    }
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block("Summary", self.focused, false, self.theme);

        let mut lines = vec![Line::from(Span::styled(
            self.text,
            Style::default()
                .fg(self.theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ))];
        match self.stats {
            Some(stats) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("{} rows in range", stats.row_count),
                    Style::default().fg(self.theme.muted),
                )));
            }
            None => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Adjust the date range with s / e or [ ] { }",
                    Style::default().fg(self.theme.muted),
                )));
            }
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

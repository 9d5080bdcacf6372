//! Heatmap panel — correlation matrix as a grid of colored cells.
//!
//! Direct buffer writes: a label column, a header row, and one
//! `CELL_WIDTH`-wide cell per coefficient. Undefined coefficients print
//! `n/a` on the muted color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use stockdash_core::stats::CorrelationMatrix;

use super::panel_block;
use crate::theme::Theme;

pub const HEATMAP_TITLE: &str = "Correlation Heatmap";

const LABEL_WIDTH: u16 = 7;
const CELL_WIDTH: u16 = 7;

pub struct HeatmapPanel<'a> {
    matrix: &'a CorrelationMatrix,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> HeatmapPanel<'a> {
    pub fn new(matrix: &'a CorrelationMatrix, focused: bool, theme: &'a Theme) -> Self {
        Self {
            matrix,
            focused,
            theme,
        }
    }
}

/// Fixed-width cell text: signed coefficient or `n/a`.
pub fn cell_text(value: Option<f64>) -> String {
    match value {
        Some(r) => format!("{r:>+6.2} "),
        None => format!("{:>6} ", "n/a"),
    }
}

/// Dark text on bright cells, light text elsewhere.
fn text_color(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) if (r as u16 + g as u16 + b as u16) > 360 => Color::Black,
        _ => Color::White,
    }
}

impl Widget for HeatmapPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(HEATMAP_TITLE, self.focused, self.matrix.is_empty(), self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.matrix.is_empty() || inner.width <= LABEL_WIDTH || inner.height < 2 {
            return;
        }

        let header_style = Style::default().fg(self.theme.muted);
        let max_cols = ((inner.width - LABEL_WIDTH) / CELL_WIDTH) as usize;
        let max_rows = (inner.height - 1) as usize;

        for (j, label) in self.matrix.labels.iter().take(max_cols).enumerate() {
            let x = inner.x + LABEL_WIDTH + j as u16 * CELL_WIDTH;
            buf.set_stringn(x, inner.y, format!("{label:>6}"), CELL_WIDTH as usize, header_style);
        }

        for (i, label) in self.matrix.labels.iter().take(max_rows).enumerate() {
            let y = inner.y + 1 + i as u16;
            buf.set_stringn(inner.x, y, format!("{label:<6}"), LABEL_WIDTH as usize, header_style);

            for j in 0..self.matrix.len().min(max_cols) {
                let value = self.matrix.get(i, j);
                let bg = self.theme.correlation_color(value);
                let x = inner.x + LABEL_WIDTH + j as u16 * CELL_WIDTH;
                buf.set_stringn(
                    x,
                    y,
                    cell_text(value),
                    CELL_WIDTH as usize,
                    Style::default().bg(bg).fg(text_color(bg)),
                );
            }
        }
    }
}

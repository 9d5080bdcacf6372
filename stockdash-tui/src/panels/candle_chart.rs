//! Price panel, candlestick mode — OHLC candles with MA overlays
//!
//! Renders using direct buffer writes:
//! - Each candle = 1 terminal column, newest candles kept when the view is
//!   wider than the plot
//! - Body: block char, positive color when increasing, negative otherwise
//! - Wicks: vertical line chars to high/low
//! - MA-50 / MA-200: one dot per column at the average's price level

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use stockdash_core::projection::{Candle, CandleDirection, LineSeries};

use super::{padded_bounds, panel_block, value_range};
use crate::theme::Theme;

/// Candlestick chart widget
pub struct CandleChartPanel<'a> {
    candles: &'a [Candle],
    ma50: &'a LineSeries,
    ma200: &'a LineSeries,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CandleChartPanel<'a> {
    pub fn new(
        candles: &'a [Candle],
        ma50: &'a LineSeries,
        ma200: &'a LineSeries,
        title: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            candles,
            ma50,
            ma200,
            title,
            focused,
            theme,
        }
    }

    /// Map a price to a Y position in the plot area (0 = top)
    fn price_to_y(&self, price: f64, y_min: f64, y_max: f64, plot_height: u16) -> u16 {
        if (y_max - y_min).abs() < 1e-9 || plot_height == 0 {
            return 0;
        }
        let frac = (price - y_min) / (y_max - y_min);
        let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
        y.round().max(0.0).min(plot_height.saturating_sub(1) as f64) as u16
    }
}

/// MA values keyed by column, for candles `from..candle_count`.
///
/// Overlay points exist for a suffix of the view (the averages are undefined
/// only during warm-up), so point `k` belongs to candle
/// `candle_count - points.len() + k`.
fn aligned(series: &LineSeries, candle_count: usize, from: usize) -> Vec<(usize, f64)> {
    let offset = candle_count.saturating_sub(series.points.len());
    series
        .points
        .iter()
        .enumerate()
        .map(|(k, &(_, v))| (offset + k, v))
        .filter(|&(i, _)| i >= from)
        .map(|(i, v)| (i - from, v))
        .collect()
}

impl Widget for CandleChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.candles.is_empty() {
            panel_block(self.title, self.focused, true, self.theme).render(area, buf);
            return;
        }

        let up_count = self
            .candles
            .iter()
            .filter(|c| c.direction == CandleDirection::Increasing)
            .count();
        let down_count = self.candles.len() - up_count;

        let title = format!(
            "{} | {} candles | {} up {} down",
            self.title,
            self.candles.len(),
            up_count,
            down_count,
        );
        let block = panel_block(&title, self.focused, false, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        // Reserve left margin for Y-axis labels (8 chars) and bottom for X axis (1 row)
        let label_width: u16 = 8;
        let plot_left = inner.x + label_width;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(label_width);
        let plot_height = inner.height.saturating_sub(1);

        if plot_width == 0 || plot_height == 0 {
            return;
        }

        let start = self.candles.len().saturating_sub(plot_width as usize);
        let visible = &self.candles[start..];

        let ma50 = aligned(self.ma50, self.candles.len(), start);
        let ma200 = aligned(self.ma200, self.candles.len(), start);

        // Price bounds over what is actually drawn
        let (y_min, y_max) = value_range(
            visible
                .iter()
                .flat_map(|c| [c.low, c.high])
                .chain(ma50.iter().chain(&ma200).map(|&(_, v)| v)),
        )
        .unwrap_or((0.0, 1.0));
        let [y_lower, y_upper] = padded_bounds(y_min, y_max);

        // Y-axis labels
        let y_labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
        let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (label_val, y_pos) in y_labels.iter().zip(y_positions.iter()) {
            let label = format!("{:>7.1}", label_val);
            let style = Style::default().fg(self.theme.muted);
            buf.set_string(inner.x, plot_top + y_pos, &label, style);
        }

        for (i, candle) in visible.iter().enumerate() {
            let x = plot_left + i as u16;
            if x >= inner.right() {
                break;
            }

            let style = Style::default().fg(self.theme.candle_color(candle.direction));

            let high_y = self.price_to_y(candle.high, y_lower, y_upper, plot_height);
            let low_y = self.price_to_y(candle.low, y_lower, y_upper, plot_height);
            let body_top = candle.open.max(candle.close);
            let body_bot = candle.open.min(candle.close);
            let body_top_y = self.price_to_y(body_top, y_lower, y_upper, plot_height);
            let body_bot_y = self.price_to_y(body_bot, y_lower, y_upper, plot_height);

            // Upper wick
            for y in high_y..body_top_y {
                buf.set_string(x, plot_top + y, "|", style);
            }

            // Body: full block when increasing, dark shade when decreasing
            let body_char = match candle.direction {
                CandleDirection::Increasing => "\u{2588}",
                CandleDirection::Decreasing => "\u{2593}",
            };
            for y in body_top_y..=body_bot_y {
                buf.set_string(x, plot_top + y, body_char, style);
            }

            // Lower wick
            for y in (body_bot_y + 1)..=low_y {
                buf.set_string(x, plot_top + y, "|", style);
            }
        }

        // MA overlays on top of the candles
        for (points, color) in [(&ma200, self.theme.neutral), (&ma50, self.theme.warning)] {
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            for &(i, v) in points.iter() {
                let x = plot_left + i as u16;
                if x >= inner.right() {
                    continue;
                }
                let y = self.price_to_y(v, y_lower, y_upper, plot_height);
                buf.set_string(x, plot_top + y, "\u{2022}", style);
            }
        }

        // Bottom row: date span and overlay legend
        let info_y = plot_top + plot_height;
        let (first, last) = (visible[0].date, visible[visible.len() - 1].date);
        let mut x = plot_left;
        for (text, color) in [
            (format!("{first} .. {last}  "), self.theme.muted),
            (format!("\u{2022} {}  ", self.ma50.name), self.theme.warning),
            (format!("\u{2022} {}", self.ma200.name), self.theme.neutral),
        ] {
            if x >= inner.right() {
                break;
            }
            let (next_x, _) = buf.set_stringn(
                x,
                info_y,
                &text,
                (inner.right() - x) as usize,
                Style::default().fg(color),
            );
            x = next_x;
        }
    }
}

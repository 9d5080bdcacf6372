//! Parrot/neon theme tokens for the StockDash TUI
//!
//! Dark background, neon accents, high contrast.
//!
//! # Color Palette
//! - **Background**: Deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, close price line)
//! - **Positive**: Neon green (increasing candles, positive sentiment)
//! - **Negative**: Hot pink (decreasing candles, negative sentiment)
//! - **Warning**: Neon orange (MA-50 overlay, status warnings)
//! - **Neutral**: Cool purple (neutral sentiment, MA-200 overlay)
//! - **Muted**: Steel blue (axes, hints, undefined heatmap cells)
//!
//! Sentiment colors are fixed per label so the volume bars, scatter points
//! and distribution bars always agree.

use ratatui::style::{Color, Modifier, Style};

use stockdash_core::projection::CandleDirection;
use stockdash_core::Sentiment;

/// Parrot/neon theme for the dashboard widgets
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, close price)
    pub accent: Color,
    /// Neon green (increasing, positive)
    pub positive: Color,
    /// Hot pink (decreasing, negative)
    pub negative: Color,
    /// Neon orange (short MA, warnings)
    pub warning: Color,
    /// Cool purple (long MA, neutral)
    pub neutral: Color,
    /// Steel blue (muted text, axes)
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// One fixed color per sentiment label.
    pub fn sentiment_color(&self, sentiment: Sentiment) -> Color {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn candle_color(&self, direction: CandleDirection) -> Color {
        match direction {
            CandleDirection::Increasing => self.positive,
            CandleDirection::Decreasing => self.negative,
        }
    }

    /// Diverging scale for a correlation coefficient: pink at -1, background
    /// at 0, cyan at +1. Undefined cells use the muted color.
    pub fn correlation_color(&self, r: Option<f64>) -> Color {
        let Some(r) = r else {
            return self.muted;
        };
        let r = r.clamp(-1.0, 1.0);
        let mid = (60, 60, 66);
        if r >= 0.0 {
            blend(mid, (0, 200, 200), r)
        } else {
            blend(mid, (220, 20, 130), -r)
        }
    }
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> Color {
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

// ── Style shortcuts for frame-level rendering ────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn neutral() -> Style {
    Style::default().fg(Theme::default().neutral)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        Style::default().fg(Theme::default().text_secondary)
    }
}

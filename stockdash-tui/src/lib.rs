//! StockDash TUI - terminal dashboard over one prepared price dataset
//!
//! Six panels driven by a single `ViewBundle`:
//! - Price (line or candlestick, with MA-50 / MA-200)
//! - Summary statistics
//! - Volume bars by sentiment
//! - Volume vs close scatter
//! - Correlation heatmap
//! - Sentiment distribution

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;

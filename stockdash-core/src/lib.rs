//! StockDash Core — data preparation and view projection for the price dashboard.
//!
//! This crate holds everything the dashboard computes:
//! - Domain types (price records, derived rows, sentiment labels, view selection)
//! - CSV loading with structured errors
//! - One-shot data preparation (date sort, MA-50/MA-200, seeded sentiment labels)
//! - View projection: one pure call from a selection to all six chart payloads
//! - CSV export of prepared rows
//! - Dashboard configuration (TOML)
//!
//! Rendering lives in `stockdash-tui`; nothing here knows about terminals.

pub mod config;
pub mod data;
pub mod dataset;
pub mod domain;
pub mod export;
pub mod indicators;
pub mod projection;
pub mod rng;
pub mod stats;

pub use config::{ConfigError, DashboardConfig};
pub use data::{load_csv, load_dataset, prepare, prepare_seeded, read_csv, DataLoadError};
pub use dataset::Dataset;
pub use domain::{ChartType, DerivedRecord, PriceRecord, Sentiment, ViewSelection};
pub use export::write_rows_csv;
pub use projection::{project, ViewBundle};

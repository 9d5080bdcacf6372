//! Data preparation: CSV ingestion and the one-shot derive step.
//!
//! `load_dataset` is the startup entry point used by both binaries:
//! read the CSV, sort by date, compute MA-50 / MA-200, attach seeded
//! sentiment labels. The result is never rebuilt afterwards.

pub mod csv_loader;
pub mod prepare;

use std::path::Path;

pub use csv_loader::{load_csv, read_csv, DataLoadError, REQUIRED_COLUMNS};
pub use prepare::{prepare, prepare_seeded, MA200_WINDOW, MA50_WINDOW};

use crate::dataset::Dataset;

/// Load a CSV file and prepare it with a seeded generator.
pub fn load_dataset(path: impl AsRef<Path>, seed: u64) -> Result<Dataset, DataLoadError> {
    let rows = load_csv(path)?;
    Ok(prepare_seeded(rows, seed))
}

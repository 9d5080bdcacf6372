//! One-shot derive step: date sort, moving averages, sentiment labels.

use rand::Rng;
use tracing::info;

use crate::dataset::Dataset;
use crate::domain::{DerivedRecord, PriceRecord};
use crate::indicators::Sma;
use crate::rng::{draw_sentiments, seeded_rng};

pub const MA50_WINDOW: usize = 50;
pub const MA200_WINDOW: usize = 200;

/// Build the prepared dataset from raw rows.
///
/// Rows are stably sorted by date first, so duplicate dates keep their input
/// order and the moving-average windows follow date order. Labels are drawn
/// from `rng` one per row, after sorting.
pub fn prepare<R: Rng + ?Sized>(mut rows: Vec<PriceRecord>, rng: &mut R) -> Dataset {
    rows.sort_by_key(|r| r.date);

    let closes: Vec<f64> = rows.iter().map(|r| r.close).collect();
    let ma50 = Sma::new(MA50_WINDOW).compute(&closes);
    let ma200 = Sma::new(MA200_WINDOW).compute(&closes);
    let sentiments = draw_sentiments(rng, rows.len());

    let records: Vec<DerivedRecord> = rows
        .into_iter()
        .zip(ma50)
        .zip(ma200)
        .zip(sentiments)
        .map(|(((record, ma50), ma200), sentiment)| DerivedRecord {
            record,
            ma50,
            ma200,
            sentiment,
        })
        .collect();

    info!(rows = records.len(), "prepared dataset");
    Dataset::from_sorted(records)
}

/// `prepare` with a `StdRng` seeded from `seed`.
pub fn prepare_seeded(rows: Vec<PriceRecord>, seed: u64) -> Dataset {
    prepare(rows, &mut seeded_rng(seed))
}

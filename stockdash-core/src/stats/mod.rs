//! Aggregates behind the summary text, heatmap, and sentiment chart.

pub mod correlation;
pub mod summary;
pub mod tally;

pub use correlation::{pearson, CorrelationMatrix};
pub use summary::{format_thousands, SummaryStats, NO_DATA_MESSAGE};
pub use tally::{tally, SentimentCount};

//! Domain types — the row model and the user's view selection.

mod record;
mod selection;
mod sentiment;

pub use record::{DerivedRecord, PriceRecord};
pub use selection::{ChartType, ViewSelection};
pub use sentiment::Sentiment;

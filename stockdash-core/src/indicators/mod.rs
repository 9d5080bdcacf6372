//! Rolling indicators over the date-ordered close series.

pub mod sma;

pub use sma::Sma;

//! Simple Moving Average (SMA).
//!
//! Mean of the current value and the `period - 1` values before it.
//! Windows count rows, not calendar days: a missing session does not widen
//! the window. The first `period - 1` outputs are `None`.

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    /// Index of the first defined output.
    pub fn lookback(&self) -> usize {
        self.period - 1
    }

    /// Each window is summed from scratch in row order, so the output equals
    /// the plain mean of that slice with no drift from a running sum.
    pub fn compute(&self, values: &[f64]) -> Vec<Option<f64>> {
        let n = values.len();
        let mut result = vec![None; n];

        for (i, slot) in result.iter_mut().enumerate().skip(self.lookback()) {
            let window = &values[i + 1 - self.period..=i];
            *slot = Some(window.iter().sum::<f64>() / self.period as f64);
        }

        result
    }
}

//! Pairwise Pearson correlation over optional-valued columns.
//!
//! Each pair of columns uses only the rows where both values are defined.
//! A coefficient is undefined (`None`) when fewer than two such rows exist or
//! either side has zero variance over them. The diagonal follows the same
//! rule: a constant column gets `None`, not 1.0.

use serde::Serialize;

/// Pearson correlation of two aligned columns, skipping rows where either is missing.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }
    let (x0, y0) = pairs[0];
    if pairs.iter().all(|&(x, _)| x == x0) || pairs.iter().all(|&(_, y)| y == y0) {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for &(x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some((sxy / denom).clamp(-1.0, 1.0))
}

/// Square, symmetric correlation matrix with row/column labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlate every pair of named columns. Columns must be equally long.
    pub fn compute(columns: &[(&str, Vec<Option<f64>>)]) -> Self {
        let k = columns.len();
        let mut values = vec![vec![None; k]; k];

        for i in 0..k {
            values[i][i] = pearson(&columns[i].1, &columns[i].1).map(|_| 1.0);
            for j in (i + 1)..k {
                let r = pearson(&columns[i].1, &columns[j].1);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            labels: columns.iter().map(|(name, _)| name.to_string()).collect(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied().flatten()
    }

    /// Look up a coefficient by column names.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        self.get(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn perfectly_correlated_columns() {
        let close = col(&[100.0, 110.0, 105.0, 120.0]);
        let m = CorrelationMatrix::compute(&[("close", close.clone()), ("ma50", close)]);
        assert_eq!(m.len(), 2);
        assert!((m.get(0, 1).unwrap() - 1.0).abs() < 1e-12);
        assert!((m.get(1, 0).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(1, 1), Some(1.0));
    }

    #[test]
    fn perfectly_anticorrelated() {
        let (a, b) = (col(&[1.0, 2.0, 3.0]), col(&[6.0, 4.0, 2.0]));
        let r = pearson(&a, &b).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_value() {
        // x = 1..5, y = [2, 4, 5, 4, 5] → r = 0.7745966692
        let (x, y) = (col(&[1.0, 2.0, 3.0, 4.0, 5.0]), col(&[2.0, 4.0, 5.0, 4.0, 5.0]));
        let r = pearson(&x, &y).unwrap();
        assert!((r - 0.774_596_669_2).abs() < 1e-9);
    }

    #[test]
    fn zero_variance_is_undefined() {
        let flat = col(&[0.1, 0.1, 0.1]);
        let moving = col(&[1.0, 2.0, 3.0]);
        assert_eq!(pearson(&flat, &moving), None);
        let m = CorrelationMatrix::compute(&[("flat", flat), ("moving", moving)]);
        assert_eq!(m.get(0, 0), None);
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 1), Some(1.0));
    }

    #[test]
    fn missing_values_are_skipped_pairwise() {
        let x = vec![None, None, Some(1.0), Some(2.0), Some(3.0)];
        let y = col(&[50.0, -50.0, 10.0, 20.0, 30.0]);
        assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fewer_than_two_pairs_is_undefined() {
        let x = vec![None, Some(1.0), None];
        let y = col(&[1.0, 2.0, 3.0]);
        assert_eq!(pearson(&x, &y), None);
        assert_eq!(pearson(&col(&[1.0]), &col(&[2.0])), None);
    }

    #[test]
    fn lookup_by_name() {
        let m = CorrelationMatrix::compute(&[
            ("a", col(&[1.0, 2.0, 3.0])),
            ("b", col(&[3.0, 2.0, 1.0])),
        ]);
        assert!((m.between("a", "b").unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(m.between("a", "zzz"), None);
    }

    #[test]
    fn empty_matrix() {
        let m = CorrelationMatrix::compute(&[]);
        assert!(m.is_empty());
        assert_eq!(m.get(0, 0), None);
    }
}

//! Labelled spin configurations for the phase classifier.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{ChallengeResult, InputError};

/// Spin configurations with ±1 phase labels.
#[derive(Debug, Clone, PartialEq)]
pub struct IsingDataset {
    /// One row of 0/1 spins per sample.
    pub configs: Vec<Vec<u8>>,
    /// `1` (ordered) or `-1` (disordered) per sample.
    pub labels: Vec<i8>,
}

impl IsingDataset {
    /// Build from integer rows whose last entry is the label.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> ChallengeResult<Self> {
        let mut configs = Vec::with_capacity(rows.len());
        let mut labels = Vec::with_capacity(rows.len());
        for (r, row) in rows.into_iter().enumerate() {
            let width = row.len();
            let Some((&label, spins)) = row.split_last() else {
                return Err(InputError::Empty.into());
            };
            if spins.is_empty() {
                return Err(InputError::OutOfRange {
                    position: r * width,
                    value: label.to_string(),
                    reason: "each row needs at least one spin before its label",
                }
                .into());
            }
            let label = match label {
                1 => 1,
                -1 => -1,
                other => {
                    return Err(InputError::OutOfRange {
                        position: r * width + width - 1,
                        value: other.to_string(),
                        reason: "labels must be 1 or -1",
                    }
                    .into());
                }
            };
            let spins = spins
                .iter()
                .enumerate()
                .map(|(i, &s)| match s {
                    0 | 1 => Ok(s as u8),
                    other => Err(InputError::OutOfRange {
                        position: r * width + i,
                        value: other.to_string(),
                        reason: "spins must be 0 or 1",
                    }),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            configs.push(spins);
            labels.push(label);
        }
        Ok(Self { configs, labels })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Check if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Spins per configuration.
    pub fn num_spins(&self) -> usize {
        self.configs.first().map_or(0, Vec::len)
    }
}

/// Mean of `(label − prediction)²`.
pub fn square_loss(labels: &[f64], predictions: &[f64]) -> f64 {
    let total: f64 = labels
        .iter()
        .zip(predictions)
        .map(|(l, p)| (l - p).powi(2))
        .sum();
    total / labels.len() as f64
}

/// Fraction of predictions equal to their label.
pub fn accuracy(labels: &[i8], predictions: &[i8]) -> f64 {
    let hits = labels
        .iter()
        .zip(predictions)
        .filter(|(l, p)| l == p)
        .count();
    hits as f64 / labels.len() as f64
}

/// Standard normal sample by the Box-Muller transform.
pub fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = 1.0 - rng.r#gen::<f64>();
    let u2: f64 = rng.r#gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_from_rows() {
        let data = IsingDataset::from_rows(vec![vec![1, 1, 1, 1], vec![0, 1, 0, -1]]).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.num_spins(), 3);
        assert_eq!(data.labels, vec![1, -1]);
    }

    #[test]
    fn test_from_rows_rejects_label_only_rows() {
        let err = IsingDataset::from_rows(vec![vec![0, 1, 1], vec![-1]]).unwrap_err();
        assert!(err.to_string().contains("at least one spin"));
    }

    #[test]
    fn test_from_rows_rejects_bad_label() {
        let err = IsingDataset::from_rows(vec![vec![1, 0, 2]]).unwrap_err();
        assert!(err.to_string().contains("labels must be 1 or -1"));
    }

    #[test]
    fn test_losses() {
        assert_eq!(square_loss(&[1.0, -1.0], &[0.0, -1.0]), 0.5);
        assert_eq!(accuracy(&[1, -1, 1, 1], &[1, 1, 1, -1]), 0.5);
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = StdRng::seed_from_u64(0);
        let xs: Vec<f64> = (0..20_000).map(|_| standard_normal(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
        assert!(mean.abs() < 0.05);
        assert!((var - 1.0).abs() < 0.05);
    }
}

//! Ising on the cake: classify spin configurations as ordered or
//! disordered with a two-layer variational circuit.

use std::fmt;

use qforge_sim::{Device, Observable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use super::Exercise;
use crate::circuits::qml::{ising_classifier, num_weights};
use crate::create_progress_bar;
use crate::error::{ChallengeResult, InputError};
use crate::input;
use crate::optimizers::{NesterovMomentum, Optimizer};
use crate::problems::ising::{IsingDataset, accuracy, square_loss, standard_normal};

/// Predicted labels, `sign(⟨Z0⟩ + bias)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Predictions(pub Vec<i8>);

impl fmt::Display for Predictions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&text.join(","))
    }
}

/// Trained weights: rotation angles followed by the bias.
#[derive(Debug, Clone)]
pub struct Classifier {
    params: Vec<f64>,
    num_wires: usize,
}

impl Classifier {
    /// Wrap flat parameters (weights then bias).
    pub fn new(params: Vec<f64>, num_wires: usize) -> Self {
        Self { params, num_wires }
    }

    /// Raw model output `⟨Z0⟩ + bias` for one configuration.
    pub fn score(&self, device: &Device, config: &[u8]) -> ChallengeResult<f64> {
        model(device, &self.params, config)
    }

    /// Labels in {−1, 0, 1}.
    pub fn predict(&self, device: &Device, configs: &[Vec<u8>]) -> ChallengeResult<Vec<i8>> {
        configs
            .iter()
            .map(|c| Ok(sign(self.score(device, c)?)))
            .collect()
    }

    /// Number of wires the classifier expects.
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

fn model(device: &Device, params: &[f64], config: &[u8]) -> ChallengeResult<f64> {
    let (weights, bias) = params.split_at(params.len().saturating_sub(1));
    let circuit = ising_classifier(config, weights)?;
    let z0 = device.expval(&circuit, &Observable::z(0))?;
    Ok(z0 + bias.first().copied().unwrap_or(0.0))
}

/// Nesterov momentum over random mini-batches.
#[derive(Debug, Clone)]
pub struct IsingRunner {
    /// Expected number of rows in the input.
    pub rows: usize,
    /// Number of `U3` + CNOT-ring layers.
    pub layers: usize,
    /// Optimizer step size.
    pub stepsize: f64,
    /// Samples per step.
    pub batch_size: usize,
    /// Number of optimizer steps.
    pub iterations: usize,
    /// Standard deviation of the initial weights.
    pub weight_scale: f64,
    /// Seed for weights and batches.
    pub seed: u64,
    /// Show a progress bar.
    pub progress: bool,
}

impl Default for IsingRunner {
    fn default() -> Self {
        Self {
            rows: 250,
            layers: 2,
            stepsize: 0.15,
            batch_size: 5,
            iterations: 192,
            weight_scale: 0.01,
            seed: 0,
            progress: false,
        }
    }
}

impl IsingRunner {
    /// Set the number of input rows.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of optimizer steps.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Show a progress bar.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Train on `data`.
    pub fn train(&self, device: &Device, data: &IsingDataset) -> ChallengeResult<Classifier> {
        if data.is_empty() {
            return Err(InputError::Empty.into());
        }
        let n = data.num_spins();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut params: Vec<f64> = (0..num_weights(n, self.layers))
            .map(|_| self.weight_scale * standard_normal(&mut rng))
            .collect();
        params.push(0.0);

        let mut optimizer = NesterovMomentum::new(self.stepsize);
        let pb = create_progress_bar(self.iterations as u64, "training", self.progress);
        for it in 0..self.iterations {
            let batch: Vec<usize> = (0..self.batch_size)
                .map(|_| rng.gen_range(0..data.len()))
                .collect();
            let labels: Vec<f64> = batch.iter().map(|&i| f64::from(data.labels[i])).collect();
            let cost = |p: &[f64]| -> ChallengeResult<f64> {
                let predictions = batch
                    .iter()
                    .map(|&i| model(device, p, &data.configs[i]))
                    .collect::<ChallengeResult<Vec<f64>>>()?;
                Ok(square_loss(&labels, &predictions))
            };
            params = optimizer.step(cost, &params)?;
            pb.inc(1);
            if it % 16 == 0 {
                debug!(iteration = it, loss = cost(&params)?, "training step");
            }
        }
        pb.finish_and_clear();
        Ok(Classifier::new(params, n))
    }
}

impl Exercise for IsingRunner {
    const NAME: &'static str = "ising-classifier";
    type Input = IsingDataset;
    type Output = Predictions;

    fn parse(&self, line: &str) -> ChallengeResult<IsingDataset> {
        IsingDataset::from_rows(input::int_rows(line, self.rows)?)
    }

    fn run(&self, data: &IsingDataset) -> ChallengeResult<Predictions> {
        if data.is_empty() {
            return Err(InputError::Empty.into());
        }
        let device = Device::new("default.qubit", data.num_spins())?;
        let classifier = self.train(&device, data)?;
        let predictions = classifier.predict(&device, &data.configs)?;
        debug!(
            accuracy = accuracy(&data.labels, &predictions),
            "training accuracy"
        );
        Ok(Predictions(predictions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChallengeError;

    #[test]
    fn test_predictions_display() {
        assert_eq!(Predictions(vec![1, -1, 1]).to_string(), "1,-1,1");
    }

    #[test]
    fn test_zero_weights_score() {
        // No rotation: Z0 of the permuted basis state, plus the bias.
        let device = Device::new("default.qubit", 2).unwrap();
        let mut params = vec![0.0; num_weights(2, 2)];
        params.push(0.25);
        let classifier = Classifier::new(params, 2);
        let score = classifier.score(&device, &[0, 0]).unwrap();
        assert!((score - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_runner_output_shape() {
        let line = "0,0,0,1,1,1,1,1,0,1,0,-1,1,0,0,-1";
        let out = IsingRunner::default()
            .with_rows(4)
            .with_iterations(3)
            .solve(line)
            .unwrap();
        assert_eq!(out.0.len(), 4);
        assert!(out.0.iter().all(|p| [-1, 0, 1].contains(p)));
    }

    #[test]
    fn test_rows_without_spins_rejected() {
        let err = IsingRunner::default()
            .with_rows(4)
            .with_iterations(1)
            .solve("1,-1,1,-1")
            .unwrap_err();
        assert!(matches!(
            err,
            ChallengeError::Input(InputError::OutOfRange { position: 0, .. })
        ));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let empty = IsingDataset {
            configs: Vec::new(),
            labels: Vec::new(),
        };
        let runner = IsingRunner::default().with_iterations(1);
        assert!(matches!(
            runner.run(&empty),
            Err(ChallengeError::Input(InputError::Empty))
        ));

        let device = Device::new("default.qubit", 1).unwrap();
        assert!(matches!(
            runner.train(&device, &empty),
            Err(ChallengeError::Input(InputError::Empty))
        ));
    }
}

//! CHSH game: optimize the players' measurement angles for a partially
//! entangled shared state.

use std::f64::consts::PI;
use std::fmt;

use qforge_sim::Device;
use serde::Serialize;
use tracing::debug;

use super::Exercise;
use crate::circuits::{Round, chsh_circuit};
use crate::create_progress_bar;
use crate::error::{ChallengeError, ChallengeResult};
use crate::format::{float_repr, round_half_even};
use crate::input;
use crate::optimizers::{Adam, Optimizer};

/// Optimized winning probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinProbability {
    /// Probability rounded to five decimals.
    pub probability: f64,
    /// Final `[θ_A0, θ_A1, θ_B0, θ_B1]`.
    pub angles: [f64; 4],
}

impl fmt::Display for WinProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", float_repr(self.probability))
    }
}

/// Adam over the four angles, two steps per epoch with the second one
/// clipped to `[−2π, 2π]`.
#[derive(Debug, Clone)]
pub struct ChshRunner {
    /// Adam step size.
    pub stepsize: f64,
    /// Number of epochs.
    pub epochs: usize,
    /// Starting `[θ_A0, θ_A1, θ_B0, θ_B1]`.
    pub initial_angles: [f64; 4],
    /// Show a progress bar.
    pub progress: bool,
}

impl Default for ChshRunner {
    fn default() -> Self {
        Self {
            stepsize: 0.8,
            epochs: 100,
            initial_angles: [0.01; 4],
            progress: false,
        }
    }
}

impl ChshRunner {
    /// Set the Adam step size.
    pub fn with_stepsize(mut self, stepsize: f64) -> Self {
        self.stepsize = stepsize;
        self
    }

    /// Set the starting angles.
    pub fn with_initial_angles(mut self, angles: [f64; 4]) -> Self {
        self.initial_angles = angles;
        self
    }

    /// Set the number of epochs.
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Show a progress bar.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

/// Probability that the players win, averaged over the four rounds.
pub fn winning_probability(
    device: &Device,
    thetas: &[f64; 4],
    alpha: f64,
    beta: f64,
) -> ChallengeResult<f64> {
    let mut total = 0.0;
    for round in Round::ALL {
        let probs = device.probs(&chsh_circuit(thetas, round, alpha, beta)?, &[0, 1])?;
        for (index, p) in probs.iter().enumerate() {
            let (a, b) = ((index >> 1) as u8, (index & 1) as u8);
            if round.wins(a, b) {
                total += p;
            }
        }
    }
    Ok(total / 4.0)
}

fn as_angles(params: &[f64]) -> ChallengeResult<[f64; 4]> {
    params
        .try_into()
        .map_err(|_| ChallengeError::ParameterCount {
            expected: 4,
            got: params.len(),
        })
}

impl Exercise for ChshRunner {
    const NAME: &'static str = "chsh";
    type Input = [f64; 2];
    type Output = WinProbability;

    fn parse(&self, line: &str) -> ChallengeResult<[f64; 2]> {
        Ok(input::float_array::<2>(line)?)
    }

    fn run(&self, &[alpha, beta]: &[f64; 2]) -> ChallengeResult<WinProbability> {
        let device = Device::new("default.qubit", 2)?;
        let cost = |params: &[f64]| -> ChallengeResult<f64> {
            Ok(1.0 - winning_probability(&device, &as_angles(params)?, alpha, beta)?)
        };

        let mut optimizer = Adam::new(self.stepsize);
        let mut params = self.initial_angles.to_vec();
        let pb = create_progress_bar(self.epochs as u64, "CHSH epochs", self.progress);

        for epoch in 0..self.epochs {
            params = optimizer.step(cost, &params)?;
            params = optimizer
                .step(cost, &params)?
                .into_iter()
                .map(|p| p.clamp(-2.0 * PI, 2.0 * PI))
                .collect();
            debug!(epoch, ?params, "CHSH epoch");
            pb.inc(1);
        }
        pb.finish_and_clear();

        let angles = as_angles(&params)?;
        let probability = winning_probability(&device, &angles, alpha, beta)?;
        Ok(WinProbability {
            probability: round_half_even(probability, 5),
            angles,
        })
    }
}

//! Elitzur-Vaidman bomb tester with `n` bombs in a row.

use std::fmt;

use qforge_sim::{Device, Observable};
use serde::Serialize;
use tracing::debug;

use super::Exercise;
use crate::circuits::basics::beam_splitter;
use crate::create_progress_bar;
use crate::error::{ChallengeError, ChallengeResult};
use crate::format::float_repr;
use crate::input;

/// Outcome counts over all trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BombStatistics {
    /// Trials where no bomb exploded.
    pub unexploded: usize,
    /// Unexploded trials where the tester clicked.
    pub tested: usize,
    /// `tested / unexploded`.
    pub fraction: f64,
}

impl fmt::Display for BombStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", float_repr(self.fraction))
    }
}

/// One-shot measurements on a seeded single-wire device.
#[derive(Debug, Clone)]
pub struct BombTesterRunner {
    /// Number of trials.
    pub trials: usize,
    /// Sampling seed.
    pub seed: u64,
    /// Show a progress bar.
    pub progress: bool,
}

impl Default for BombTesterRunner {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: 0,
            progress: false,
        }
    }
}

impl BombTesterRunner {
    /// Set the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Show a progress bar.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl Exercise for BombTesterRunner {
    const NAME: &'static str = "bomb-tester";
    type Input = (f64, usize);
    type Output = BombStatistics;

    fn parse(&self, line: &str) -> ChallengeResult<(f64, usize)> {
        Ok(input::float_and_count(line)?)
    }

    fn run(&self, &(angle, bombs): &(f64, usize)) -> ChallengeResult<BombStatistics> {
        let mut device = Device::new("default.qubit", 1)?
            .with_shots(1)
            .with_seed(self.seed);
        let splitter = beam_splitter(angle)?;
        let z = Observable::z(0);
        let one_shot = |device: &mut Device| -> ChallengeResult<f64> {
            Ok(device
                .sample_observable(&splitter, &z)?
                .first()
                .copied()
                .unwrap_or(1.0))
        };

        let pb = create_progress_bar(self.trials as u64, "bomb trials", self.progress);
        let mut unexploded = 0;
        let mut tested = 0;
        for _ in 0..self.trials {
            let mut exploded = false;
            for _ in 0..bombs {
                if one_shot(&mut device)? == 1.0 {
                    exploded = true;
                    break;
                }
            }
            if !exploded {
                unexploded += 1;
                if one_shot(&mut device)? == -1.0 {
                    tested += 1;
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();
        debug!(unexploded, tested, "bomb trials finished");

        if unexploded == 0 {
            return Err(ChallengeError::NoUnexplodedBombs);
        }
        Ok(BombStatistics {
            unexploded,
            tested,
            fraction: tested as f64 / unexploded as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bombs_measures_splitter_directly() {
        // With n = 0 every trial reaches the tester: P(−1) = sin²(angle).
        let out = BombTesterRunner::default()
            .with_trials(4000)
            .solve("0.6,0")
            .unwrap();
        assert_eq!(out.unexploded, 4000);
        let expected = (0.6f64).sin().powi(2);
        assert!((out.fraction - expected).abs() < 0.03);
    }

    #[test]
    fn test_negative_count_runs_no_bombs() {
        let runner = BombTesterRunner::default().with_trials(500);
        let negative = runner.solve("0.6,-3").unwrap();
        assert_eq!(negative.unexploded, 500);
        assert_eq!(negative, runner.solve("0.6,0").unwrap());
    }

    #[test]
    fn test_zero_angle_never_tests() {
        let out = BombTesterRunner::default()
            .with_trials(200)
            .solve("0.0,0")
            .unwrap();
        assert_eq!(out.tested, 0);
        assert_eq!(out.to_string(), "0.0");
    }

    #[test]
    fn test_every_bomb_explodes() {
        // angle 0 keeps |0⟩, whose Z sample is always +1.
        let err = BombTesterRunner::default()
            .with_trials(50)
            .solve("0.0,3")
            .unwrap_err();
        assert!(matches!(err, ChallengeError::NoUnexplodedBombs));
    }

    #[test]
    fn test_seed_reproducible() {
        let a = BombTesterRunner::default().with_trials(300).solve("0.3,2").unwrap();
        let b = BombTesterRunner::default().with_trials(300).solve("0.3,2").unwrap();
        assert_eq!(a, b);
    }
}

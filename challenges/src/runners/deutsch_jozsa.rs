//! Deutsch-Jozsa strikes again: are four oracles all of one type?

use std::fmt;

use qforge_sim::Device;
use serde::Serialize;
use tracing::debug;

use super::Exercise;
use crate::circuits::{deutsch_jozsa_circuit, deutsch_jozsa_oracle};
use crate::error::ChallengeResult;
use crate::input;

/// How the four oracles split into constant and balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// All constant or all balanced, or a 3–1 split.
    #[serde(rename = "4 same")]
    FourSame,
    /// Two constant and two balanced.
    #[serde(rename = "2 and 2")]
    TwoAndTwo,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::FourSame => write!(f, "4 same"),
            Verdict::TwoAndTwo => write!(f, "2 and 2"),
        }
    }
}

/// One shot per oracle on a seeded 3-wire device.
#[derive(Debug, Clone, Default)]
pub struct DeutschJozsaRunner {
    /// Sampling seed.
    pub seed: u64,
}

impl DeutschJozsaRunner {
    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Exercise for DeutschJozsaRunner {
    const NAME: &'static str = "deutsch-jozsa";
    type Input = [u8; 8];
    type Output = Verdict;

    fn parse(&self, line: &str) -> ChallengeResult<Self::Input> {
        Ok(input::bit_array::<8>(line)?)
    }

    fn run(&self, controls: &[u8; 8]) -> ChallengeResult<Verdict> {
        let mut device = Device::new("default.qubit", 3)?
            .with_shots(1)
            .with_seed(self.seed);

        let mut constant = 0;
        for (k, pair) in controls.chunks_exact(2).enumerate() {
            let oracle = deutsch_jozsa_oracle([pair[0], pair[1]], k >= 2)?;
            let circuit = deutsch_jozsa_circuit(&oracle)?;
            let shots = device.sample(&circuit, &[0, 1])?;
            let is_constant = shots.first().is_some_and(|s| s.iter().all(|&b| b == 0));
            debug!(oracle = k, is_constant, "oracle classified");
            if is_constant {
                constant += 1;
            }
        }

        Ok(if constant == 2 {
            Verdict::TwoAndTwo
        } else {
            Verdict::FourSame
        })
    }
}

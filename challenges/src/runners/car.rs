//! Find the car: locate the marked door of four with two oracle queries.

use qforge_sim::Device;
use serde::Serialize;

use super::Exercise;
use crate::circuits::{car_oracle, car_probes};
use crate::error::{ChallengeError, ChallengeResult};
use crate::input;

/// Door index from the two probe samples (`[w0, w1, sol]` each).
pub fn decode_door(first: &[u8], second: &[u8]) -> ChallengeResult<u8> {
    match (first.get(..2), second.get(..2)) {
        (Some([0, 0]), Some([0, 0])) => Ok(3),
        (Some([0, 1]), Some([0, 0])) => Ok(0),
        (Some([0, 0]), Some([1, 0])) => Ok(2),
        (Some([0, 1]), Some([1, 0])) => Ok(1),
        _ => Err(ChallengeError::UndecodableProbe {
            first: first.to_vec(),
            second: second.to_vec(),
        }),
    }
}

/// Door number answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Door(pub u8);

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One shot of each probe on a seeded 3-wire device.
#[derive(Debug, Clone, Default)]
pub struct FindTheCarRunner {
    /// Sampling seed.
    pub seed: u64,
}

impl FindTheCarRunner {
    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Exercise for FindTheCarRunner {
    const NAME: &'static str = "find-the-car";
    type Input = [u8; 2];
    type Output = Door;

    fn parse(&self, line: &str) -> ChallengeResult<[u8; 2]> {
        Ok(input::bit_array::<2>(line)?)
    }

    fn run(&self, bits: &[u8; 2]) -> ChallengeResult<Door> {
        let mut device = Device::new("default.qubit", 3)?
            .with_shots(1)
            .with_seed(self.seed);
        let oracle = car_oracle(*bits)?;
        let [first, second] = car_probes(&oracle)?;
        let a = device.sample(&first, &[])?.concat();
        let b = device.sample(&second, &[])?.concat();
        decode_door(&a, &b).map(Door)
    }
}

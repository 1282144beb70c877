//! Tardigrade masquerade: entanglement of qubit B with and without a
//! tardigrade entangled into the pair.

use std::fmt;

use qforge_sim::{Device, second_renyi_entropy};
use serde::Serialize;

use super::Exercise;
use crate::circuits::{tardigrade_free_state, tardigrade_state};
use crate::error::ChallengeResult;
use crate::format::float_repr;
use crate::input;

/// Second Rényi entropies of the two scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entropies {
    /// Two-qubit state of A and B alone.
    pub without_tardigrade: f64,
    /// Qubit B once the tardigrade is present.
    pub with_tardigrade: f64,
}

impl fmt::Display for Entropies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            float_repr(self.without_tardigrade),
            float_repr(self.with_tardigrade)
        )
    }
}

/// Exact density matrices on a 3-wire device.
#[derive(Debug, Clone, Copy, Default)]
pub struct TardigradeRunner;

impl Exercise for TardigradeRunner {
    const NAME: &'static str = "tardigrade";
    type Input = f64;
    type Output = Entropies;

    fn parse(&self, line: &str) -> ChallengeResult<f64> {
        let [theta] = input::float_array::<1>(line)?;
        Ok(theta)
    }

    fn run(&self, &theta: &f64) -> ChallengeResult<Entropies> {
        let device = Device::new("default.qubit", 3)?;
        let mu = device.density_matrix(&tardigrade_free_state()?, &[0, 1])?;
        let rho = device.density_matrix(&tardigrade_state(theta)?, &[1])?;
        Ok(Entropies {
            without_tardigrade: second_renyi_entropy(&mu),
            with_tardigrade: second_renyi_entropy(&rho),
        })
    }
}

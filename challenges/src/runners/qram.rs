//! Building QRAM: load eight angles into a superposition of addresses.

use qforge_sim::Device;

use super::{Exercise, FloatList};
use crate::circuits::qram::{ADDRESSES, qram_circuit};
use crate::error::ChallengeResult;
use crate::format::round_half_even;
use crate::input;

/// Exact state on a 4-wire device.
#[derive(Debug, Clone, Copy, Default)]
pub struct QramRunner;

impl Exercise for QramRunner {
    const NAME: &'static str = "qram";
    type Input = [f64; ADDRESSES];
    /// Real parts of the 16 amplitudes, rounded to six decimals.
    type Output = FloatList;

    fn parse(&self, line: &str) -> ChallengeResult<[f64; ADDRESSES]> {
        Ok(input::float_array::<ADDRESSES>(line)?)
    }

    fn run(&self, thetas: &[f64; ADDRESSES]) -> ChallengeResult<FloatList> {
        let device = Device::new("default.qubit", 4)?;
        let state = device.state(&qram_circuit(thetas)?)?;
        Ok(FloatList(
            state.iter().map(|a| round_half_even(a.re, 6)).collect(),
        ))
    }
}

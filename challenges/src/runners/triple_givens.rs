//! Triple Givens: single, double and triple excitations of three
//! electrons in six spin orbitals.

use qforge_sim::Device;

use super::{Exercise, FloatList};
use crate::circuits::triple_givens_circuit;
use crate::error::ChallengeResult;
use crate::format::round_half_even;
use crate::input;

/// Exact probabilities on a 6-wire device.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripleGivensRunner;

impl Exercise for TripleGivensRunner {
    const NAME: &'static str = "triple-givens";
    type Input = [f64; 3];
    /// Basis-state probabilities rounded to six decimals.
    type Output = FloatList;

    fn parse(&self, line: &str) -> ChallengeResult<[f64; 3]> {
        Ok(input::float_array::<3>(line)?)
    }

    fn run(&self, &[alpha, beta, gamma]: &[f64; 3]) -> ChallengeResult<FloatList> {
        let device = Device::new("default.qubit", 6)?;
        let probs = device.probs(&triple_givens_circuit(alpha, beta, gamma)?, &[])?;
        Ok(FloatList(
            probs.into_iter().map(|p| round_half_even(p, 6)).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_angles_keep_reference() {
        let out = TripleGivensRunner.run(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(out.0.len(), 64);
        assert_eq!(out.0[0b111000], 1.0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let out = TripleGivensRunner.solve("0.3,0.7,1.1").unwrap();
        let total: f64 = out.0.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_only_three_electron_states() {
        let out = TripleGivensRunner.run(&[0.4, 0.9, 1.3]).unwrap();
        for (index, &p) in out.0.iter().enumerate() {
            if p > 0.0 {
                assert_eq!(index.count_ones(), 3);
            }
        }
    }

    #[test]
    fn test_pure_triple_rotation() {
        // Only γ acts: |111000⟩ ↔ |000111⟩ with weights cos², sin² of γ/2.
        let gamma: f64 = 1.0;
        let out = TripleGivensRunner.run(&[0.0, 0.0, gamma]).unwrap();
        assert_relative_eq!(out.0[0b111000], round_half_even((gamma / 2.0).cos().powi(2), 6));
        assert_relative_eq!(out.0[0b000111], round_half_even((gamma / 2.0).sin().powi(2), 6));
    }
}

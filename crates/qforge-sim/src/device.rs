//! Simulated device: a register size, an optional shot count and a seeded RNG.

use nalgebra::DMatrix;
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use qforge_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::observable::Observable;
use crate::statevector::Statevector;

/// Largest register the statevector engine accepts.
pub const MAX_QUBITS: usize = 20;

/// A simulated quantum device.
///
/// Analytic quantities (`state`, `probs`, `expval`, `density_matrix`) are exact
/// regardless of the shot count. Sampling needs shots and draws from the
/// device RNG, so two devices with the same seed produce the same samples.
#[derive(Debug, Clone)]
pub struct Device {
    name: String,
    num_wires: usize,
    shots: Option<usize>,
    rng: StdRng,
}

impl Device {
    /// Create an analytic device with `num_wires` wires seeded with 0.
    pub fn new(name: impl Into<String>, num_wires: usize) -> SimResult<Self> {
        let name = name.into();
        if num_wires > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                circuit: name,
                needed: num_wires,
                available: MAX_QUBITS,
            });
        }
        Ok(Self {
            name,
            num_wires,
            shots: None,
            rng: StdRng::seed_from_u64(0),
        })
    }

    /// Set the shot count used by sampling.
    #[must_use]
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = Some(shots);
        self
    }

    /// Reseed the sampling RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of wires.
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// Configured shot count.
    pub fn shots(&self) -> Option<usize> {
        self.shots
    }

    /// Execute `circuit` and return the final state.
    #[instrument(skip(self, circuit), fields(device = %self.name, circuit = circuit.name()))]
    pub fn execute(&self, circuit: &Circuit) -> SimResult<Statevector> {
        debug!(
            "Simulating {} ops on {} wires",
            circuit.num_ops(),
            self.num_wires
        );
        Statevector::from_circuit(circuit, self.num_wires)
    }

    /// Final state amplitudes.
    pub fn state(&self, circuit: &Circuit) -> SimResult<Vec<Complex64>> {
        Ok(self.execute(circuit)?.into_amplitudes())
    }

    /// Marginal probabilities of `wires`; all wires when `wires` is empty.
    pub fn probs(&self, circuit: &Circuit, wires: &[usize]) -> SimResult<Vec<f64>> {
        let sv = self.execute(circuit)?;
        if wires.is_empty() {
            Ok(sv.probabilities())
        } else {
            sv.marginal_probabilities(wires)
        }
    }

    /// Exact expectation value of `observable`.
    pub fn expval(&self, circuit: &Circuit, observable: &Observable) -> SimResult<f64> {
        observable.expectation(&self.execute(circuit)?)
    }

    /// Reduced density matrix of `wires`.
    pub fn density_matrix(&self, circuit: &Circuit, wires: &[usize]) -> SimResult<DMatrix<Complex64>> {
        self.execute(circuit)?.reduced_density_matrix(wires)
    }

    /// One row of bits per shot, `wires[0]` first in each row.
    pub fn sample(&mut self, circuit: &Circuit, wires: &[usize]) -> SimResult<Vec<Vec<u8>>> {
        let shots = self.require_shots()?;
        let sv = self.execute(circuit)?;
        let all: Vec<usize>;
        let wires = if wires.is_empty() {
            all = (0..self.num_wires).collect();
            &all
        } else {
            wires
        };
        Ok((0..shots)
            .map(|_| {
                let index = sv.sample_index(&mut self.rng);
                sv.bits_of(index, wires)
            })
            .collect())
    }

    /// One eigenvalue of `observable` per shot.
    pub fn sample_observable(&mut self, circuit: &Circuit, observable: &Observable) -> SimResult<Vec<f64>> {
        use rand::Rng;

        let shots = self.require_shots()?;
        let sv = self.execute(circuit)?;
        let outcomes = observable.outcomes(&sv)?;
        Ok((0..shots)
            .map(|_| {
                let r: f64 = self.rng.r#gen();
                let mut cumulative = 0.0;
                for o in &outcomes {
                    cumulative += o.probability;
                    if r < cumulative {
                        return o.value;
                    }
                }
                outcomes.last().map_or(0.0, |o| o.value)
            })
            .collect())
    }

    fn require_shots(&self) -> SimResult<usize> {
        self.shots
            .ok_or_else(|| SimError::ShotsRequired(self.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qforge_ir::QubitId;

    #[test]
    fn test_too_many_wires() {
        assert!(matches!(
            Device::new("big", MAX_QUBITS + 1),
            Err(SimError::TooManyQubits { .. })
        ));
    }

    #[test]
    fn test_sampling_needs_shots() {
        let mut dev = Device::new("analytic", 1).unwrap();
        let circuit = Circuit::with_size("c", 1);
        assert!(matches!(
            dev.sample(&circuit, &[0]),
            Err(SimError::ShotsRequired(_))
        ));
    }

    #[test]
    fn test_bell_samples_are_correlated() {
        let mut dev = Device::new("bell", 2).unwrap().with_shots(200).with_seed(7);
        let samples = dev.sample(&Circuit::bell().unwrap(), &[0, 1]).unwrap();
        assert_eq!(samples.len(), 200);
        assert!(samples.iter().all(|row| row[0] == row[1]));
        assert!(samples.iter().any(|row| row[0] == 1));
        assert!(samples.iter().any(|row| row[0] == 0));
    }

    #[test]
    fn test_same_seed_same_samples() {
        let mut circuit = Circuit::with_size("h", 1);
        circuit.h(QubitId(0)).unwrap();
        let mut a = Device::new("a", 1).unwrap().with_shots(50).with_seed(3);
        let mut b = Device::new("b", 1).unwrap().with_shots(50).with_seed(3);
        assert_eq!(
            a.sample_observable(&circuit, &Observable::z(0)).unwrap(),
            b.sample_observable(&circuit, &Observable::z(0)).unwrap()
        );
    }

    #[test]
    fn test_circuit_on_larger_device() {
        let mut circuit = Circuit::with_size("x", 1);
        circuit.x(QubitId(0)).unwrap();
        let dev = Device::new("three", 3).unwrap();
        let probs = dev.probs(&circuit, &[]).unwrap();
        assert_relative_eq!(probs[0b100], 1.0);
        assert_relative_eq!(dev.expval(&circuit, &Observable::z(0)).unwrap(), -1.0);
    }
}

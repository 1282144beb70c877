//! Measurable observables.

use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::error::{SimError, SimResult};
use crate::hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
use crate::statevector::Statevector;

/// Something whose expectation value or eigenvalues can be measured.
#[derive(Debug, Clone, PartialEq)]
pub enum Observable {
    /// A weighted sum of Pauli strings.
    Pauli(Hamiltonian),
    /// A dense Hermitian matrix on `wires`, `wires[0]` most significant.
    Hermitian {
        /// The matrix, `2^k × 2^k` for `k` wires.
        matrix: DMatrix<Complex64>,
        /// Wires the matrix acts on.
        wires: Vec<usize>,
    },
}

/// One eigenvalue with the probability of observing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Eigenvalue.
    pub value: f64,
    /// Born probability.
    pub probability: f64,
}

impl Observable {
    /// Pauli-Z on one wire.
    pub fn z(wire: u32) -> Self {
        Observable::Pauli(Hamiltonian::from_terms(vec![HamiltonianTerm::z(wire, 1.0)]))
    }

    /// Pauli-X on one wire.
    pub fn x(wire: u32) -> Self {
        Observable::Pauli(Hamiltonian::from_terms(vec![HamiltonianTerm::x(wire, 1.0)]))
    }

    /// A single Pauli string with unit coefficient.
    pub fn pauli_string(pauli: PauliString) -> Self {
        Observable::Pauli(Hamiltonian::from_terms(vec![HamiltonianTerm::new(1.0, pauli)]))
    }

    /// A dense Hermitian observable; the matrix must match the wire count.
    pub fn hermitian(matrix: DMatrix<Complex64>, wires: Vec<usize>) -> SimResult<Self> {
        let dim = 1usize << wires.len();
        if matrix.nrows() != dim || matrix.ncols() != dim {
            return Err(SimError::DimensionMismatch {
                expected: dim,
                got: matrix.nrows(),
            });
        }
        Ok(Observable::Hermitian { matrix, wires })
    }

    /// Exact expectation value in `state`.
    pub fn expectation(&self, state: &Statevector) -> SimResult<f64> {
        match self {
            Observable::Pauli(h) => state.expectation(h),
            Observable::Hermitian { matrix, wires } => state.expectation_matrix(matrix, wires),
        }
    }

    /// Wires the observable acts on, ascending for Pauli sums.
    pub fn wires(&self) -> Vec<usize> {
        match self {
            Observable::Pauli(h) => {
                let mut wires: Vec<usize> = h
                    .terms()
                    .iter()
                    .flat_map(|t| t.pauli.ops().iter().map(|(q, _)| *q as usize))
                    .collect();
                wires.sort_unstable();
                wires.dedup();
                wires
            }
            Observable::Hermitian { wires, .. } => wires.clone(),
        }
    }

    /// Matrix of the observable restricted to [`Observable::wires`].
    pub fn local_matrix(&self) -> SimResult<DMatrix<Complex64>> {
        match self {
            Observable::Hermitian { matrix, .. } => Ok(matrix.clone()),
            Observable::Pauli(h) => {
                let wires = self.wires();
                let relabelled: Hamiltonian = h
                    .terms()
                    .iter()
                    .map(|t| {
                        let ops = t.pauli.ops().iter().map(|&(q, op)| {
                            let pos = wires.iter().position(|&w| w == q as usize).unwrap_or(0);
                            (u32::try_from(pos).unwrap_or(u32::MAX), op)
                        });
                        HamiltonianTerm::new(t.coeff, PauliString::from_ops(ops))
                    })
                    .collect();
                relabelled.to_matrix(wires.len())
            }
        }
    }

    /// Eigenvalues of the observable with their probabilities in `state`.
    ///
    /// Degenerate eigenvalues are reported separately; their probabilities
    /// add up to the weight of the eigenspace.
    pub fn outcomes(&self, state: &Statevector) -> SimResult<Vec<Outcome>> {
        // Single-wire Z has a diagonal fast path.
        if let Observable::Pauli(h) = self {
            if let [term] = h.terms() {
                if let [(q, PauliOp::Z)] = term.pauli.ops() {
                    let probs = state.marginal_probabilities(&[*q as usize])?;
                    return Ok(vec![
                        Outcome {
                            value: term.coeff,
                            probability: probs[0],
                        },
                        Outcome {
                            value: -term.coeff,
                            probability: probs[1],
                        },
                    ]);
                }
            }
        }

        let wires = self.wires();
        let rho = state.reduced_density_matrix(&wires)?;
        let eigen = self.local_matrix()?.symmetric_eigen();
        Ok(eigen
            .eigenvalues
            .iter()
            .enumerate()
            .map(|(k, &value)| {
                let v = eigen.eigenvectors.column(k);
                let probability = (v.adjoint() * &rho * v)[(0, 0)].re.max(0.0);
                Outcome { value, probability }
            })
            .collect())
    }
}

impl From<Hamiltonian> for Observable {
    fn from(h: Hamiltonian) -> Self {
        Observable::Pauli(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qforge_ir::{Circuit, QubitId};

    #[test]
    fn test_z_outcomes_after_ry() {
        let mut circuit = Circuit::with_size("ry", 1);
        circuit.ry(1.0, QubitId(0)).unwrap();
        let sv = Statevector::from_circuit(&circuit, 1).unwrap();

        let out = Observable::z(0).outcomes(&sv).unwrap();
        assert_relative_eq!(out[0].probability, (0.5f64).cos().powi(2), epsilon = 1e-12);
        assert_relative_eq!(out[1].value, -1.0);
    }

    #[test]
    fn test_x_outcomes_use_eigenbasis() {
        let mut circuit = Circuit::with_size("plus", 2);
        circuit.h(QubitId(1)).unwrap();
        let sv = Statevector::from_circuit(&circuit, 2).unwrap();

        let out = Observable::x(1).outcomes(&sv).unwrap();
        let plus: f64 = out
            .iter()
            .filter(|o| o.value > 0.0)
            .map(|o| o.probability)
            .sum();
        assert_relative_eq!(plus, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_hermitian_expectation_matches_pauli() {
        let sv = Statevector::from_circuit(&Circuit::bell().unwrap(), 2).unwrap();
        let zz = Observable::pauli_string(PauliString::zz([0, 1]));
        let dense = Observable::hermitian(zz.local_matrix().unwrap(), vec![0, 1]).unwrap();

        assert_relative_eq!(zz.expectation(&sv).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(dense.expectation(&sv).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hermitian_shape_checked() {
        let m = DMatrix::<Complex64>::identity(2, 2);
        assert!(Observable::hermitian(m, vec![0, 1]).is_err());
    }
}

//! Givens rotations beyond the built-in single and double excitations.

use num_complex::Complex64;
use qforge_ir::{Circuit, CustomGate, IrResult, QubitId};

/// Basis index of `|000111⟩`.
const TRIPLE_LOW: usize = 0b000111;
/// Basis index of `|111000⟩`.
const TRIPLE_HIGH: usize = 0b111000;

/// 64×64 triple-excitation rotation, row-major.
///
/// Identity except on `|000111⟩` and `|111000⟩`, where it is
/// `[[cos γ/2, sin γ/2], [−sin γ/2, cos γ/2]]`.
pub fn triple_excitation_matrix(gamma: f64) -> Vec<Complex64> {
    let dim = 64;
    let (s, c) = (gamma / 2.0).sin_cos();
    let mut m = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..dim {
        m[i * dim + i] = Complex64::new(1.0, 0.0);
    }
    m[TRIPLE_LOW * dim + TRIPLE_LOW] = Complex64::new(c, 0.0);
    m[TRIPLE_LOW * dim + TRIPLE_HIGH] = Complex64::new(s, 0.0);
    m[TRIPLE_HIGH * dim + TRIPLE_LOW] = Complex64::new(-s, 0.0);
    m[TRIPLE_HIGH * dim + TRIPLE_HIGH] = Complex64::new(c, 0.0);
    m
}

/// Three electrons in six spin orbitals: single, double and triple
/// excitations from `|111000⟩`.
pub fn triple_givens_circuit(alpha: f64, beta: f64, gamma: f64) -> IrResult<Circuit> {
    let q = |i: u32| QubitId(i);
    let mut circuit = Circuit::with_size("triple_givens", 6);
    circuit.x(q(0))?.x(q(1))?.x(q(2))?;
    circuit.single_excitation(alpha, q(0), q(5))?;
    circuit.double_excitation(beta, [q(0), q(1), q(4), q(5)])?;
    let triple = CustomGate::unitary("TripleExcitation", 6, triple_excitation_matrix(gamma))?;
    let wires: Vec<QubitId> = (0..6).map(q).collect();
    circuit.unitary(triple, &wires)?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triple_matrix_is_orthogonal() {
        let m = triple_excitation_matrix(0.8);
        for i in 0..64 {
            for j in 0..64 {
                let dot: f64 = (0..64).map(|k| (m[i * 64 + k] * m[j * 64 + k]).re).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(dot, expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_triple_matrix_block() {
        let m = triple_excitation_matrix(std::f64::consts::PI);
        assert_relative_eq!(m[7 * 64 + 56].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[56 * 64 + 7].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(m[7 * 64 + 7].re, 0.0, epsilon = 1e-12);
    }
}

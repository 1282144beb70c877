//! Second-quantised molecular Hamiltonian and its qubit form.
//!
//! Spin orbitals are interleaved, `P = 2·p + σ` with `σ = 0` for α and
//! `σ = 1` for β. Spin orbital `P` maps to qubit `P` (Jordan-Wigner), so
//! qubit 0 is the most significant bit of a basis index.

use nalgebra::DMatrix;
use num_complex::Complex64;
use qforge_sim::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
use tracing::debug;

use crate::error::{ChemError, ChemResult};
use crate::scf::RhfResult;

/// Largest register the dense constructions accept.
pub const MAX_SPIN_ORBITALS: usize = 8;

/// One- and two-electron integrals over spin orbitals.
#[derive(Debug, Clone)]
pub struct SpinOrbitalIntegrals {
    n: usize,
    one_body: DMatrix<f64>,
    /// Physicists' notation `<PQ|RS>`.
    two_body: Vec<f64>,
    constant: f64,
}

impl SpinOrbitalIntegrals {
    /// Expand the MO integrals of an RHF solution into spin orbitals.
    pub fn from_rhf(rhf: &RhfResult) -> ChemResult<Self> {
        let spatial = rhf.integrals.n;
        let n = 2 * spatial;
        if n > MAX_SPIN_ORBITALS {
            return Err(ChemError::TooManyOrbitals(n));
        }
        let h = rhf.mo_core();
        let eri = rhf.mo_eri();
        let mo = |i: usize, j: usize, k: usize, l: usize| {
            eri[((i * spatial + j) * spatial + k) * spatial + l]
        };

        let one_body = DMatrix::from_fn(n, n, |p, q| {
            if p % 2 == q % 2 { h[(p / 2, q / 2)] } else { 0.0 }
        });

        let mut two_body = vec![0.0; n.pow(4)];
        for p in 0..n {
            for q in 0..n {
                for r in 0..n {
                    for s in 0..n {
                        if p % 2 == r % 2 && q % 2 == s % 2 {
                            two_body[((p * n + q) * n + r) * n + s] =
                                mo(p / 2, r / 2, q / 2, s / 2);
                        }
                    }
                }
            }
        }

        Ok(Self {
            n,
            one_body,
            two_body,
            constant: rhf.nuclear_repulsion,
        })
    }

    /// Number of spin orbitals (qubits).
    pub fn num_spin_orbitals(&self) -> usize {
        self.n
    }

    /// `h_PQ`.
    pub fn one_body(&self, p: usize, q: usize) -> f64 {
        self.one_body[(p, q)]
    }

    /// `<PQ|RS>`.
    pub fn two_body(&self, p: usize, q: usize, r: usize, s: usize) -> f64 {
        self.two_body[((p * self.n + q) * self.n + r) * self.n + s]
    }

    /// Constant energy shift (nuclear repulsion).
    pub fn constant(&self) -> f64 {
        self.constant
    }
}

fn mode_mask(p: usize, n: usize) -> usize {
    1 << (n - 1 - p)
}

/// Parity sign of the occupied modes before `p`.
fn jw_sign(state: usize, p: usize, n: usize) -> f64 {
    if (state >> (n - p)).count_ones() % 2 == 0 { 1.0 } else { -1.0 }
}

fn annihilate(state: usize, p: usize, n: usize) -> Option<(usize, f64)> {
    let mask = mode_mask(p, n);
    (state & mask != 0).then(|| (state ^ mask, jw_sign(state, p, n)))
}

fn create(state: usize, p: usize, n: usize) -> Option<(usize, f64)> {
    let mask = mode_mask(p, n);
    (state & mask == 0).then(|| (state | mask, jw_sign(state, p, n)))
}

/// Dense Hamiltonian on the full `2^n` occupation basis:
/// `E_nuc + Σ h_PQ a†_P a_Q + ½ Σ <PQ|RS> a†_P a†_Q a_S a_R`.
pub fn fock_space_matrix(ints: &SpinOrbitalIntegrals) -> DMatrix<f64> {
    let n = ints.n;
    let dim = 1usize << n;
    let mut h = DMatrix::<f64>::identity(dim, dim) * ints.constant;

    for ket in 0..dim {
        for p in 0..n {
            for q in 0..n {
                let coeff = ints.one_body(p, q);
                if coeff == 0.0 {
                    continue;
                }
                let Some((s1, f1)) = annihilate(ket, q, n) else {
                    continue;
                };
                if let Some((bra, f2)) = create(s1, p, n) {
                    h[(bra, ket)] += coeff * f1 * f2;
                }
            }
        }

        for p in 0..n {
            for q in 0..n {
                for r in 0..n {
                    for s in 0..n {
                        let coeff = ints.two_body(p, q, r, s);
                        if coeff == 0.0 {
                            continue;
                        }
                        let Some((s1, f1)) = annihilate(ket, r, n) else {
                            continue;
                        };
                        let Some((s2, f2)) = annihilate(s1, s, n) else {
                            continue;
                        };
                        let Some((s3, f3)) = create(s2, q, n) else {
                            continue;
                        };
                        if let Some((bra, f4)) = create(s3, p, n) {
                            h[(bra, ket)] += 0.5 * coeff * f1 * f2 * f3 * f4;
                        }
                    }
                }
            }
        }
    }
    h
}

/// Expand a real symmetric `2^n × 2^n` matrix in Pauli strings,
/// `c_P = tr(P·H) / 2^n`, dropping coefficients below `tol`.
pub fn pauli_decomposition(matrix: &DMatrix<f64>, tol: f64) -> ChemResult<Hamiltonian> {
    let dim = matrix.nrows();
    let n = dim.trailing_zeros() as usize;
    if n > MAX_SPIN_ORBITALS {
        return Err(ChemError::TooManyOrbitals(n));
    }
    if !dim.is_power_of_two() || matrix.ncols() != dim {
        return Err(qforge_sim::SimError::DimensionMismatch {
            expected: 1 << n,
            got: dim,
        }
        .into());
    }
    const OPS: [PauliOp; 4] = [PauliOp::I, PauliOp::X, PauliOp::Y, PauliOp::Z];

    let mut terms = Vec::new();
    for code in 0..(1usize << (2 * n)) {
        let ops = (0..n).filter_map(|q| {
            let op = OPS[(code >> (2 * (n - 1 - q))) & 3];
            (op != PauliOp::I).then_some((q as u32, op))
        });
        let pauli = PauliString::from_ops(ops);

        // tr(P·H) = Σ_j <j|P·H|j> with P|k> = phase·|image>.
        let mut trace = Complex64::new(0.0, 0.0);
        for k in 0..dim {
            let (image, phase) = pauli.apply_to_basis(k, n);
            trace += phase * matrix[(k, image)];
        }
        let coeff = trace / dim as f64;
        if coeff.re.abs() > tol {
            terms.push(HamiltonianTerm::new(coeff.re, pauli));
        }
    }
    debug!(qubits = n, terms = terms.len(), "Pauli decomposition");
    Ok(Hamiltonian::from_terms(terms))
}

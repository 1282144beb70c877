//! Hamiltonian data structures.
//!
//! A Hamiltonian is a sum of weighted Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z) and c_k ∈ ℝ.
//!
//! # Example
//!
//! ```rust
//! use qforge_sim::hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
//!
//! // H = -1.0·Z₀Z₁  +  0.5·X₀
//! let h = Hamiltonian::from_terms(vec![
//!     HamiltonianTerm::new(-1.0, PauliString::from_ops(vec![(0, PauliOp::Z), (1, PauliOp::Z)])),
//!     HamiltonianTerm::new( 0.5, PauliString::from_ops(vec![(0, PauliOp::X)])),
//! ]);
//! assert_eq!(h.n_terms(), 2);
//! ```

use nalgebra::DMatrix;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SimError, SimResult};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Parse a single symbol (case-insensitive).
    pub fn from_char(c: char) -> SimResult<Self> {
        match c.to_ascii_uppercase() {
            'I' => Ok(PauliOp::I),
            'X' => Ok(PauliOp::X),
            'Y' => Ok(PauliOp::Y),
            'Z' => Ok(PauliOp::Z),
            _ => Err(SimError::InvalidPauli(c)),
        }
    }

    /// The symbol of this operator.
    pub fn symbol(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }

    /// Action on a computational basis bit: returns the new bit and the phase.
    #[inline]
    pub fn act(self, bit: usize) -> (usize, Complex64) {
        match self {
            PauliOp::I => (bit, Complex64::new(1.0, 0.0)),
            PauliOp::X => (bit ^ 1, Complex64::new(1.0, 0.0)),
            // Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩
            PauliOp::Y => {
                let phase = if bit == 0 { 1.0 } else { -1.0 };
                (bit ^ 1, Complex64::new(0.0, phase))
            }
            PauliOp::Z => {
                let phase = if bit == 0 { 1.0 } else { -1.0 };
                (bit, Complex64::new(phase, 0.0))
            }
        }
    }
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with Identity terms
/// omitted.  Qubits not listed are implicitly I.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity terms, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// Construct a PauliString from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped; the remaining ops are sorted by qubit.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    /// The identity string.
    pub fn identity() -> Self {
        Self { ops: vec![] }
    }

    /// Single-qubit operator.
    pub fn single(qubit: u32, op: PauliOp) -> Self {
        Self::from_ops([(qubit, op)])
    }

    /// Construct a Z⊗Z⊗...⊗Z string spanning the given qubits.
    pub fn zz(qubits: impl IntoIterator<Item = u32>) -> Self {
        Self::from_ops(qubits.into_iter().map(|q| (q, PauliOp::Z)))
    }

    /// Return the non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// The highest qubit index referenced, or `None` for an identity string.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Apply the string to basis state `index` of an `n_qubits` register.
    ///
    /// Wire 0 is the most significant bit. Returns the image index and phase.
    pub fn apply_to_basis(&self, index: usize, n_qubits: usize) -> (usize, Complex64) {
        let mut out = index;
        let mut phase = Complex64::new(1.0, 0.0);
        for &(q, op) in &self.ops {
            let shift = n_qubits - 1 - q as usize;
            let bit = (index >> shift) & 1;
            let (new_bit, p) = op.act(bit);
            out = (out & !(1 << shift)) | (new_bit << shift);
            phase *= p;
        }
        (out, phase)
    }

    /// Check that every operator acts inside an `n_qubits` register.
    pub fn check_range(&self, n_qubits: usize) -> SimResult<()> {
        match self.max_qubit() {
            Some(q) if q as usize >= n_qubits => Err(SimError::QubitOutOfRange {
                qubit: q,
                n_qubits: u32::try_from(n_qubits).unwrap_or(u32::MAX),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        let parts: Vec<String> = self.ops.iter().map(|(q, op)| format!("{op}{q}")).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub pauli: PauliString,
}

impl HamiltonianTerm {
    /// Create a new term.
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    /// Shorthand: constant (identity) term.
    pub fn constant(coeff: f64) -> Self {
        Self::new(coeff, PauliString::identity())
    }

    /// Shorthand: single-qubit Z term.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::Z))
    }

    /// Shorthand: ZZ coupling term.
    pub fn zz(q0: u32, q1: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::zz([q0, q1]))
    }

    /// Shorthand: single-qubit X term.
    pub fn x(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::X))
    }
}

/// A sum-of-Pauli-strings Hamiltonian.
///
/// H = Σ_k  c_k · P_k
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<HamiltonianTerm>,
}

impl Hamiltonian {
    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<HamiltonianTerm>) -> Self {
        Self { terms }
    }

    /// All terms.
    pub fn terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Check if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Merge equal Pauli strings and drop coefficients below `tol`.
    ///
    /// Terms keep the order in which each string first appeared.
    #[must_use]
    pub fn simplify(&self, tol: f64) -> Self {
        let mut merged: Vec<HamiltonianTerm> = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match merged.iter_mut().find(|t| t.pauli == term.pauli) {
                Some(existing) => existing.coeff += term.coeff,
                None => merged.push(term.clone()),
            }
        }
        merged.retain(|t| t.coeff.abs() > tol);
        Self { terms: merged }
    }

    /// Dense matrix of the Hamiltonian on an `n_qubits` register.
    pub fn to_matrix(&self, n_qubits: usize) -> SimResult<DMatrix<Complex64>> {
        if self.terms.is_empty() {
            return Err(SimError::EmptyHamiltonian);
        }
        let dim = 1usize << n_qubits;
        let mut m = DMatrix::<Complex64>::zeros(dim, dim);
        for term in &self.terms {
            term.pauli.check_range(n_qubits)?;
            for col in 0..dim {
                let (row, phase) = term.pauli.apply_to_basis(col, n_qubits);
                m[(row, col)] += phase * term.coeff;
            }
        }
        Ok(m)
    }
}

impl FromIterator<HamiltonianTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = HamiltonianTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hamiltonian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let sign = if term.coeff < 0.0 { "-" } else { "+" };
            if i == 0 {
                if term.coeff < 0.0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {sign} ")?;
            }
            write!(f, "{:.6} [{}]", term.coeff.abs(), term.pauli)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_y_action() {
        let (bit, phase) = PauliOp::Y.act(0);
        assert_eq!(bit, 1);
        assert_eq!(phase, Complex64::new(0.0, 1.0));
        let (bit, phase) = PauliOp::Y.act(1);
        assert_eq!(bit, 0);
        assert_eq!(phase, Complex64::new(0.0, -1.0));
    }

    #[test]
    fn test_apply_to_basis_big_endian() {
        // X on wire 0 of a 2-qubit register flips the most significant bit.
        let x0 = PauliString::single(0, PauliOp::X);
        assert_eq!(x0.apply_to_basis(0b00, 2).0, 0b10);
        let z1 = PauliString::single(1, PauliOp::Z);
        assert_eq!(z1.apply_to_basis(0b01, 2).1, Complex64::new(-1.0, 0.0));
    }

    #[test]
    fn test_simplify_merges_terms() {
        let h = Hamiltonian::from_terms(vec![
            HamiltonianTerm::z(0, 0.5),
            HamiltonianTerm::x(1, 1e-14),
            HamiltonianTerm::z(0, 0.25),
        ]);
        let s = h.simplify(1e-10);
        assert_eq!(s.n_terms(), 1);
        assert_relative_eq!(s.terms()[0].coeff, 0.75);
    }

    #[test]
    fn test_to_matrix() {
        let h = Hamiltonian::from_terms(vec![
            HamiltonianTerm::constant(1.0),
            HamiltonianTerm::z(0, 2.0),
        ]);
        let m = h.to_matrix(1).unwrap();
        assert_relative_eq!(m[(0, 0)].re, 3.0);
        assert_relative_eq!(m[(1, 1)].re, -1.0);

        assert!(matches!(
            Hamiltonian::default().to_matrix(1),
            Err(SimError::EmptyHamiltonian)
        ));
        assert!(matches!(
            h.to_matrix(0),
            Err(SimError::QubitOutOfRange { qubit: 0, .. })
        ));
    }

    #[test]
    fn test_display() {
        let h = Hamiltonian::from_terms(vec![
            HamiltonianTerm::zz(0, 1, -1.0),
            HamiltonianTerm::x(0, 0.5),
        ]);
        assert_eq!(h.to_string(), "-1.000000 [Z0 Z1] + 0.500000 [X0]");
    }
}

//! Statevector simulation engine.
//!
//! Wire 0 is the most significant bit of a basis index, so on a 3-qubit
//! register `|q0 q1 q2⟩ = |100⟩` is index 4.

use nalgebra::DMatrix;
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

use qforge_ir::{Circuit, GateKind, Instruction, InstructionKind, StandardGate};

use crate::error::{SimError, SimResult};
use crate::hamiltonian::{Hamiltonian, PauliString};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A statevector representing a pure quantum state.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![ZERO; size];
        amplitudes[0] = ONE;
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Run `circuit` from |0...0⟩ on a register of `num_qubits` wires.
    pub fn from_circuit(circuit: &Circuit, num_qubits: usize) -> SimResult<Self> {
        if circuit.num_qubits() > num_qubits {
            return Err(SimError::TooManyQubits {
                circuit: circuit.name().to_string(),
                needed: circuit.num_qubits(),
                available: num_qubits,
            });
        }
        let mut sv = Self::new(num_qubits);
        sv.run(circuit)?;
        Ok(sv)
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the state, returning its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    #[inline]
    fn mask(&self, qubit: usize) -> usize {
        1 << (self.num_qubits - 1 - qubit)
    }

    /// Apply every instruction of `circuit` in order.
    pub fn run(&mut self, circuit: &Circuit) -> SimResult<()> {
        for inst in circuit.instructions() {
            self.apply(inst)?;
        }
        Ok(())
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        let qubits: Vec<usize> = instruction.qubits.iter().map(|q| q.index()).collect();
        if let Some(&q) = qubits.iter().find(|&&q| q >= self.num_qubits) {
            return Err(SimError::QubitOutOfRange {
                qubit: u32::try_from(q).unwrap_or(u32::MAX),
                n_qubits: u32::try_from(self.num_qubits).unwrap_or(u32::MAX),
            });
        }
        match &instruction.kind {
            InstructionKind::Gate(gate) => match &gate.kind {
                GateKind::Standard(std_gate) => self.apply_standard_gate(std_gate, &qubits),
                GateKind::Custom(custom) => {
                    let matrix = custom
                        .matrix
                        .as_ref()
                        .ok_or_else(|| SimError::MissingMatrix(custom.name.clone()))?;
                    self.apply_matrix(matrix, &qubits)
                }
            },
            InstructionKind::Barrier => Ok(()),
        }
    }

    /// Apply a standard gate.
    fn apply_standard_gate(&mut self, gate: &StandardGate, qubits: &[usize]) -> SimResult<()> {
        match gate {
            // Single-qubit gates
            StandardGate::I => {}
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Y => self.apply_y(qubits[0]),
            StandardGate::Z => self.apply_z(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::S => self.apply_phase(qubits[0], PI / 2.0),
            StandardGate::Sdg => self.apply_phase(qubits[0], -PI / 2.0),
            StandardGate::T => self.apply_phase(qubits[0], PI / 4.0),
            StandardGate::Tdg => self.apply_phase(qubits[0], -PI / 4.0),
            StandardGate::Rx(theta) => self.apply_single(qubits[0], rx_matrix(theta.value()?)),
            StandardGate::Ry(theta) => self.apply_single(qubits[0], ry_matrix(theta.value()?)),
            StandardGate::Rz(theta) => self.apply_single(qubits[0], rz_matrix(theta.value()?)),
            StandardGate::P(theta) => self.apply_phase(qubits[0], theta.value()?),
            StandardGate::U(theta, phi, lambda) => self.apply_single(
                qubits[0],
                u_matrix(theta.value()?, phi.value()?, lambda.value()?),
            ),

            // Two-qubit gates
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CY => self.apply_controlled(qubits[0], qubits[1], y_matrix()),
            StandardGate::CZ => self.apply_cz(qubits[0], qubits[1]),
            StandardGate::Swap => self.apply_swap(qubits[0], qubits[1]),
            StandardGate::CRx(theta) => {
                self.apply_controlled(qubits[0], qubits[1], rx_matrix(theta.value()?));
            }
            StandardGate::CRy(theta) => {
                self.apply_controlled(qubits[0], qubits[1], ry_matrix(theta.value()?));
            }
            StandardGate::CRz(theta) => {
                self.apply_controlled(qubits[0], qubits[1], rz_matrix(theta.value()?));
            }
            StandardGate::SingleExcitation(phi) => {
                self.apply_single_excitation(qubits[0], qubits[1], phi.value()?);
            }

            // Three-qubit gates
            StandardGate::CCX => self.apply_ccx(qubits[0], qubits[1], qubits[2]),
            StandardGate::CSwap => self.apply_cswap(qubits[0], qubits[1], qubits[2]),

            // Four-qubit gates
            StandardGate::DoubleExcitation(phi) => {
                self.apply_double_excitation([qubits[0], qubits[1], qubits[2], qubits[3]], phi.value()?);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = self.mask(qubit);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        self.apply_single(qubit, y_matrix());
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = self.mask(qubit);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = self.mask(qubit);
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = self.mask(qubit);
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    /// Apply a 2×2 matrix `[[m00, m01], [m10, m11]]` to one wire.
    fn apply_single(&mut self, qubit: usize, m: [[Complex64; 2]; 2]) {
        let mask = self.mask(qubit);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    /// Apply a 2×2 matrix to `target` where `control` is 1.
    fn apply_controlled(&mut self, control: usize, target: usize, m: [[Complex64; 2]; 2]) {
        let ctrl_mask = self.mask(control);
        let tgt_mask = self.mask(target);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = self.mask(control);
        let tgt_mask = self.mask(target);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = self.mask(control) | self.mask(target);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & both == both {
                *amp = -*amp;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = self.mask(q1);
        let mask2 = self.mask(q2);
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Rotate the `|01⟩`, `|10⟩` pair of `(q1, q2)` by `phi / 2`.
    fn apply_single_excitation(&mut self, q1: usize, q2: usize, phi: f64) {
        let m1 = self.mask(q1);
        let m2 = self.mask(q2);
        let c = (phi / 2.0).cos();
        let s = (phi / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if i & m1 == 0 && i & m2 != 0 {
                let j = (i | m1) & !m2;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    // =========================================================================
    // Three- and four-qubit gate implementations
    // =========================================================================

    fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let ctrl = self.mask(c1) | self.mask(c2);
        let tgt_mask = self.mask(target);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl == ctrl) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cswap(&mut self, control: usize, t1: usize, t2: usize) {
        let ctrl_mask = self.mask(control);
        let t1_mask = self.mask(t1);
        let t2_mask = self.mask(t2);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & t1_mask != 0) && (i & t2_mask == 0) {
                let j = (i & !t1_mask) | t2_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Rotate the `|0011⟩`, `|1100⟩` pair of `wires` by `phi / 2`.
    fn apply_double_excitation(&mut self, wires: [usize; 4], phi: f64) {
        let [m0, m1, m2, m3] = wires.map(|w| self.mask(w));
        let all = m0 | m1 | m2 | m3;
        let c = (phi / 2.0).cos();
        let s = (phi / 2.0).sin();
        for base in 0..self.amplitudes.len() {
            if base & all != 0 {
                continue;
            }
            let i = base | m2 | m3;
            let j = base | m0 | m1;
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = c * a - s * b;
            self.amplitudes[j] = s * a + c * b;
        }
    }

    /// Apply a dense row-major unitary; the first operand is the most
    /// significant bit of the matrix index.
    pub fn apply_matrix(&mut self, matrix: &[Complex64], qubits: &[usize]) -> SimResult<()> {
        let k = qubits.len();
        let dim = 1usize << k;
        if matrix.len() != dim * dim {
            return Err(SimError::DimensionMismatch {
                expected: dim * dim,
                got: matrix.len(),
            });
        }
        let masks: Vec<usize> = qubits.iter().map(|&q| self.mask(q)).collect();
        let all: usize = masks.iter().fold(0, |acc, m| acc | m);
        let offsets: Vec<usize> = (0..dim)
            .map(|sub| {
                masks
                    .iter()
                    .enumerate()
                    .filter(|(pos, _)| (sub >> (k - 1 - pos)) & 1 == 1)
                    .fold(0, |acc, (_, m)| acc | m)
            })
            .collect();

        let mut local = vec![ZERO; dim];
        for base in 0..self.amplitudes.len() {
            if base & all != 0 {
                continue;
            }
            for (row, slot) in local.iter_mut().enumerate() {
                *slot = offsets
                    .iter()
                    .enumerate()
                    .map(|(col, off)| matrix[row * dim + col] * self.amplitudes[base | off])
                    .sum();
            }
            for (off, value) in offsets.iter().zip(&local) {
                self.amplitudes[base | off] = *value;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Measurement quantities
    // =========================================================================

    /// Squared norm of the state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Marginal probabilities over `wires`, with `wires[0]` as the most
    /// significant bit of the result index.
    pub fn marginal_probabilities(&self, wires: &[usize]) -> SimResult<Vec<f64>> {
        self.check_wires(wires)?;
        let mut out = vec![0.0; 1 << wires.len()];
        for (i, amp) in self.amplitudes.iter().enumerate() {
            out[self.sub_index(i, wires)] += amp.norm_sqr();
        }
        Ok(out)
    }

    /// ⟨ψ|P|ψ⟩ for a Pauli string.
    pub fn expectation_pauli(&self, pauli: &PauliString) -> SimResult<f64> {
        pauli.check_range(self.num_qubits)?;
        let mut acc = ZERO;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let (j, phase) = pauli.apply_to_basis(i, self.num_qubits);
            acc += self.amplitudes[j].conj() * phase * amp;
        }
        Ok(acc.re)
    }

    /// ⟨ψ|H|ψ⟩ for a Pauli Hamiltonian.
    pub fn expectation(&self, hamiltonian: &Hamiltonian) -> SimResult<f64> {
        if hamiltonian.is_empty() {
            return Err(SimError::EmptyHamiltonian);
        }
        hamiltonian
            .terms()
            .iter()
            .map(|t| Ok(t.coeff * self.expectation_pauli(&t.pauli)?))
            .sum()
    }

    /// ⟨ψ|M|ψ⟩ for a dense Hermitian matrix acting on `wires`.
    pub fn expectation_matrix(&self, matrix: &DMatrix<Complex64>, wires: &[usize]) -> SimResult<f64> {
        let rho = self.reduced_density_matrix(wires)?;
        if matrix.shape() != rho.shape() {
            return Err(SimError::DimensionMismatch {
                expected: rho.nrows(),
                got: matrix.nrows(),
            });
        }
        Ok((rho * matrix).trace().re)
    }

    /// Reduced density matrix of `wires`, tracing out every other wire.
    pub fn reduced_density_matrix(&self, wires: &[usize]) -> SimResult<DMatrix<Complex64>> {
        self.check_wires(wires)?;
        let dim = 1usize << wires.len();
        let all: usize = wires.iter().fold(0, |acc, &w| acc | self.mask(w));
        let offsets: Vec<usize> = (0..dim).map(|sub| self.spread(sub, wires)).collect();

        let mut rho = DMatrix::<Complex64>::zeros(dim, dim);
        for base in 0..self.amplitudes.len() {
            if base & all != 0 {
                continue;
            }
            for (a, off_a) in offsets.iter().enumerate() {
                let amp_a = self.amplitudes[base | off_a];
                if amp_a == ZERO {
                    continue;
                }
                for (b, off_b) in offsets.iter().enumerate() {
                    rho[(a, b)] += amp_a * self.amplitudes[base | off_b].conj();
                }
            }
        }
        Ok(rho)
    }

    /// Draw one basis index from the Born distribution.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Rounding can leave the cumulative sum just below 1.
        self.amplitudes.len() - 1
    }

    /// Bits of `wires` in basis index `index`, `wires[0]` first.
    pub fn bits_of(&self, index: usize, wires: &[usize]) -> Vec<u8> {
        wires
            .iter()
            .map(|&w| u8::from(index & self.mask(w) != 0))
            .collect()
    }

    fn sub_index(&self, index: usize, wires: &[usize]) -> usize {
        wires
            .iter()
            .fold(0, |acc, &w| (acc << 1) | usize::from(index & self.mask(w) != 0))
    }

    fn spread(&self, sub: usize, wires: &[usize]) -> usize {
        let k = wires.len();
        wires
            .iter()
            .enumerate()
            .filter(|(pos, _)| (sub >> (k - 1 - pos)) & 1 == 1)
            .fold(0, |acc, (_, &w)| acc | self.mask(w))
    }

    fn check_wires(&self, wires: &[usize]) -> SimResult<()> {
        match wires.iter().find(|&&w| w >= self.num_qubits) {
            Some(&w) => Err(SimError::QubitOutOfRange {
                qubit: u32::try_from(w).unwrap_or(u32::MAX),
                n_qubits: u32::try_from(self.num_qubits).unwrap_or(u32::MAX),
            }),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Gate matrices
// =============================================================================

fn y_matrix() -> [[Complex64; 2]; 2] {
    [
        [ZERO, Complex64::new(0.0, -1.0)],
        [Complex64::new(0.0, 1.0), ZERO],
    ]
}

fn rx_matrix(theta: f64) -> [[Complex64; 2]; 2] {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
    [[c, neg_i_s], [neg_i_s, c]]
}

fn ry_matrix(theta: f64) -> [[Complex64; 2]; 2] {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    [[c, -s], [s, c]]
}

fn rz_matrix(theta: f64) -> [[Complex64; 2]; 2] {
    [
        [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
        [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
    ]
}

fn u_matrix(theta: f64, phi: f64, lambda: f64) -> [[Complex64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [Complex64::new(c, 0.0), -Complex64::from_polar(s, lambda)],
        [
            Complex64::from_polar(s, phi),
            Complex64::from_polar(c, phi + lambda),
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qforge_ir::{CustomGate, QubitId};

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], ONE));
        assert!(sv.amplitudes[1..].iter().all(|a| approx_eq(*a, ZERO)));
    }

    #[test]
    fn test_x_on_wire_zero_is_msb() {
        let mut sv = Statevector::new(3);
        sv.apply_x(0);
        assert!(approx_eq(sv.amplitudes[0b100], ONE));
    }

    #[test]
    fn test_bell_state() {
        let sv = Statevector::from_circuit(&Circuit::bell().unwrap(), 2).unwrap();
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], ZERO));
        assert!(approx_eq(sv.amplitudes[2], ZERO));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_unbound_parameter_is_an_error() {
        let mut circuit = Circuit::with_size("p", 1);
        circuit.ry("theta", QubitId(0)).unwrap();
        assert!(matches!(
            Statevector::from_circuit(&circuit, 1),
            Err(SimError::Ir(_))
        ));
    }

    #[test]
    fn test_single_excitation() {
        // SingleExcitation(φ)|10⟩ = -sin(φ/2)|01⟩ + cos(φ/2)|10⟩
        let mut circuit = Circuit::with_size("se", 2);
        circuit
            .x(QubitId(0))
            .unwrap()
            .single_excitation(PI / 2.0, QubitId(0), QubitId(1))
            .unwrap();
        let sv = Statevector::from_circuit(&circuit, 2).unwrap();
        let s = (PI / 4.0).sin();
        assert_relative_eq!(sv.amplitudes[0b01].re, -s, epsilon = 1e-12);
        assert_relative_eq!(sv.amplitudes[0b10].re, s, epsilon = 1e-12);
    }

    #[test]
    fn test_double_excitation() {
        let mut circuit = Circuit::with_size("de", 4);
        circuit
            .basis_state(&[1, 1, 0, 0], &[QubitId(0), QubitId(1), QubitId(2), QubitId(3)])
            .unwrap()
            .double_excitation(0.3, [QubitId(0), QubitId(1), QubitId(2), QubitId(3)])
            .unwrap();
        let sv = Statevector::from_circuit(&circuit, 4).unwrap();
        assert_relative_eq!(sv.amplitudes[0b1100].re, (0.15f64).cos(), epsilon = 1e-12);
        assert_relative_eq!(sv.amplitudes[0b0011].re, -(0.15f64).sin(), epsilon = 1e-12);
        assert_relative_eq!(sv.norm_sqr(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_matrix_matches_cx() {
        let mut m = vec![ZERO; 16];
        m[0] = ONE;
        m[5] = ONE;
        m[11] = ONE;
        m[14] = ONE;
        let gate = CustomGate::unitary("cnot", 2, m).unwrap();

        for (a, b) in [(0u32, 1u32), (1, 0)] {
            let mut custom = Circuit::with_size("custom", 3);
            custom.h(QubitId(0)).unwrap().ry(0.7, QubitId(1)).unwrap();
            let mut standard = custom.clone();
            custom.unitary(gate.clone(), &[QubitId(a), QubitId(b)]).unwrap();
            standard.cx(QubitId(a), QubitId(b)).unwrap();

            let lhs = Statevector::from_circuit(&custom, 3).unwrap();
            let rhs = Statevector::from_circuit(&standard, 3).unwrap();
            for (x, y) in lhs.amplitudes().iter().zip(rhs.amplitudes()) {
                assert!(approx_eq(*x, *y));
            }
        }
    }

    #[test]
    fn test_u_matches_ry() {
        let mut a = Statevector::new(1);
        a.apply_single(0, u_matrix(0.4, 0.0, 0.0));
        let mut b = Statevector::new(1);
        b.apply_single(0, ry_matrix(0.4));
        assert!(approx_eq(a.amplitudes[1], b.amplitudes[1]));
    }

    #[test]
    fn test_marginals_and_expectation() {
        let mut circuit = Circuit::with_size("m", 2);
        circuit.x(QubitId(1)).unwrap();
        let sv = Statevector::from_circuit(&circuit, 2).unwrap();

        assert_eq!(sv.marginal_probabilities(&[1]).unwrap(), vec![0.0, 1.0]);
        assert_eq!(sv.marginal_probabilities(&[1, 0]).unwrap(), vec![0.0, 0.0, 1.0, 0.0]);

        let z1 = PauliString::single(1, crate::hamiltonian::PauliOp::Z);
        assert_relative_eq!(sv.expectation_pauli(&z1).unwrap(), -1.0);
    }

    #[test]
    fn test_reduced_density_of_bell_pair() {
        let sv = Statevector::from_circuit(&Circuit::bell().unwrap(), 2).unwrap();
        let rho = sv.reduced_density_matrix(&[0]).unwrap();
        assert_relative_eq!(rho[(0, 0)].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(rho[(1, 1)].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(rho[(0, 1)].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_deterministic() {
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            assert_eq!(sv.sample_index(&mut rng), 1);
        }
    }
}

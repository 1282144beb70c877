//! A three-bit address QRAM loading one rotation angle per address.

use num_complex::Complex64;
use qforge_ir::{Circuit, CustomGate, IrResult, QubitId};

/// Number of addresses.
pub const ADDRESSES: usize = 8;

/// 16×16 `RY(θ)` on wire 3 controlled by wires 0, 1, 2 all being 1.
pub fn controlled_rotation_matrix(theta: f64) -> Vec<Complex64> {
    let dim = 16;
    let (s, c) = (theta / 2.0).sin_cos();
    let mut m = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..14 {
        m[i * dim + i] = Complex64::new(1.0, 0.0);
    }
    m[14 * dim + 14] = Complex64::new(c, 0.0);
    m[14 * dim + 15] = Complex64::new(-s, 0.0);
    m[15 * dim + 14] = Complex64::new(s, 0.0);
    m[15 * dim + 15] = Complex64::new(c, 0.0);
    m
}

/// Uniform superposition of addresses, each entangled with
/// `RY(θ_i)|0⟩` on the data wire.
pub fn qram_circuit(thetas: &[f64; ADDRESSES]) -> IrResult<Circuit> {
    let wires: Vec<QubitId> = (0..4).map(QubitId).collect();
    let address = &wires[..3];
    let mut circuit = Circuit::with_size("qram", 4);
    for &q in address {
        circuit.h(q)?;
    }
    for (i, &theta) in thetas.iter().enumerate() {
        // Bit of wire k in address i, wire 0 first.
        let zero_bits: Vec<QubitId> = address
            .iter()
            .enumerate()
            .filter(|(k, _)| (i >> (2 - k)) & 1 == 0)
            .map(|(_, &q)| q)
            .collect();
        for &q in &zero_bits {
            circuit.x(q)?;
        }
        let gate = CustomGate::unitary("CCCRY", 4, controlled_rotation_matrix(theta))?;
        circuit.unitary(gate, &wires)?;
        for &q in &zero_bits {
            circuit.x(q)?;
        }
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_block() {
        let m = controlled_rotation_matrix(std::f64::consts::PI);
        assert!((m[14 * 16 + 15].re + 1.0).abs() < 1e-12);
        assert!((m[15 * 16 + 14].re - 1.0).abs() < 1e-12);
        assert_eq!(m[3 * 16 + 3].re, 1.0);
    }

    #[test]
    fn test_qram_gate_count() {
        let circuit = qram_circuit(&[0.0; ADDRESSES]).unwrap();
        // 3 H, 8 unitaries, and two X per zero bit (12 zero bits in 000..111).
        assert_eq!(circuit.num_ops(), 3 + 8 + 2 * 12);
    }
}

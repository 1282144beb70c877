//! Variational classifier for spin configurations.
//!
//! Each configuration is loaded as a computational basis state. A layer is
//! a `U3` rotation on every wire followed by a ring of CNOTs.

use qforge_ir::{Circuit, IrError, IrResult, QubitId};

/// Angles per wire per layer (`θ, φ, λ` of `U3`).
pub const ANGLES_PER_WIRE: usize = 3;

/// Number of rotation weights for `layers` layers on `num_wires` wires.
pub fn num_weights(num_wires: usize, layers: usize) -> usize {
    layers * num_wires * ANGLES_PER_WIRE
}

/// Classifier circuit for one configuration.
///
/// `weights` is laid out layer-major, then wire, then angle.
pub fn ising_classifier(config: &[u8], weights: &[f64]) -> IrResult<Circuit> {
    let n = config.len();
    if n == 0 {
        return Err(IrError::NoQubits("ising_classifier".into()));
    }
    let wires: Vec<QubitId> = (0..n).map(QubitId::from).collect();
    let mut circuit = Circuit::with_size("ising_classifier", u32::try_from(n).unwrap_or(u32::MAX));
    circuit.basis_state(config, &wires)?;

    for layer in weights.chunks_exact(n * ANGLES_PER_WIRE) {
        for (angles, &q) in layer.chunks_exact(ANGLES_PER_WIRE).zip(&wires) {
            circuit.u(angles[0], angles[1], angles[2], q)?;
        }
        for i in 0..n.saturating_sub(1) {
            circuit.cx(wires[i], wires[i + 1])?;
        }
        if n > 1 {
            circuit.cx(wires[n - 1], wires[0])?;
        }
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_weights() {
        assert_eq!(num_weights(4, 2), 24);
    }

    #[test]
    fn test_classifier_structure() {
        let weights = vec![0.1; num_weights(4, 2)];
        let circuit = ising_classifier(&[1, 0, 1, 1], &weights).unwrap();
        // 3 X for the basis state, 2 × (4 U3 + 4 CNOT).
        assert_eq!(circuit.num_ops(), 3 + 2 * 8);
        assert_eq!(circuit.num_qubits(), 4);
    }

    #[test]
    fn test_no_wires_is_an_error() {
        assert!(matches!(
            ising_classifier(&[], &[]),
            Err(IrError::NoQubits(_))
        ));
    }
}

//! Entangled-state circuits: the tardigrade masquerade and the CHSH game.

use qforge_ir::{Circuit, IrResult, QubitId};

/// Bell-type state of qubits A and B alone, `(|01⟩ + |10⟩)/√2`.
pub fn tardigrade_free_state() -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("ab", 2);
    circuit
        .h(QubitId(0))?
        .cx(QubitId(0), QubitId(1))?
        .x(QubitId(1))?;
    Ok(circuit)
}

/// Qubits A, B and the tardigrade T (wire 2), entangled through a
/// controlled `RY(θ)`.
pub fn tardigrade_state(theta: f64) -> IrResult<Circuit> {
    let (a, b, t) = (QubitId(0), QubitId(1), QubitId(2));
    let mut circuit = Circuit::with_size("abt", 3);
    circuit
        .h(a)?
        .x(a)?
        .cry(theta, a, b)?
        .x(a)?
        .cx(b, t)?
        .x(b)?
        .cx(a, b)?;
    Ok(circuit)
}

/// Referee bits of one CHSH round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Bit sent to Alice.
    pub x: u8,
    /// Bit sent to Bob.
    pub y: u8,
}

impl Round {
    /// All four rounds, `(0,0), (0,1), (1,0), (1,1)`.
    pub const ALL: [Round; 4] = [
        Round { x: 0, y: 0 },
        Round { x: 0, y: 1 },
        Round { x: 1, y: 0 },
        Round { x: 1, y: 1 },
    ];

    /// Players win when `a ⊕ b = x·y`.
    pub fn wins(&self, a: u8, b: u8) -> bool {
        (a ^ b) == (self.x & self.y)
    }
}

/// `cos φ|00⟩ + sin φ|11⟩` with `(cos φ, sin φ) ∝ (α, β)`.
pub fn prepare_entangled(circuit: &mut Circuit, alpha: f64, beta: f64) -> IrResult<()> {
    let norm = alpha.hypot(beta);
    let angle = 2.0 * (beta / norm).asin();
    circuit.ry(angle, QubitId(0))?.cx(QubitId(0), QubitId(1))?;
    Ok(())
}

/// One CHSH round: the shared state, then each player rotates by twice
/// the angle chosen for their bit.
///
/// `thetas` is `[θ_A0, θ_A1, θ_B0, θ_B1]`.
pub fn chsh_circuit(thetas: &[f64; 4], round: Round, alpha: f64, beta: f64) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("chsh", 2);
    prepare_entangled(&mut circuit, alpha, beta)?;
    let alice = thetas[usize::from(round.x)];
    let bob = thetas[2 + usize::from(round.y)];
    circuit
        .ry(2.0 * alice, QubitId(0))?
        .ry(2.0 * bob, QubitId(1))?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_rules() {
        assert!(Round { x: 0, y: 1 }.wins(1, 1));
        assert!(!Round { x: 0, y: 1 }.wins(0, 1));
        assert!(Round { x: 1, y: 1 }.wins(0, 1));
    }

    #[test]
    fn test_chsh_circuit_picks_angles() {
        let c = chsh_circuit(&[0.1, 0.2, 0.3, 0.4], Round { x: 1, y: 0 }, 1.0, 1.0).unwrap();
        assert_eq!(c.num_ops(), 4);
    }

    #[test]
    fn test_tardigrade_circuits() {
        assert_eq!(tardigrade_free_state().unwrap().num_ops(), 3);
        assert_eq!(tardigrade_state(0.5).unwrap().num_qubits(), 3);
    }
}

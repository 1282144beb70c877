//! Single-parameter excitation ansatz for two-electron molecules.

use qforge_ir::{Bindings, Circuit, IrResult, QubitId};

/// Name of the ansatz parameter.
pub const THETA: &str = "theta";

/// Basis state `reference` on four wires followed by a symbolic
/// `DoubleExcitation(theta)` on `wires`.
pub fn double_excitation_ansatz(reference: [u8; 4], wires: [u32; 4]) -> IrResult<Circuit> {
    let register: Vec<QubitId> = (0..4).map(QubitId).collect();
    let mut circuit = Circuit::with_size("double_excitation_ansatz", 4);
    circuit.basis_state(&reference, &register)?;
    circuit.double_excitation(THETA, wires.map(QubitId))?;
    Ok(circuit)
}

/// The ansatz with `theta` bound.
pub fn bind_theta(ansatz: &Circuit, theta: f64) -> Circuit {
    let mut bindings = Bindings::default();
    bindings.insert(THETA.to_string(), theta);
    ansatz.bind_parameters(&bindings)
}

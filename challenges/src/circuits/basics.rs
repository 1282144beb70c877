//! Single-qubit rotation circuits.

use qforge_ir::{Circuit, IrResult, QubitId};

/// `RX(θ1)` followed by `RY(θ2)` on one wire.
pub fn rx_then_ry(theta1: f64, theta2: f64) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("rx_ry", 1);
    circuit.rx(theta1, QubitId(0))?.ry(theta2, QubitId(0))?;
    Ok(circuit)
}

/// `RY(θ2)` followed by `RX(θ1)` on one wire.
pub fn ry_then_rx(theta1: f64, theta2: f64) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("ry_rx", 1);
    circuit.ry(theta2, QubitId(0))?.rx(theta1, QubitId(0))?;
    Ok(circuit)
}

/// `RY(2·angle)` on one wire: a beam splitter of the bomb tester.
pub fn beam_splitter(angle: f64) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("beam_splitter", 1);
    circuit.ry(2.0 * angle, QubitId(0))?;
    Ok(circuit)
}

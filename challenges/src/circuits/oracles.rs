//! Oracle circuits for the query-complexity games.

use qforge_ir::{Circuit, IrResult, QubitId};

/// Wire labels of the find-the-car register: two door bits and the answer.
pub const CAR_WIRES: [&str; 3] = ["0", "1", "sol"];

/// Deutsch-Jozsa oracle on 3 wires: CNOTs from `controls[0]` and
/// `controls[1]` onto wire 2, then X on wire 2 when `negate` is set.
///
/// Equal controls cancel and give a constant function; distinct controls
/// give the balanced `x0 ⊕ x1`.
pub fn deutsch_jozsa_oracle(controls: [u8; 2], negate: bool) -> IrResult<Circuit> {
    let mut oracle = Circuit::with_size("dj_oracle", 3);
    for c in controls {
        oracle.cx(QubitId(u32::from(c)), QubitId(2))?;
    }
    if negate {
        oracle.x(QubitId(2))?;
    }
    Ok(oracle)
}

/// Deutsch-Jozsa around `oracle`: inputs in `|+⟩`, output in `|−⟩`,
/// Hadamards on the inputs afterwards.
pub fn deutsch_jozsa_circuit(oracle: &Circuit) -> IrResult<Circuit> {
    let (q0, q1, out) = (QubitId(0), QubitId(1), QubitId(2));
    let mut circuit = Circuit::with_size("deutsch_jozsa", 3);
    circuit.h(q0)?.h(q1)?.h(out)?.z(out)?;
    circuit.append(oracle)?;
    circuit.h(q0)?.h(q1)?;
    Ok(circuit)
}

/// Oracle flipping `sol` for the door selected by the input bits.
///
/// Inputs of 1 conjugate the matching door wire with X, so the marked
/// door is `(1 − bits[0], 1 − bits[1])`.
pub fn car_oracle(bits: [u8; 2]) -> IrResult<Circuit> {
    let mut oracle = Circuit::with_wires("car_oracle", CAR_WIRES)?;
    let sol = oracle.wire("sol")?;
    let doors = [QubitId(0), QubitId(1)];
    for (&b, &q) in bits.iter().zip(&doors) {
        if b == 1 {
            oracle.x(q)?;
        }
    }
    oracle.ccx(doors[0], doors[1], sol)?;
    for (&b, &q) in bits.iter().zip(&doors) {
        if b == 1 {
            oracle.x(q)?;
        }
    }
    Ok(oracle)
}

fn phase_kickback(circuit: &mut Circuit, oracle: &Circuit) -> IrResult<()> {
    let sol = circuit.wire("sol")?;
    circuit.x(sol)?.h(sol)?;
    circuit.append(oracle)?;
    circuit.h(sol)?.x(sol)?;
    Ok(())
}

/// The two probes of find-the-car.
///
/// The first superposes doors `00` and `01` and reveals on wire 1 whether
/// the car has first bit 0. The second superposes `01` and `10` and
/// reveals on wire 0 whether the door bits differ.
pub fn car_probes(oracle: &Circuit) -> IrResult<[Circuit; 2]> {
    let (q0, q1) = (QubitId(0), QubitId(1));

    let mut first = Circuit::with_wires("car_probe_0", CAR_WIRES)?;
    first.h(q1)?;
    phase_kickback(&mut first, oracle)?;
    first.h(q1)?;

    let mut second = Circuit::with_wires("car_probe_1", CAR_WIRES)?;
    second.h(q0)?.cx(q0, q1)?.x(q0)?;
    phase_kickback(&mut second, oracle)?;
    second.x(q0)?.cx(q0, q1)?.h(q0)?;

    Ok([first, second])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dj_oracle_shapes() {
        let constant = deutsch_jozsa_oracle([1, 1], false).unwrap();
        assert_eq!(constant.num_ops(), 2);
        let negated = deutsch_jozsa_oracle([0, 1], true).unwrap();
        assert_eq!(negated.num_ops(), 3);
        let full = deutsch_jozsa_circuit(&negated).unwrap();
        assert_eq!(full.num_ops(), 4 + 3 + 2);
    }

    #[test]
    fn test_car_oracle_uses_labelled_answer_wire() {
        let oracle = car_oracle([1, 0]).unwrap();
        assert_eq!(oracle.wire("sol").unwrap(), QubitId(2));
        assert_eq!(oracle.num_ops(), 3);
        let [a, b] = car_probes(&oracle).unwrap();
        assert_eq!(a.num_qubits(), 3);
        assert_eq!(b.num_ops(), 3 + 4 + 3 + 3);
    }
}

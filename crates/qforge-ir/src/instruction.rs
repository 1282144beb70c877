//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::{Gate, GateKind, StandardGate};
use crate::parameter::Bindings;
use crate::qubit::QubitId;

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A quantum gate operation.
    Gate(Gate),
    /// Barrier (synchronization point). Has no effect on the state.
    Barrier,
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on, in operand order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate.into()),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a barrier instruction.
    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        matches!(self.kind, InstructionKind::Barrier)
    }

    /// Get the gate if this is a gate instruction.
    pub fn as_gate(&self) -> Option<&Gate> {
        match &self.kind {
            InstructionKind::Gate(g) => Some(g),
            InstructionKind::Barrier => None,
        }
    }

    /// Get the name of this instruction.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Barrier => "barrier",
        }
    }

    /// Get the number of qubits this instruction operates on.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Copy of the instruction with gate parameters bound.
    #[must_use]
    pub fn bind(&self, bindings: &Bindings) -> Self {
        let kind = match &self.kind {
            InstructionKind::Gate(Gate {
                kind: GateKind::Standard(g),
                label,
            }) => InstructionKind::Gate(Gate {
                kind: GateKind::Standard(g.bind(bindings)),
                label: label.clone(),
            }),
            other => other.clone(),
        };
        Self {
            kind,
            qubits: self.qubits.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterExpression;

    #[test]
    fn test_gate_instruction() {
        let inst = Instruction::single_qubit_gate(StandardGate::H, QubitId(0));
        assert!(inst.is_gate());
        assert_eq!(inst.name(), "h");
        assert_eq!(inst.qubits, vec![QubitId(0)]);
    }

    #[test]
    fn test_barrier_instruction() {
        let inst = Instruction::barrier([QubitId(0), QubitId(1), QubitId(2)]);
        assert!(inst.is_barrier());
        assert!(inst.as_gate().is_none());
        assert_eq!(inst.num_qubits(), 3);
    }

    #[test]
    fn test_bind_keeps_operands() {
        let inst = Instruction::two_qubit_gate(
            StandardGate::SingleExcitation(ParameterExpression::symbol("phi")),
            QubitId(0),
            QubitId(5),
        );
        let mut bindings = Bindings::default();
        bindings.insert("phi".into(), 0.25);

        let bound = inst.bind(&bindings);
        assert_eq!(bound.qubits, inst.qubits);
        let Some(Gate {
            kind: GateKind::Standard(StandardGate::SingleExcitation(p)),
            ..
        }) = bound.as_gate()
        else {
            panic!("expected a single excitation gate");
        };
        assert_eq!(p.as_f64(), Some(0.25));
    }
}

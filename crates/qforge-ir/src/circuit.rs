//! High-level circuit builder API.

use rustc_hash::FxHashSet;

use crate::error::{IrError, IrResult};
use crate::gate::{CustomGate, Gate, GateKind, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::parameter::{Bindings, ParameterExpression};
use crate::qubit::{Qubit, QubitId};

/// A quantum circuit.
///
/// Instructions are stored in application order. Wires are addressed by
/// [`QubitId`]; labelled wires can be resolved with [`Circuit::wire`].
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        circuit
    }

    /// Create a circuit whose wires carry the given labels, in order.
    pub fn with_wires<S: Into<String>>(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> IrResult<Self> {
        let mut circuit = Self::new(name);
        for label in labels {
            circuit.add_labelled_qubit(label)?;
        }
        Ok(circuit)
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId::from(self.qubits.len());
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a qubit addressed by `label`.
    pub fn add_labelled_qubit(&mut self, label: impl Into<String>) -> IrResult<QubitId> {
        let label = label.into();
        if self.qubits.iter().any(|q| q.label.as_deref() == Some(label.as_str())) {
            return Err(IrError::DuplicateWireLabel(label));
        }
        let id = QubitId::from(self.qubits.len());
        self.qubits.push(Qubit::labelled(id, label));
        Ok(id)
    }

    /// Resolve a wire label to its id.
    pub fn wire(&self, label: &str) -> IrResult<QubitId> {
        self.qubits
            .iter()
            .find(|q| q.label.as_deref() == Some(label))
            .map(|q| q.id)
            .ok_or_else(|| IrError::UnknownWire(label.to_string()))
    }

    /// Append a validated instruction.
    ///
    /// Checks that the gate arity matches the operand count, that every
    /// operand exists and that no operand repeats.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let gate_name = instruction.as_gate().map(|g| g.name().to_string());

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = u32::try_from(instruction.qubits.len()).unwrap_or(u32::MAX);
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        for &qubit in &instruction.qubits {
            if qubit.index() >= self.qubits.len() {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        self.instructions.push(instruction);
        Ok(self)
    }

    fn one(&mut self, gate: StandardGate, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(gate, qubit))
    }

    fn two(&mut self, gate: StandardGate, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(gate, q1, q2))
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.one(StandardGate::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.one(StandardGate::X, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.one(StandardGate::Z, qubit)
    }

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.one(StandardGate::Rx(theta.into()), qubit)
    }

    /// Apply Ry rotation gate.
    pub fn ry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.one(StandardGate::Ry(theta.into()), qubit)
    }

    /// Apply universal U3 gate.
    pub fn u(
        &mut self,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.one(
            StandardGate::U(theta.into(), phi.into(), lambda.into()),
            qubit,
        )
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.two(StandardGate::CX, control, target)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.two(StandardGate::Swap, q1, q2)
    }

    /// Apply controlled-Ry gate.
    pub fn cry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.two(StandardGate::CRy(theta.into()), control, target)
    }

    /// Apply controlled-Rz gate.
    pub fn crz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.two(StandardGate::CRz(theta.into()), control, target)
    }

    /// Apply a Givens rotation mixing `|01⟩` and `|10⟩` of `(q1, q2)`.
    pub fn single_excitation(
        &mut self,
        phi: impl Into<ParameterExpression>,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.two(StandardGate::SingleExcitation(phi.into()), q1, q2)
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CCX, [c1, c2, target]))
    }

    /// Apply a Givens rotation mixing `|0011⟩` and `|1100⟩` of the four wires.
    pub fn double_excitation(
        &mut self,
        phi: impl Into<ParameterExpression>,
        qubits: [QubitId; 4],
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(
            StandardGate::DoubleExcitation(phi.into()),
            qubits,
        ))
    }

    /// Apply a dense custom unitary. The first operand is the most
    /// significant bit of the matrix index.
    pub fn unitary(&mut self, gate: CustomGate, qubits: &[QubitId]) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(Gate::custom(gate), qubits.iter().copied()))
    }

    /// Prepare a computational basis state on a fresh register by flipping
    /// every wire whose bit is 1.
    pub fn basis_state(&mut self, bits: &[u8], wires: &[QubitId]) -> IrResult<&mut Self> {
        if bits.len() != wires.len() {
            return Err(IrError::QubitCountMismatch {
                gate_name: "basis_state".into(),
                expected: u32::try_from(bits.len()).unwrap_or(u32::MAX),
                got: u32::try_from(wires.len()).unwrap_or(u32::MAX),
            });
        }
        if let Some((position, &value)) = bits.iter().enumerate().find(|(_, b)| **b > 1) {
            return Err(IrError::InvalidBasisState { position, value });
        }
        for (&bit, &wire) in bits.iter().zip(wires) {
            if bit == 1 {
                self.x(wire)?;
            }
        }
        Ok(self)
    }

    /// Add a barrier across the given qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier(qubits))
    }

    /// Append every instruction of `other`, which must not use more wires.
    pub fn append(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        for inst in &other.instructions {
            self.apply(inst.clone())?;
        }
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubits.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of gate operations (barriers excluded).
    pub fn num_ops(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_gate()).count()
    }

    /// Circuit depth: the longest chain of gates sharing a wire.
    pub fn depth(&self) -> usize {
        let mut layer = vec![0usize; self.qubits.len()];
        for inst in &self.instructions {
            let front = inst
                .qubits
                .iter()
                .map(|q| layer[q.index()])
                .max()
                .unwrap_or(0);
            let next = if inst.is_gate() { front + 1 } else { front };
            for q in &inst.qubits {
                layer[q.index()] = next;
            }
        }
        layer.into_iter().max().unwrap_or(0)
    }

    /// Sorted names of every free parameter symbol.
    pub fn parameters(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .instructions
            .iter()
            .filter_map(|i| i.as_gate())
            .filter_map(|g| match &g.kind {
                GateKind::Standard(s) => Some(s.parameters()),
                GateKind::Custom(_) => None,
            })
            .flatten()
            .flat_map(ParameterExpression::symbols)
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        names
    }

    /// Check if any gate still has an unbound parameter.
    pub fn is_parameterized(&self) -> bool {
        !self.parameters().is_empty()
    }

    /// Copy of the circuit with symbols replaced by values from `bindings`.
    #[must_use]
    pub fn bind_parameters(&self, bindings: &Bindings) -> Self {
        Self {
            name: self.name.clone(),
            qubits: self.qubits.clone(),
            instructions: self.instructions.iter().map(|i| i.bind(bindings)).collect(),
        }
    }

    // =========================================================================
    // Common circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size("ghz", n);
        if n == 0 {
            return Ok(circuit);
        }
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        Ok(circuit)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn depth_never_exceeds_op_count(ops in prop::collection::vec((0u32..4, 0u32..4), 0..40)) {
            let mut circuit = Circuit::with_size("random", 4);
            for (a, b) in ops {
                if a == b {
                    circuit.h(QubitId(a)).unwrap();
                } else {
                    circuit.cx(QubitId(a), QubitId(b)).unwrap();
                }
            }
            prop_assert!(circuit.depth() <= circuit.num_ops());
        }
    }

    #[test]
    fn instructions_serialize() {
        let circuit = Circuit::bell().unwrap();
        let json = serde_json::to_string(circuit.instructions()).unwrap();
        let back: Vec<Instruction> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit.instructions());
    }
}

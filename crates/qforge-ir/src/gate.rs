//! Quantum gate types.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::parameter::{Bindings, ParameterExpression};

/// Standard gates with known semantics.
///
/// Multi-qubit gates list their operands in the order they are passed to the
/// circuit builder; for controlled gates the controls come first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(ParameterExpression),
    /// Rotation around Y axis.
    Ry(ParameterExpression),
    /// Rotation around Z axis.
    Rz(ParameterExpression),
    /// Phase gate.
    P(ParameterExpression),
    /// Universal single-qubit gate U3(θ, φ, λ).
    U(
        ParameterExpression,
        ParameterExpression,
        ParameterExpression,
    ),

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Controlled rotation around X.
    CRx(ParameterExpression),
    /// Controlled rotation around Y.
    CRy(ParameterExpression),
    /// Controlled rotation around Z.
    CRz(ParameterExpression),
    /// Givens rotation between |01⟩ and |10⟩.
    SingleExcitation(ParameterExpression),

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
    /// Fredkin gate (CSWAP).
    CSwap,

    // Four-qubit gates
    /// Givens rotation between |0011⟩ and |1100⟩.
    DoubleExcitation(ParameterExpression),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::P(_) => "p",
            StandardGate::U(_, _, _) => "u",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
            StandardGate::CRx(_) => "crx",
            StandardGate::CRy(_) => "cry",
            StandardGate::CRz(_) => "crz",
            StandardGate::SingleExcitation(_) => "single_excitation",
            StandardGate::CCX => "ccx",
            StandardGate::CSwap => "cswap",
            StandardGate::DoubleExcitation(_) => "double_excitation",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_)
            | StandardGate::P(_)
            | StandardGate::U(_, _, _) => 1,

            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::Swap
            | StandardGate::CRx(_)
            | StandardGate::CRy(_)
            | StandardGate::CRz(_)
            | StandardGate::SingleExcitation(_) => 2,

            StandardGate::CCX | StandardGate::CSwap => 3,

            StandardGate::DoubleExcitation(_) => 4,
        }
    }

    /// Check if this gate has unbound parameters.
    pub fn is_parameterized(&self) -> bool {
        self.parameters().iter().any(|p| p.is_symbolic())
    }

    /// Get parameters of this gate.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            StandardGate::Rx(p)
            | StandardGate::Ry(p)
            | StandardGate::Rz(p)
            | StandardGate::P(p)
            | StandardGate::CRx(p)
            | StandardGate::CRy(p)
            | StandardGate::CRz(p)
            | StandardGate::SingleExcitation(p)
            | StandardGate::DoubleExcitation(p) => vec![p],

            StandardGate::U(a, b, c) => vec![a, b, c],

            _ => vec![],
        }
    }

    /// Return a copy with every parameter bound from `bindings`.
    #[must_use]
    pub fn bind(&self, bindings: &Bindings) -> Self {
        let b = |p: &ParameterExpression| p.bind_all(bindings);
        match self {
            StandardGate::Rx(p) => StandardGate::Rx(b(p)),
            StandardGate::Ry(p) => StandardGate::Ry(b(p)),
            StandardGate::Rz(p) => StandardGate::Rz(b(p)),
            StandardGate::P(p) => StandardGate::P(b(p)),
            StandardGate::U(t, ph, l) => StandardGate::U(b(t), b(ph), b(l)),
            StandardGate::CRx(p) => StandardGate::CRx(b(p)),
            StandardGate::CRy(p) => StandardGate::CRy(b(p)),
            StandardGate::CRz(p) => StandardGate::CRz(b(p)),
            StandardGate::SingleExcitation(p) => StandardGate::SingleExcitation(b(p)),
            StandardGate::DoubleExcitation(p) => StandardGate::DoubleExcitation(b(p)),
            other => other.clone(),
        }
    }
}

/// A quantum gate, either standard or custom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// A standard gate with known semantics.
    Standard(StandardGate),
    /// A custom user-defined gate.
    Custom(CustomGate),
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::Standard(g) => g.name(),
            GateKind::Custom(g) => &g.name,
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::Standard(g) => g.num_qubits(),
            GateKind::Custom(g) => g.num_qubits,
        }
    }
}

/// A user-defined gate, usually carrying an explicit unitary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGate {
    /// The name of the gate.
    pub name: String,
    /// The number of qubits it operates on.
    pub num_qubits: u32,
    /// Unitary matrix, row-major, `2^n × 2^n`. Row and column indices use the
    /// operand order of the instruction, first operand most significant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Complex64>>,
}

impl CustomGate {
    /// Create a new custom gate without a matrix.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            matrix: None,
        }
    }

    /// Create a gate from a dense unitary.
    pub fn unitary(
        name: impl Into<String>,
        num_qubits: u32,
        matrix: Vec<Complex64>,
    ) -> IrResult<Self> {
        Self::new(name, num_qubits).with_matrix(matrix)
    }

    /// Attach a unitary matrix to the gate.
    pub fn with_matrix(mut self, matrix: Vec<Complex64>) -> IrResult<Self> {
        let dim = 1usize << self.num_qubits;
        if matrix.len() != dim * dim {
            return Err(IrError::MatrixShape {
                gate_name: self.name,
                expected: dim * dim,
                got: matrix.len(),
            });
        }
        self.matrix = Some(matrix);
        Ok(self)
    }

    /// Dimension of the matrix (`2^n`).
    pub fn dim(&self) -> usize {
        1usize << self.num_qubits
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional label for the gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            kind: GateKind::Standard(gate),
            label: None,
        }
    }

    /// Create a new gate from a custom gate.
    pub fn custom(gate: CustomGate) -> Self {
        Self {
            kind: GateKind::Custom(gate),
            label: None,
        }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::custom(gate)
    }
}

//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit:?} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// No wire carries the requested label.
    #[error("No wire labelled '{0}'")]
    UnknownWire(String),

    /// Two wires were given the same label.
    #[error("Wire label '{0}' is used more than once")]
    DuplicateWireLabel(String),

    /// Gate requires different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Parameter is unbound.
    #[error("Parameter '{0}' is unbound")]
    UnboundParameter(String),

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit:?} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// A custom unitary has the wrong number of entries.
    #[error("Matrix for '{gate_name}' has {got} entries, expected {expected}")]
    MatrixShape {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of entries, `(2^n)^2`.
        expected: usize,
        /// Actual number of entries.
        got: usize,
    },

    /// A basis state contains something other than 0 or 1.
    #[error("Basis state entry {value} at position {position} is not 0 or 1")]
    InvalidBasisState {
        /// Position in the bit list.
        position: usize,
        /// Offending value.
        value: u8,
    },

    /// A layered circuit was requested on zero qubits.
    #[error("Circuit '{0}' needs at least one qubit")]
    NoQubits(String),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

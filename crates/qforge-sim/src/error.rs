//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while simulating circuits or manipulating observables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Hamiltonian contains no terms.
    #[error("Hamiltonian is empty")]
    EmptyHamiltonian,

    /// An operator references a wire the device does not have.
    #[error("Operator references qubit {qubit} but the device only has {n_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits on the device.
        n_qubits: u32,
    },

    /// The circuit needs more wires than the device provides.
    #[error("Circuit '{circuit}' uses {needed} qubits, device has {available}")]
    TooManyQubits {
        /// Circuit name.
        circuit: String,
        /// Wires required by the circuit.
        needed: usize,
        /// Wires on the device.
        available: usize,
    },

    /// A custom gate was applied without a matrix.
    #[error("Custom gate '{0}' has no matrix")]
    MissingMatrix(String),

    /// A matrix or vector has the wrong dimension.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        got: usize,
    },

    /// Sampling was requested on an analytic device.
    #[error("Device '{0}' has no shot count; sampling needs shots")]
    ShotsRequired(String),

    /// Two Pauli words cannot be measured together.
    #[error("Pauli words {left} and {right} are not compatible")]
    IncompatibleWords {
        /// First word.
        left: String,
        /// Second word.
        right: String,
    },

    /// A grouping input has words of different lengths.
    #[error("Pauli word has length {got}, expected {expected}")]
    WordLength {
        /// Length of the first word.
        expected: usize,
        /// Length of the offending word.
        got: usize,
    },

    /// No words were supplied.
    #[error("Pauli word list is empty")]
    NoWords,

    /// A character is not one of I, X, Y, Z.
    #[error("Invalid Pauli symbol '{0}'")]
    InvalidPauli(char),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qforge_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

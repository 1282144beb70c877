//! Error types for the challenge runners.

use thiserror::Error;

/// Problems with the single input line of an exercise.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Input is empty")]
    Empty,

    #[error("Token {position} ('{token}') is not a valid {expected}")]
    InvalidToken {
        position: usize,
        token: String,
        expected: &'static str,
    },

    #[error("Expected {expected} values, got {got}")]
    WrongCount { expected: usize, got: usize },

    #[error("Value {value} at position {position} is out of range: {reason}")]
    OutOfRange {
        position: usize,
        value: String,
        reason: &'static str,
    },

    #[error("{got} values cannot be split into {rows} rows")]
    RaggedRows { rows: usize, got: usize },
}

/// Errors raised while solving an exercise.
#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Every bomb exploded; the tested fraction is undefined")]
    NoUnexplodedBombs,

    #[error("Probe samples {first:?} and {second:?} do not identify a door")]
    UndecodableProbe { first: Vec<u8>, second: Vec<u8> },

    #[error("Optimizer parameter count mismatch: expected {expected}, got {got}")]
    ParameterCount { expected: usize, got: usize },

    #[error("Circuit error: {0}")]
    Ir(#[from] qforge_ir::IrError),

    #[error("Simulation error: {0}")]
    Sim(#[from] qforge_sim::SimError),

    #[error("Chemistry error: {0}")]
    Chem(#[from] qforge_chem::ChemError),
}

/// Result type for challenge operations.
pub type ChallengeResult<T> = Result<T, ChallengeError>;

//! Error types for the chemistry crate.

use thiserror::Error;

/// Errors produced while building molecular Hamiltonians.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChemError {
    /// The molecule has no atoms.
    #[error("Molecule has no atoms")]
    EmptyMolecule,

    /// Only elements with a tabulated basis are supported.
    #[error("No STO-3G basis for element '{0}'")]
    UnsupportedElement(String),

    /// Symbols and coordinates differ in count.
    #[error("{symbols} symbols but {coordinates} coordinates")]
    GeometryMismatch {
        /// Number of symbols.
        symbols: usize,
        /// Number of coordinate triples.
        coordinates: usize,
    },

    /// Restricted Hartree-Fock needs paired electrons.
    #[error("Restricted Hartree-Fock needs an even electron count, got {0}")]
    OddElectronCount(usize),

    /// The Fock-space matrix grows as 4^orbitals.
    #[error("{0} spin orbitals is too many for a dense Hamiltonian")]
    TooManyOrbitals(usize),

    /// SCF iterations did not reach the tolerance.
    #[error("SCF did not converge in {iterations} iterations (last change {delta:e})")]
    ScfNotConverged {
        /// Iterations run.
        iterations: usize,
        /// Energy change in the last iteration.
        delta: f64,
    },

    /// The overlap matrix is singular.
    #[error("Overlap matrix is not positive definite")]
    SingularOverlap,

    /// Building the qubit operator failed.
    #[error("Simulation error: {0}")]
    Sim(#[from] qforge_sim::SimError),
}

/// Result type for chemistry operations.
pub type ChemResult<T> = Result<T, ChemError>;

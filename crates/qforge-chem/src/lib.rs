//! `qforge-chem`: minimal-basis electronic structure for small molecules.
//!
//! The pipeline is the textbook one:
//!
//! 1. [`basis::sto3g`] places a contracted 1s Gaussian on every atom
//! 2. [`integrals`] evaluates overlap, kinetic, nuclear-attraction and
//!    two-electron integrals
//! 3. [`scf::rhf`] solves the closed-shell Hartree-Fock equations
//! 4. [`fermion`] builds the second-quantised Hamiltonian over interleaved
//!    spin orbitals and maps it to qubits with Jordan-Wigner
//!
//! [`molecular_hamiltonian`] runs all four steps.
//!
//! ```rust
//! use qforge_chem::{Molecule, molecular_hamiltonian};
//!
//! let h2 = Molecule::h2(0.7).unwrap();
//! let ham = molecular_hamiltonian(&h2).unwrap();
//! assert_eq!(ham.num_qubits, 4);
//! assert!(ham.fci_energy() < ham.hf_energy);
//! ```

pub mod basis;
pub mod error;
pub mod fermion;
pub mod integrals;
pub mod molecular;
pub mod molecule;
pub mod scf;

pub use error::{ChemError, ChemResult};
pub use molecular::{MolecularHamiltonian, molecular_hamiltonian};
pub use molecule::Molecule;
pub use scf::{RhfResult, ScfOptions, rhf};

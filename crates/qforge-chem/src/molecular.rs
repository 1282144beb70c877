//! End-to-end molecular Hamiltonian.

use nalgebra::DMatrix;
use num_complex::Complex64;
use qforge_sim::Hamiltonian;
use tracing::info;

use crate::error::ChemResult;
use crate::fermion::{SpinOrbitalIntegrals, fock_space_matrix, pauli_decomposition};
use crate::molecule::Molecule;
use crate::scf::{ScfOptions, rhf};

/// Coefficients below this are dropped from the Pauli form.
const PAULI_CUTOFF: f64 = 1e-10;

/// Qubit Hamiltonian of a molecule, in both dense and Pauli form.
#[derive(Debug, Clone)]
pub struct MolecularHamiltonian {
    /// Dense matrix over the occupation basis.
    pub matrix: DMatrix<f64>,
    /// The same operator as a Pauli sum.
    pub pauli: Hamiltonian,
    /// RHF total energy.
    pub hf_energy: f64,
    /// Nuclear repulsion, included in both forms.
    pub nuclear_repulsion: f64,
    /// Number of qubits (spin orbitals).
    pub num_qubits: usize,
}

impl MolecularHamiltonian {
    /// The dense matrix with complex entries.
    pub fn complex_matrix(&self) -> DMatrix<Complex64> {
        self.matrix.map(|v| Complex64::new(v, 0.0))
    }

    /// Exact ground-state energy (full CI in the basis).
    pub fn fci_energy(&self) -> f64 {
        self.matrix
            .clone()
            .symmetric_eigenvalues()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}

/// RHF, integral transformation and Jordan-Wigner mapping in one call.
pub fn molecular_hamiltonian(molecule: &Molecule) -> ChemResult<MolecularHamiltonian> {
    let scf = rhf(molecule, ScfOptions::default())?;
    let ints = SpinOrbitalIntegrals::from_rhf(&scf)?;
    let matrix = fock_space_matrix(&ints);
    let pauli = pauli_decomposition(&matrix, PAULI_CUTOFF)?;
    info!(
        qubits = ints.num_spin_orbitals(),
        terms = pauli.n_terms(),
        hf_energy = scf.energy,
        "built molecular Hamiltonian"
    );
    Ok(MolecularHamiltonian {
        matrix,
        pauli,
        hf_energy: scf.energy,
        nuclear_repulsion: scf.nuclear_repulsion,
        num_qubits: ints.num_spin_orbitals(),
    })
}

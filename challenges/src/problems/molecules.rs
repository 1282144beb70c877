//! Molecular Hamiltonians for the chemistry exercises.

use qforge_chem::{MolecularHamiltonian, Molecule, molecular_hamiltonian};

use crate::error::ChallengeResult;

/// H2 with the nuclei at `(0, 0, ±coord)` bohr, in STO-3G, on 4 qubits.
pub fn h2_hamiltonian(coord: f64) -> ChallengeResult<MolecularHamiltonian> {
    let molecule = Molecule::h2(coord)?;
    Ok(molecular_hamiltonian(&molecule)?)
}

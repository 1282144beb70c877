//! H2 in STO-3G against textbook values.

use approx::assert_relative_eq;
use qforge_chem::{Molecule, molecular_hamiltonian};

#[test]
fn test_h2_hf_and_fci_energies() {
    let ham = molecular_hamiltonian(&Molecule::h2(0.7).unwrap()).unwrap();
    assert_relative_eq!(ham.hf_energy, -1.1167, epsilon = 1e-3);
    assert_relative_eq!(ham.fci_energy(), -1.1373, epsilon = 1e-3);
    assert_relative_eq!(ham.nuclear_repulsion, 1.0 / 1.4, epsilon = 1e-12);
}

#[test]
fn test_hf_determinant_energy_matches_scf() {
    let ham = molecular_hamiltonian(&Molecule::h2(0.7).unwrap()).unwrap();
    // |1100>: both electrons in the bonding orbital.
    assert_relative_eq!(ham.matrix[(0b1100, 0b1100)], ham.hf_energy, epsilon = 1e-8);
}

#[test]
fn test_matrix_is_symmetric() {
    let ham = molecular_hamiltonian(&Molecule::h2(0.7).unwrap()).unwrap();
    let diff = &ham.matrix - ham.matrix.transpose();
    assert!(diff.iter().all(|v| v.abs() < 1e-12));
}

#[test]
fn test_pauli_form_matches_dense_matrix() {
    let ham = molecular_hamiltonian(&Molecule::h2(0.7).unwrap()).unwrap();
    let rebuilt = ham.pauli.to_matrix(ham.num_qubits).unwrap();
    let dense = ham.complex_matrix();
    let max_err = (rebuilt - dense).iter().map(|c| c.norm()).fold(0.0, f64::max);
    assert!(max_err < 1e-9);
}

#[test]
fn test_lowest_triplet_energy() {
    let ham = molecular_hamiltonian(&Molecule::h2(0.7).unwrap()).unwrap();
    // Block on |1001>, |0110>: E = h11 + h22 + J12 -/+ K12 + 1/R.
    let diag = ham.matrix[(0b1001, 0b1001)];
    let exchange = ham.matrix[(0b1001, 0b0110)].abs();
    assert_relative_eq!(diag, ham.matrix[(0b0110, 0b0110)], epsilon = 1e-10);
    assert_relative_eq!(diag - exchange, -0.5318, epsilon = 2e-3);
}

#[test]
fn test_energy_rises_when_stretched() {
    let eq = molecular_hamiltonian(&Molecule::h2(0.7).unwrap()).unwrap();
    let far = molecular_hamiltonian(&Molecule::h2(1.5).unwrap()).unwrap();
    assert!(far.fci_energy() > eq.fci_energy());
}

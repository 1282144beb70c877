//! Circuit generators for the exercises.

pub mod basics;
pub mod entanglement;
pub mod givens;
pub mod oracles;
pub mod qml;
pub mod qram;
pub mod vqe;

pub use entanglement::{Round, chsh_circuit, tardigrade_free_state, tardigrade_state};
pub use givens::{triple_excitation_matrix, triple_givens_circuit};
pub use oracles::{car_oracle, car_probes, deutsch_jozsa_circuit, deutsch_jozsa_oracle};
pub use qml::ising_classifier;
pub use qram::{controlled_rotation_matrix, qram_circuit};
pub use vqe::double_excitation_ansatz;

//! Problem definitions: molecules and datasets.

pub mod ising;
pub mod molecules;

pub use ising::{IsingDataset, accuracy, square_loss};
pub use molecules::h2_hamiltonian;

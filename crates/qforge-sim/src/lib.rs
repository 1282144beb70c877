//! `qforge-sim`: statevector simulation for small variational circuits.
//!
//! - [`Statevector`] applies every gate of a [`qforge_ir::Circuit`], with wire 0
//!   as the most significant bit of a basis index
//! - [`Device`] wraps the engine with a register size, optional shots and a
//!   seeded RNG, and exposes the usual measurement functions
//! - [`hamiltonian`] and [`Observable`] describe what is measured
//! - [`grouping`] merges Pauli words into jointly measurable sets
//!
//! # Quick start
//!
//! ```rust
//! use qforge_ir::Circuit;
//! use qforge_sim::{Device, Observable};
//!
//! let dev = Device::new("default", 2).unwrap();
//! let bell = Circuit::bell().unwrap();
//!
//! let probs = dev.probs(&bell, &[0, 1]).unwrap();
//! assert!((probs[0] - 0.5).abs() < 1e-12);
//! assert!((dev.expval(&bell, &Observable::z(0)).unwrap()).abs() < 1e-12);
//! ```

pub mod density;
pub mod device;
pub mod error;
pub mod grouping;
pub mod hamiltonian;
pub mod observable;
pub mod statevector;

pub use density::{purity, second_renyi_entropy};
pub use device::Device;
pub use error::{SimError, SimResult};
pub use grouping::{PauliWord, compression_ratio, group_words};
pub use hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
pub use observable::{Observable, Outcome};
pub use statevector::Statevector;

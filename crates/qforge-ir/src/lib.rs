//! qforge Circuit Intermediate Representation
//!
//! Core data structures for describing the small variational circuits that the
//! simulator executes.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] and [`Qubit`], with optional wire labels
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, excitations, ...) and
//!   [`CustomGate`] for dense user unitaries
//! - **Parameters**: [`ParameterExpression`] for symbolic angles bound per evaluation
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] builder API
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qforge_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use qforge_ir::{Bindings, Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("variational", 1);
//! circuit.rx("theta", QubitId(0)).unwrap();
//! assert_eq!(circuit.parameters(), vec!["theta".to_string()]);
//!
//! let mut bindings = Bindings::default();
//! bindings.insert("theta".into(), 0.5);
//! let bound = circuit.bind_parameters(&bindings);
//! assert!(!bound.is_parameterized());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase gates |
//! | `Rx`, `Ry`, `Rz`, `P` | 1 | Rotation gates |
//! | `U` | 1 | Universal single-qubit gate U3(θ,φ,λ) |
//! | `CX`, `CY`, `CZ` | 2 | Controlled Paulis |
//! | `CRx`, `CRy`, `CRz` | 2 | Controlled rotations |
//! | `Swap` | 2 | SWAP gate |
//! | `SingleExcitation` | 2 | Givens rotation on `|01⟩`/`|10⟩` |
//! | `CCX`, `CSwap` | 3 | Toffoli and Fredkin |
//! | `DoubleExcitation` | 4 | Givens rotation on `|0011⟩`/`|1100⟩` |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use parameter::{Bindings, ParameterExpression};
pub use qubit::{Qubit, QubitId};

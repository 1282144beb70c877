//! Qubit identifiers and wire labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit within a circuit.
///
/// Ids are dense: a circuit with `n` wires owns `QubitId(0)..QubitId(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The id as a wire index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

/// A wire of the circuit with an optional human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    /// The unique identifier.
    pub id: QubitId,
    /// Label used to address the wire by name (e.g. `"sol"`).
    pub label: Option<String>,
}

impl Qubit {
    /// Create a new qubit with just an id.
    pub fn new(id: QubitId) -> Self {
        Self { id, label: None }
    }

    /// Create a new labelled qubit.
    pub fn labelled(id: QubitId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: Some(label.into()),
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        let q = Qubit::new(QubitId(0));
        assert_eq!(format!("{q}"), "q0");

        let sol = Qubit::labelled(QubitId(2), "sol");
        assert_eq!(format!("{sol}"), "sol");
    }

    #[test]
    fn test_index() {
        assert_eq!(QubitId(5).index(), 5);
        assert_eq!(QubitId::from(3usize), QubitId(3));
    }
}

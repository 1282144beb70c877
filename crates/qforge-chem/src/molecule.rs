//! Molecular geometry.

use serde::{Deserialize, Serialize};

use crate::error::{ChemError, ChemResult};

/// Atoms with positions in bohr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    symbols: Vec<String>,
    coordinates: Vec<[f64; 3]>,
    charge: i32,
}

impl Molecule {
    /// Create a neutral molecule.
    pub fn new<S: Into<String>>(
        symbols: impl IntoIterator<Item = S>,
        coordinates: Vec<[f64; 3]>,
    ) -> ChemResult<Self> {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(ChemError::EmptyMolecule);
        }
        if symbols.len() != coordinates.len() {
            return Err(ChemError::GeometryMismatch {
                symbols: symbols.len(),
                coordinates: coordinates.len(),
            });
        }
        for s in &symbols {
            atomic_number(s)?;
        }
        Ok(Self {
            symbols,
            coordinates,
            charge: 0,
        })
    }

    /// H2 with the atoms at `z = ±coord`.
    pub fn h2(coord: f64) -> ChemResult<Self> {
        Self::new(["H", "H"], vec![[0.0, 0.0, -coord], [0.0, 0.0, coord]])
    }

    /// Set the net charge.
    #[must_use]
    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    /// Element symbols.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Positions in bohr.
    pub fn coordinates(&self) -> &[[f64; 3]] {
        &self.coordinates
    }

    /// Nuclear charges.
    pub fn nuclear_charges(&self) -> Vec<f64> {
        self.symbols
            .iter()
            .map(|s| f64::from(atomic_number(s).unwrap_or(0)))
            .collect()
    }

    /// Number of electrons.
    pub fn num_electrons(&self) -> usize {
        let protons: i64 = self
            .symbols
            .iter()
            .map(|s| i64::from(atomic_number(s).unwrap_or(0)))
            .sum();
        usize::try_from(protons - i64::from(self.charge)).unwrap_or(0)
    }

    /// Classical repulsion between the nuclei.
    pub fn nuclear_repulsion(&self) -> f64 {
        let z = self.nuclear_charges();
        let mut e = 0.0;
        for i in 0..self.coordinates.len() {
            for j in (i + 1)..self.coordinates.len() {
                e += z[i] * z[j] / distance(&self.coordinates[i], &self.coordinates[j]);
            }
        }
        e
    }
}

/// Atomic number of a supported element.
pub fn atomic_number(symbol: &str) -> ChemResult<u32> {
    match symbol {
        "H" => Ok(1),
        other => Err(ChemError::UnsupportedElement(other.to_string())),
    }
}

pub(crate) fn distance_sq(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

pub(crate) fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    distance_sq(a, b).sqrt()
}

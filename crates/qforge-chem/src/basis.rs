//! STO-3G contracted Gaussian basis.

use std::f64::consts::PI;

use crate::error::ChemResult;
use crate::molecule::{Molecule, atomic_number};

/// Hydrogen 1s exponents.
const H_1S_EXPONENTS: [f64; 3] = [3.425_250_91, 0.623_913_73, 0.168_855_40];
/// Hydrogen 1s contraction coefficients.
const H_1S_COEFFICIENTS: [f64; 3] = [0.154_328_97, 0.535_328_14, 0.444_634_54];

/// One normalised s-type Gaussian `c · exp(-α r²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    /// Exponent α.
    pub exponent: f64,
    /// Coefficient including the primitive normalisation.
    pub coefficient: f64,
}

/// A contracted s-type basis function centred on an atom.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractedGaussian {
    /// Centre in bohr.
    pub center: [f64; 3],
    /// Primitives of the contraction.
    pub primitives: Vec<Primitive>,
}

impl ContractedGaussian {
    /// Build a normalised contraction from raw exponents and coefficients.
    pub fn s_type(center: [f64; 3], exponents: &[f64], coefficients: &[f64]) -> Self {
        let mut primitives: Vec<Primitive> = exponents
            .iter()
            .zip(coefficients)
            .map(|(&a, &d)| Primitive {
                exponent: a,
                coefficient: d * (2.0 * a / PI).powf(0.75),
            })
            .collect();

        let mut self_overlap = 0.0;
        for p in &primitives {
            for q in &primitives {
                self_overlap +=
                    p.coefficient * q.coefficient * (PI / (p.exponent + q.exponent)).powf(1.5);
            }
        }
        let norm = self_overlap.sqrt().recip();
        for p in &mut primitives {
            p.coefficient *= norm;
        }
        Self { center, primitives }
    }
}

/// One STO-3G function per hydrogen atom, in atom order.
pub fn sto3g(molecule: &Molecule) -> ChemResult<Vec<ContractedGaussian>> {
    molecule
        .symbols()
        .iter()
        .zip(molecule.coordinates())
        .map(|(symbol, center)| {
            atomic_number(symbol)?;
            Ok(ContractedGaussian::s_type(
                *center,
                &H_1S_EXPONENTS,
                &H_1S_COEFFICIENTS,
            ))
        })
        .collect()
}

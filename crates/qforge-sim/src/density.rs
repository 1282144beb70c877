//! Density-matrix quantities.

use nalgebra::DMatrix;
use num_complex::Complex64;

/// Second Rényi entropy computed from the diagonal of `rho`:
/// `-ln Σ_i ρ_ii²`.
///
/// Only the populations enter the sum, so the value depends on the basis
/// `rho` is expressed in.
pub fn second_renyi_entropy(rho: &DMatrix<Complex64>) -> f64 {
    let sum: Complex64 = rho.diagonal().iter().map(|d| d * d).sum();
    -sum.ln().re
}

/// Purity `tr(ρ²)`.
pub fn purity(rho: &DMatrix<Complex64>) -> f64 {
    (rho * rho).trace().re
}

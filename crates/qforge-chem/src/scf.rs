//! Restricted Hartree-Fock.

use nalgebra::{DMatrix, SymmetricEigen};
use tracing::{debug, info};

use crate::basis::sto3g;
use crate::error::{ChemError, ChemResult};
use crate::integrals::AoIntegrals;
use crate::molecule::Molecule;

/// SCF loop settings.
#[derive(Debug, Clone, Copy)]
pub struct ScfOptions {
    /// Iteration cap.
    pub max_iterations: usize,
    /// Convergence threshold on the energy change.
    pub tolerance: f64,
}

impl Default for ScfOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-10,
        }
    }
}

/// Converged RHF solution.
#[derive(Debug, Clone)]
pub struct RhfResult {
    /// Total energy including nuclear repulsion.
    pub energy: f64,
    /// Nuclear repulsion energy.
    pub nuclear_repulsion: f64,
    /// Orbital energies, ascending.
    pub orbital_energies: Vec<f64>,
    /// MO coefficients, one orbital per column.
    pub coefficients: DMatrix<f64>,
    /// Closed-shell density `2 C_occ C_occᵀ`.
    pub density: DMatrix<f64>,
    /// Number of doubly occupied orbitals.
    pub num_occupied: usize,
    /// Iterations used.
    pub iterations: usize,
    /// Atomic-orbital integrals.
    pub integrals: AoIntegrals,
}

impl RhfResult {
    /// Core Hamiltonian in the MO basis.
    pub fn mo_core(&self) -> DMatrix<f64> {
        self.coefficients.transpose() * &self.integrals.core * &self.coefficients
    }

    /// Electron repulsion `(ij|kl)` in the MO basis, flattened like
    /// [`AoIntegrals::eri`].
    pub fn mo_eri(&self) -> Vec<f64> {
        let n = self.integrals.n;
        let c = &self.coefficients;
        let idx = |a: usize, b: usize, e: usize, d: usize| ((a * n + b) * n + e) * n + d;

        // Four quarter transformations, one index at a time.
        let mut t1 = vec![0.0; n.pow(4)];
        for i in 0..n {
            for nu in 0..n {
                for la in 0..n {
                    for si in 0..n {
                        t1[idx(i, nu, la, si)] = (0..n)
                            .map(|mu| c[(mu, i)] * self.integrals.eri(mu, nu, la, si))
                            .sum();
                    }
                }
            }
        }
        let mut t2 = vec![0.0; n.pow(4)];
        for i in 0..n {
            for j in 0..n {
                for la in 0..n {
                    for si in 0..n {
                        t2[idx(i, j, la, si)] =
                            (0..n).map(|nu| c[(nu, j)] * t1[idx(i, nu, la, si)]).sum();
                    }
                }
            }
        }
        let mut t3 = vec![0.0; n.pow(4)];
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    for si in 0..n {
                        t3[idx(i, j, k, si)] =
                            (0..n).map(|la| c[(la, k)] * t2[idx(i, j, la, si)]).sum();
                    }
                }
            }
        }
        let mut out = vec![0.0; n.pow(4)];
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    for l in 0..n {
                        out[idx(i, j, k, l)] =
                            (0..n).map(|si| c[(si, l)] * t3[idx(i, j, k, si)]).sum();
                    }
                }
            }
        }
        out
    }
}

/// `S^{-1/2}` by symmetric orthogonalisation.
fn symmetric_orthogonaliser(s: &DMatrix<f64>) -> ChemResult<DMatrix<f64>> {
    let eigen = SymmetricEigen::new(s.clone());
    if eigen.eigenvalues.iter().any(|&v| v < 1e-10) {
        return Err(ChemError::SingularOverlap);
    }
    let inv_sqrt = DMatrix::from_diagonal(&eigen.eigenvalues.map(|v| v.sqrt().recip()));
    Ok(&eigen.eigenvectors * inv_sqrt * eigen.eigenvectors.transpose())
}

/// Eigen-decomposition with eigenvalues sorted ascending.
fn sorted_eigen(m: DMatrix<f64>) -> (Vec<f64>, DMatrix<f64>) {
    let eigen = SymmetricEigen::new(m);
    let mut order: Vec<usize> = (0..eigen.eigenvalues.len()).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[a]
            .partial_cmp(&eigen.eigenvalues[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let values = order.iter().map(|&i| eigen.eigenvalues[i]).collect();
    let columns: Vec<_> = order.iter().map(|&i| eigen.eigenvectors.column(i)).collect();
    (values, DMatrix::from_columns(&columns))
}

fn fock(ints: &AoIntegrals, density: &DMatrix<f64>) -> DMatrix<f64> {
    let n = ints.n;
    let mut f = ints.core.clone();
    for mu in 0..n {
        for nu in 0..n {
            let mut g = 0.0;
            for la in 0..n {
                for si in 0..n {
                    g += density[(la, si)]
                        * (ints.eri(mu, nu, la, si) - 0.5 * ints.eri(mu, la, nu, si));
                }
            }
            f[(mu, nu)] += g;
        }
    }
    f
}

/// Run closed-shell Hartree-Fock in the STO-3G basis.
pub fn rhf(molecule: &Molecule, options: ScfOptions) -> ChemResult<RhfResult> {
    let electrons = molecule.num_electrons();
    if electrons % 2 != 0 {
        return Err(ChemError::OddElectronCount(electrons));
    }
    let num_occupied = electrons / 2;
    let basis = sto3g(molecule)?;
    let ints = AoIntegrals::compute(molecule, &basis);
    let n = ints.n;
    let x = symmetric_orthogonaliser(&ints.overlap)?;
    let nuclear_repulsion = molecule.nuclear_repulsion();

    let mut density = DMatrix::<f64>::zeros(n, n);
    let mut energy = 0.0;
    let mut delta = f64::INFINITY;

    for iteration in 1..=options.max_iterations {
        let f = fock(&ints, &density);
        let f_ortho = x.transpose() * &f * &x;
        let (orbital_energies, c_ortho) = sorted_eigen(f_ortho);
        let coefficients = &x * c_ortho;

        let occ = coefficients.columns(0, num_occupied);
        let new_density = 2.0 * &occ * occ.transpose();

        let h_plus_f = &ints.core + fock(&ints, &new_density);
        let electronic = 0.5 * new_density.component_mul(&h_plus_f).sum();
        let new_energy = electronic + nuclear_repulsion;
        delta = (new_energy - energy).abs();
        let density_change = (&new_density - &density).amax();
        debug!(iteration, energy = new_energy, delta, "SCF iteration");

        energy = new_energy;
        density = new_density;

        if delta < options.tolerance && density_change < options.tolerance.sqrt() {
            info!(iterations = iteration, energy, "SCF converged");
            return Ok(RhfResult {
                energy,
                nuclear_repulsion,
                orbital_energies,
                coefficients,
                density,
                num_occupied,
                iterations: iteration,
                integrals: ints,
            });
        }
    }

    Err(ChemError::ScfNotConverged {
        iterations: options.max_iterations,
        delta,
    })
}

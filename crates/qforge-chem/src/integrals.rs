//! One- and two-electron integrals over s-type Gaussians.
//!
//! Gaussian product theorem: two s Gaussians with exponents `a`, `b` centred
//! on `A`, `B` combine into one with exponent `p = a + b` centred on
//! `P = (aA + bB) / p`, scaled by `exp(-ab/p |A-B|²)`.

use nalgebra::DMatrix;
use std::f64::consts::PI;

use crate::basis::{ContractedGaussian, Primitive};
use crate::molecule::{Molecule, distance_sq};

/// Boys function of order zero, `F0(t) = ∫₀¹ exp(-t u²) du`.
pub fn boys_f0(t: f64) -> f64 {
    if t < 1e-12 {
        return 1.0 - t / 3.0;
    }
    if t > 30.0 {
        return 0.5 * (PI / t).sqrt();
    }
    // F0(t) = exp(-t) Σ_k (2t)^k / (2k+1)!!
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut k = 0.0;
    while term > 1e-17 * sum {
        k += 1.0;
        term *= 2.0 * t / (2.0 * k + 1.0);
        sum += term;
    }
    (-t).exp() * sum
}

fn product_center(a: f64, ra: &[f64; 3], b: f64, rb: &[f64; 3]) -> [f64; 3] {
    let p = a + b;
    [
        (a * ra[0] + b * rb[0]) / p,
        (a * ra[1] + b * rb[1]) / p,
        (a * ra[2] + b * rb[2]) / p,
    ]
}

fn prim_overlap(a: f64, ra: &[f64; 3], b: f64, rb: &[f64; 3]) -> f64 {
    let p = a + b;
    (PI / p).powf(1.5) * (-a * b / p * distance_sq(ra, rb)).exp()
}

fn prim_kinetic(a: f64, ra: &[f64; 3], b: f64, rb: &[f64; 3]) -> f64 {
    let p = a + b;
    let mu = a * b / p;
    mu * (3.0 - 2.0 * mu * distance_sq(ra, rb)) * prim_overlap(a, ra, b, rb)
}

fn prim_nuclear(a: f64, ra: &[f64; 3], b: f64, rb: &[f64; 3], rc: &[f64; 3], z: f64) -> f64 {
    let p = a + b;
    let rp = product_center(a, ra, b, rb);
    -z * 2.0 * PI / p
        * (-a * b / p * distance_sq(ra, rb)).exp()
        * boys_f0(p * distance_sq(&rp, rc))
}

#[allow(clippy::too_many_arguments)]
fn prim_eri(
    a: f64,
    ra: &[f64; 3],
    b: f64,
    rb: &[f64; 3],
    c: f64,
    rc: &[f64; 3],
    d: f64,
    rd: &[f64; 3],
) -> f64 {
    let p = a + b;
    let q = c + d;
    let rp = product_center(a, ra, b, rb);
    let rq = product_center(c, rc, d, rd);
    2.0 * PI.powf(2.5) / (p * q * (p + q).sqrt())
        * (-a * b / p * distance_sq(ra, rb)).exp()
        * (-c * d / q * distance_sq(rc, rd)).exp()
        * boys_f0(p * q / (p + q) * distance_sq(&rp, &rq))
}

fn contract2(
    f: &ContractedGaussian,
    g: &ContractedGaussian,
    kernel: impl Fn(&Primitive, &Primitive) -> f64,
) -> f64 {
    let mut sum = 0.0;
    for p in &f.primitives {
        for q in &g.primitives {
            sum += p.coefficient * q.coefficient * kernel(p, q);
        }
    }
    sum
}

/// Overlap `⟨f|g⟩`.
pub fn overlap(f: &ContractedGaussian, g: &ContractedGaussian) -> f64 {
    contract2(f, g, |p, q| {
        prim_overlap(p.exponent, &f.center, q.exponent, &g.center)
    })
}

/// Kinetic energy `⟨f|-½∇²|g⟩`.
pub fn kinetic(f: &ContractedGaussian, g: &ContractedGaussian) -> f64 {
    contract2(f, g, |p, q| {
        prim_kinetic(p.exponent, &f.center, q.exponent, &g.center)
    })
}

/// Attraction of `f g` to a nucleus of charge `z` at `center`.
pub fn nuclear_attraction(
    f: &ContractedGaussian,
    g: &ContractedGaussian,
    center: &[f64; 3],
    z: f64,
) -> f64 {
    contract2(f, g, |p, q| {
        prim_nuclear(p.exponent, &f.center, q.exponent, &g.center, center, z)
    })
}

/// Electron repulsion `(fg|hk)` in chemists' notation.
pub fn electron_repulsion(
    f: &ContractedGaussian,
    g: &ContractedGaussian,
    h: &ContractedGaussian,
    k: &ContractedGaussian,
) -> f64 {
    let mut sum = 0.0;
    for p in &f.primitives {
        for q in &g.primitives {
            for r in &h.primitives {
                for s in &k.primitives {
                    sum += p.coefficient
                        * q.coefficient
                        * r.coefficient
                        * s.coefficient
                        * prim_eri(
                            p.exponent, &f.center, q.exponent, &g.center, r.exponent,
                            &h.center, s.exponent, &k.center,
                        );
                }
            }
        }
    }
    sum
}

/// Atomic-orbital integrals for a molecule.
#[derive(Debug, Clone)]
pub struct AoIntegrals {
    /// Overlap matrix S.
    pub overlap: DMatrix<f64>,
    /// Core Hamiltonian `T + V`.
    pub core: DMatrix<f64>,
    /// Electron repulsion `(μν|λσ)`, flattened as `((μ·n + ν)·n + λ)·n + σ`.
    pub eri: Vec<f64>,
    /// Number of basis functions.
    pub n: usize,
}

impl AoIntegrals {
    /// Compute every integral for `basis` placed in `molecule`.
    pub fn compute(molecule: &Molecule, basis: &[ContractedGaussian]) -> Self {
        let n = basis.len();
        let charges = molecule.nuclear_charges();
        let mut s = DMatrix::zeros(n, n);
        let mut core = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                s[(i, j)] = overlap(&basis[i], &basis[j]);
                let v: f64 = molecule
                    .coordinates()
                    .iter()
                    .zip(&charges)
                    .map(|(c, &z)| nuclear_attraction(&basis[i], &basis[j], c, z))
                    .sum();
                core[(i, j)] = kinetic(&basis[i], &basis[j]) + v;
            }
        }

        let mut eri = vec![0.0; n * n * n * n];
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    for l in 0..n {
                        eri[((i * n + j) * n + k) * n + l] =
                            electron_repulsion(&basis[i], &basis[j], &basis[k], &basis[l]);
                    }
                }
            }
        }
        Self {
            overlap: s,
            core,
            eri,
            n,
        }
    }

    /// `(ij|kl)`.
    #[inline]
    pub fn eri(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        let n = self.n;
        self.eri[((i * n + j) * n + k) * n + l]
    }
}

//! Integration tests for the device, observables and grouping.

use approx::assert_relative_eq;
use num_complex::Complex64;
use qforge_ir::{Circuit, CustomGate, QubitId};
use qforge_sim::{
    Device, Hamiltonian, HamiltonianTerm, Observable, PauliOp, PauliString, PauliWord,
    compression_ratio, group_words, second_renyi_entropy,
};
use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Circuit identities
// ---------------------------------------------------------------------------

#[test]
fn bell_state_probabilities() {
    let dev = Device::new("default", 2).unwrap();
    let probs = dev.probs(&Circuit::bell().unwrap(), &[]).unwrap();
    assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(probs[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(probs[2], 0.0, epsilon = 1e-12);
    assert_relative_eq!(probs[3], 0.5, epsilon = 1e-12);
}

#[test]
fn excitation_gates_preserve_norm() {
    let mut circuit = Circuit::with_size("givens", 6);
    circuit
        .x(QubitId(0))
        .unwrap()
        .x(QubitId(1))
        .unwrap()
        .h(QubitId(2))
        .unwrap()
        .single_excitation(0.37, QubitId(0), QubitId(5))
        .unwrap()
        .double_excitation(1.21, [QubitId(0), QubitId(1), QubitId(4), QubitId(5)])
        .unwrap();
    let state = Device::new("default", 6).unwrap().state(&circuit).unwrap();
    let norm: f64 = state.iter().map(|a| a.norm_sqr()).sum();
    assert_relative_eq!(norm, 1.0, epsilon = 1e-12);
}

#[test]
fn custom_ry_block_matches_cry() {
    let theta = 0.83;
    let (c, s) = ((theta / 2.0f64).cos(), (theta / 2.0f64).sin());
    let zero = Complex64::new(0.0, 0.0);
    let mut m = vec![zero; 16];
    m[0] = Complex64::new(1.0, 0.0);
    m[5] = Complex64::new(1.0, 0.0);
    m[10] = Complex64::new(c, 0.0);
    m[11] = Complex64::new(-s, 0.0);
    m[14] = Complex64::new(s, 0.0);
    m[15] = Complex64::new(c, 0.0);
    let gate = CustomGate::unitary("cry", 2, m).unwrap();

    let mut custom = Circuit::with_size("custom", 2);
    custom.h(QubitId(0)).unwrap().unitary(gate, &[QubitId(0), QubitId(1)]).unwrap();
    let mut standard = Circuit::with_size("standard", 2);
    standard.h(QubitId(0)).unwrap().cry(theta, QubitId(0), QubitId(1)).unwrap();

    let dev = Device::new("default", 2).unwrap();
    let a = dev.state(&custom).unwrap();
    let b = dev.state(&standard).unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert_relative_eq!((x - y).norm(), 0.0, epsilon = 1e-12);
    }
}

// ---------------------------------------------------------------------------
// Observables
// ---------------------------------------------------------------------------

#[test]
fn order_of_rotations_changes_x_expectation() {
    let (t1, t2) = (0.5, 0.9);
    let dev = Device::new("default", 1).unwrap();

    let mut first = Circuit::with_size("rx_then_ry", 1);
    first.rx(t1, QubitId(0)).unwrap().ry(t2, QubitId(0)).unwrap();
    let mut second = Circuit::with_size("ry_then_rx", 1);
    second.ry(t2, QubitId(0)).unwrap().rx(t1, QubitId(0)).unwrap();

    let x1 = dev.expval(&first, &Observable::x(0)).unwrap();
    let x2 = dev.expval(&second, &Observable::x(0)).unwrap();
    assert_relative_eq!(x1, t1.cos() * t2.sin(), epsilon = 1e-12);
    assert_relative_eq!(x2, t2.sin(), epsilon = 1e-12);
}

#[test]
fn hamiltonian_expectation_on_bell_pair() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::constant(0.25),
        HamiltonianTerm::zz(0, 1, 1.0),
        HamiltonianTerm::new(
            0.5,
            PauliString::from_ops([(0, PauliOp::X), (1, PauliOp::X)]),
        ),
    ]);
    let dev = Device::new("default", 2).unwrap();
    let e = dev.expval(&Circuit::bell().unwrap(), &Observable::Pauli(h)).unwrap();
    assert_relative_eq!(e, 1.75, epsilon = 1e-12);
}

#[test]
fn sampled_z_mean_approaches_expectation() {
    let mut circuit = Circuit::with_size("tilt", 1);
    circuit.ry(PI / 3.0, QubitId(0)).unwrap();
    let mut dev = Device::new("shots", 1).unwrap().with_shots(20_000).with_seed(11);
    let samples = dev.sample_observable(&circuit, &Observable::z(0)).unwrap();
    assert!(samples.iter().all(|&v| v == 1.0 || v == -1.0));
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!((mean - (PI / 3.0).cos()).abs() < 0.03);
}

#[test]
fn entropy_of_half_of_bell_pair() {
    let dev = Device::new("default", 2).unwrap();
    let rho = dev.density_matrix(&Circuit::bell().unwrap(), &[1]).unwrap();
    assert_relative_eq!(second_renyi_entropy(&rho), 2.0f64.ln(), epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn grouping_example_from_hamiltonian() {
    let words: Vec<PauliWord> = ["YIZI", "YIXI", "IXZI", "IIIZ", "ZZII"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let groups = group_words(&words);
    let as_text: Vec<String> = groups.iter().map(ToString::to_string).collect();
    assert_eq!(as_text, vec!["YXZZ", "YIXI", "ZZII"]);
    assert_relative_eq!(compression_ratio(&words, &groups).unwrap(), 0.4);
}

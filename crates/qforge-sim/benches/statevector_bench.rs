//! Benchmarks for the statevector engine
//!
//! Run with: cargo bench -p qforge-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qforge_ir::{Circuit, QubitId};
use qforge_sim::{Device, Hamiltonian, HamiltonianTerm, Observable, Statevector};

fn layered_circuit(n: u32, layers: usize) -> Circuit {
    let mut circuit = Circuit::with_size("layers", n);
    for layer in 0..layers {
        for q in 0..n {
            circuit
                .u(0.1 * layer as f64, 0.2, 0.3 * f64::from(q), QubitId(q))
                .unwrap();
        }
        for q in 0..n {
            circuit.cx(QubitId(q), QubitId((q + 1) % n)).unwrap();
        }
    }
    circuit
}

/// Benchmark full circuit execution
fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");

    for num_qubits in &[4u32, 8, 12, 16] {
        let circuit = layered_circuit(*num_qubits, 4);
        group.bench_with_input(
            BenchmarkId::new("layered_u3_cx", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| {
                    Statevector::from_circuit(black_box(circuit), circuit.num_qubits()).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark expectation values of Ising-type Hamiltonians
fn bench_expval(c: &mut Criterion) {
    let mut group = c.benchmark_group("expval");

    for num_qubits in &[4u32, 8, 12] {
        let n = *num_qubits;
        let circuit = layered_circuit(n, 2);
        let h: Hamiltonian = (0..n)
            .map(|q| HamiltonianTerm::zz(q, (q + 1) % n, -1.0))
            .chain((0..n).map(|q| HamiltonianTerm::x(q, 0.5)))
            .collect();
        let obs = Observable::Pauli(h);
        let dev = Device::new("bench", n as usize).unwrap();

        group.bench_with_input(BenchmarkId::new("ising", n), &circuit, |b, circuit| {
            b.iter(|| dev.expval(black_box(circuit), &obs).unwrap());
        });
    }

    group.finish();
}

/// Benchmark reduced density matrices
fn bench_density(c: &mut Criterion) {
    let circuit = layered_circuit(10, 3);
    let sv = Statevector::from_circuit(&circuit, 10).unwrap();

    c.bench_function("reduced_density_3_of_10", |b| {
        b.iter(|| sv.reduced_density_matrix(black_box(&[0, 4, 9])).unwrap());
    });
}

criterion_group!(benches, bench_execute, bench_expval, bench_density);
criterion_main!(benches);

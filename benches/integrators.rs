//! Integrator benchmarks: raw step cost and long-run conservation error.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dustdrift::prelude::*;
use std::hint::black_box;

/// Central force problem (Kepler orbits): a = -mu/r^3 * r_vec
struct CentralForce {
    mu: Scalar,
}

impl AccelerationField for CentralForce {
    fn at(&self, position: Vector) -> Vector {
        let r = position.length();
        -position * (self.mu / (r * r * r))
    }
}

fn registry_integrators() -> Vec<(String, Box<dyn Integrator>)> {
    let registry = IntegratorRegistry::default();
    registry
        .list_available()
        .into_iter()
        .filter_map(|name| registry.create(&name).ok().map(|i| (name, i)))
        .collect()
}

fn bench_step_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator_step");
    let field = CentralForce { mu: 1.0 };

    for (name, integrator) in registry_integrators() {
        group.bench_function(name.as_str(), |b| {
            b.iter(|| {
                let mut position = black_box(Vector::new(1.0, 0.0));
                let mut velocity = black_box(Vector::new(0.0, 1.0));
                integrator.step(&mut position, &mut velocity, &field, black_box(0.01));
                black_box((position, velocity))
            });
        });
    }
    group.finish();
}

fn bench_orbit_drift(c: &mut Criterion) {
    // Radius error after one circular period, reported as a duration so
    // criterion can plot it: lower is more accurate.
    let mut group = c.benchmark_group("orbit_drift");
    group.sample_size(10);
    let field = CentralForce { mu: 1.0 };
    let dt = 0.01;
    let steps = (2.0 * std::f64::consts::PI / dt as f64) as usize;

    for (name, integrator) in registry_integrators() {
        group.bench_function(BenchmarkId::new("one_period", name.as_str()), |b| {
            b.iter_custom(|iters| {
                let mut total_error = 0.0f64;
                for _ in 0..iters {
                    let mut position = Vector::new(1.0, 0.0);
                    let mut velocity = Vector::new(0.0, 1.0);
                    for _ in 0..steps {
                        integrator.step(&mut position, &mut velocity, &field, dt);
                    }
                    total_error += (position.length() as f64 - 1.0).abs();
                }
                std::time::Duration::from_nanos((total_error / iters as f64 * 1e9) as u64)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step_cost, bench_orbit_drift);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gravsim::{Body, Scales, Simulation, UpdateOrder, ultraviolet::DVec2};

/// `n` light bodies on a ring around a heavy center, all well inside the
/// screen so the benchmark measures the pairwise sweep, not boundary hits.
fn ring(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(Body::new(DVec2::zero(), DVec2::zero(), 0.02, 5.97e24, 6.371e6).unwrap());

    for i in 1..n {
        let a = i as f64 / (n - 1) as f64 * std::f64::consts::TAU;
        let (sin, cos) = a.sin_cos();
        let pos = DVec2::new(cos, sin) * 0.5;
        let vel = DVec2::new(-sin, cos) * 1000.0;
        bodies.push(Body::new(pos, vel, 0.001, 1.0e20, 1.0e5).unwrap());
    }

    bodies
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gravsim_step");

    for n in [2, 16, 128] {
        for order in [UpdateOrder::Sequential, UpdateOrder::Synchronous] {
            let mut sim = Simulation::with_params(ring(n), Scales::default(), 6.674e-11, order);
            group.throughput(Throughput::Elements((n * n) as u64));
            group.bench_with_input(BenchmarkId::new(format!("{order:?}"), n), &n, |b, _| {
                b.iter(|| sim.step());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pendsim_solver::integrator::{ForwardEuler, Integrator, RungeKutta4, Trapezoidal};
use pendsim_solver::systems::{PendulumConfig, PendulumSystem};

static DELTA_TIME: f64 = 0.004;

fn long_chain() -> PendulumSystem {
    PendulumSystem::new(PendulumConfig {
        particle_count: 64,
        ..PendulumConfig::default()
    })
}

pub fn eval_bench(c: &mut Criterion) {
    let system = long_chain();
    let state = system.state();
    c.bench_function("eval 64 particle chain", |b| {
        b.iter(|| system.eval_f(black_box(&state)))
    });
}

pub fn forward_euler_bench(c: &mut Criterion) {
    let system = long_chain();
    c.bench_function("forward euler step", |b| {
        b.iter(|| {
            let mut system = system.clone();
            ForwardEuler.step(black_box(&mut system), DELTA_TIME)
        })
    });
}

pub fn trapezoidal_bench(c: &mut Criterion) {
    let system = long_chain();
    c.bench_function("trapezoidal step", |b| {
        b.iter(|| {
            let mut system = system.clone();
            Trapezoidal.step(black_box(&mut system), DELTA_TIME)
        })
    });
}

pub fn runge_kutta_bench(c: &mut Criterion) {
    let system = long_chain();
    c.bench_function("runge kutta step", |b| {
        b.iter(|| {
            let mut system = system.clone();
            RungeKutta4.step(black_box(&mut system), DELTA_TIME)
        })
    });
}

criterion_group!(step_benches, eval_bench,
    forward_euler_bench, trapezoidal_bench, runge_kutta_bench);
criterion_main!(step_benches);

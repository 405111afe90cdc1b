use indicatif::ProgressBar;
use log::info;
use pendsim_core::{ParticleSystem, StateVector, StepError};
use pendsim_solver::integrator::{ForwardEuler, Integrator, RungeKutta4, Trapezoidal};
use pendsim_solver::systems::{PendulumConfig, PendulumSystem, SimpleSystem};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::args::{IntegratorChoose, SystemChoose};
use crate::render::ConsoleRenderer;

fn build_system(
    system: &SystemChoose,
    particle_count: Option<usize>,
    randomize: bool,
    seed: Option<u64>,
) -> Box<dyn ParticleSystem> {
    match system {
        SystemChoose::Simple => Box::new(SimpleSystem::new()),
        SystemChoose::Pendulum => {
            let mut config = PendulumConfig::default();
            if let Some(count) = particle_count {
                config.particle_count = count;
            }
            if randomize {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Box::new(PendulumSystem::randomized(config, &mut rng))
            } else {
                Box::new(PendulumSystem::new(config))
            }
        }
    }
}

fn build_integrator(integrate_method: &IntegratorChoose) -> Box<dyn Integrator> {
    match integrate_method {
        IntegratorChoose::ForwardEuler => Box::new(ForwardEuler),
        IntegratorChoose::Trapezoidal => Box::new(Trapezoidal),
        IntegratorChoose::RungeKutta4 => Box::new(RungeKutta4),
    }
}

/// Driver loop: step, then draw sampled frames. Returns the final state so
/// callers can inspect where the run ended. A step fault halts the run.
pub fn simulate(
    system: &SystemChoose,
    integrate_method: &IntegratorChoose,
    delta_time: f64,
    iteration_count: usize,
    sample_every: usize,
    particle_count: Option<usize>,
    randomize: bool,
    seed: Option<u64>,
) -> Result<StateVector, StepError> {
    let mut system = build_system(system, particle_count, randomize, seed);
    let integrator = build_integrator(integrate_method);
    info!(
        "{} particles, h = {} s, {} iterations",
        system.state().particle_count(),
        delta_time,
        iteration_count
    );
    let mut renderer = ConsoleRenderer::new();
    let pb = ProgressBar::new(iteration_count as u64);
    for iteration in 0..iteration_count {
        integrator.step(system.as_mut(), delta_time)?;
        if sample_every != 0 && (iteration + 1) % sample_every == 0 {
            renderer.begin_frame(iteration + 1);
            system.draw(&mut renderer);
        }
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} steps of {} s", iteration_count, delta_time));
    if sample_every == 0 || iteration_count % sample_every != 0 {
        renderer.begin_frame(iteration_count);
        system.draw(&mut renderer);
    }
    Ok(system.state())
}

use pendsim_core::{ParticleSystem, StepError};

use super::{commit, Integrator};

/// Heun's method: average of the derivative at the current state and at the
/// Euler-predicted end state.
///
/// Two derivative evaluations per step, second-order accurate.
pub struct Trapezoidal;

impl Integrator for Trapezoidal {
    fn step(&self, system: &mut dyn ParticleSystem, step_size: f64) -> Result<(), StepError> {
        let x0 = system.state();
        let f0 = system.eval_f(&x0)?;
        let predicted = x0.scaled_add(&f0, step_size)?;
        let f1 = system.eval_f(&predicted)?;
        let x1 = x0
            .scaled_add(&f0, step_size / 2.0)?
            .scaled_add(&f1, step_size / 2.0)?;
        commit(system, x1)
    }
}

use pendsim_core::{ParticleSystem, StepError};

use super::{commit, Integrator};

/// Classical fourth-order Runge-Kutta with the 1-2-2-1 weighting.
///
/// Four derivative evaluations per step: at the current state, twice at
/// half-step probes, once at a full-step probe.
pub struct RungeKutta4;

impl Integrator for RungeKutta4 {
    fn step(&self, system: &mut dyn ParticleSystem, step_size: f64) -> Result<(), StepError> {
        let x0 = system.state();
        let k1 = system.eval_f(&x0)?;
        let k2 = system.eval_f(&x0.scaled_add(&k1, step_size / 2.0)?)?;
        let k3 = system.eval_f(&x0.scaled_add(&k2, step_size / 2.0)?)?;
        let k4 = system.eval_f(&x0.scaled_add(&k3, step_size)?)?;
        let x1 = x0
            .scaled_add(&k1, step_size / 6.0)?
            .scaled_add(&k2, step_size / 3.0)?
            .scaled_add(&k3, step_size / 3.0)?
            .scaled_add(&k4, step_size / 6.0)?;
        commit(system, x1)
    }
}

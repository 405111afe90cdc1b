use log::trace;
use pendsim_core::{ParticleSystem, StepError};

use super::{commit, Integrator};

/// First-order explicit Euler: `x1 = x0 + h f(x0)`.
///
/// One derivative evaluation per step, local error O(h^2). Stable only for
/// step sizes small relative to the stiffest spring in the system.
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(&self, system: &mut dyn ParticleSystem, step_size: f64) -> Result<(), StepError> {
        let x0 = system.state();
        trace!("forward euler step h={}, {} slots", step_size, x0.slot_count());
        let f0 = system.eval_f(&x0)?;
        let x1 = x0.scaled_add(&f0, step_size)?;
        commit(system, x1)
    }
}

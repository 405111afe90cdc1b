mod euler;
mod rk4;
mod trapezoidal;

pub use euler::*;
pub use rk4::*;
pub use trapezoidal::*;

use pendsim_core::{ParticleSystem, StateVector, StepError};

/// Strategy that advances a [ParticleSystem] by one step of `step_size`
/// seconds.
///
/// Implementations keep no state between calls, so integrators and systems
/// can be swapped freely between steps. Concurrent steps on one system must
/// be serialized by the caller.
pub trait Integrator {
    fn step(&self, system: &mut dyn ParticleSystem, step_size: f64) -> Result<(), StepError>;
}

/// Reject candidate states containing NaN or infinities before they reach
/// the system; a rejected step leaves the system on its previous state.
fn commit(system: &mut dyn ParticleSystem, state: StateVector) -> Result<(), StepError> {
    if !state.is_finite() {
        return Err(StepError::NonFinite);
    }
    system.set_state(state)?;
    Ok(())
}

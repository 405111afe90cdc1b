use na::Vector3;

use crate::{Derivative, ShapeError, StateVector};

/// Contract every simulated system satisfies.
///
/// A system owns an interleaved position/velocity state vector and can
/// evaluate the time derivative of any state of matching shape. `eval_f` is a
/// pure function of its argument; multi-stage integrators rely on that to
/// probe intermediate states without disturbing the system.
pub trait ParticleSystem {
    /// Snapshot of the current state. Callers get their own copy.
    fn state(&self) -> StateVector;

    /// Replace the state wholesale. The replacement must have the same slot
    /// count as the current state.
    fn set_state(&mut self, state: StateVector) -> Result<(), ShapeError>;

    /// Time derivative of `state`: velocities in the even slots,
    /// accelerations in the odd ones. Must not read or mutate the system's
    /// own state.
    fn eval_f(&self, state: &StateVector) -> Result<Derivative, ShapeError>;

    /// Emit one drawable primitive per particle. Read-only with respect to
    /// the simulation.
    fn draw(&self, ctx: &mut dyn RenderContext);
}

/// Sink for drawable primitives, implemented by whatever renderer drives the
/// simulation loop. Systems set their material once per frame, then emit a
/// sphere per particle.
pub trait RenderContext {
    fn update_material(&mut self, color: Vector3<f32>);
    fn draw_sphere(&mut self, center: Vector3<f64>, radius: f64);
}

use na::Vector3;
use pendsim_core::{Derivative, ParticleSystem, RenderContext, ShapeError, StateVector};

const SPHERE_RADIUS: f64 = 0.075;

/// Single particle advected by the closed-form rotational field
/// `(x, y, z) -> (-y, x, 0)`: circles around the origin in the XY plane at
/// 1 rad/s.
///
/// Every slot of the state runs through the same field, so the velocity slot
/// carries no physical meaning here. The system exists to exercise
/// integrators against a trajectory with a known analytic solution.
#[derive(Clone, Debug)]
pub struct SimpleSystem {
    state: StateVector,
}

impl SimpleSystem {
    /// Particle at `(1, 0, 0)`, on the unit circle.
    pub fn new() -> Self {
        SimpleSystem {
            state: StateVector::from_pairs(&[(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros())]),
        }
    }
}

impl Default for SimpleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem for SimpleSystem {
    fn state(&self) -> StateVector {
        self.state.clone()
    }

    fn set_state(&mut self, state: StateVector) -> Result<(), ShapeError> {
        state.check_len(self.state.slot_count())?;
        self.state = state;
        Ok(())
    }

    fn eval_f(&self, state: &StateVector) -> Result<Derivative, ShapeError> {
        state.check_len(self.state.slot_count())?;
        let slots = state
            .slots()
            .iter()
            .map(|slot| Vector3::new(-slot.y, slot.x, 0.0))
            .collect();
        StateVector::from_slots(slots)
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        ctx.update_material(Vector3::new(0.4, 0.7, 1.0));
        ctx.draw_sphere(self.state.position(0), SPHERE_RADIUS);
    }
}

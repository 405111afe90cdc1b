use na::Vector3;
use pendsim_core::{Derivative, ParticleSystem, RenderContext, ShapeError, StateVector};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Force components below this magnitude are snapped to exactly zero to
/// suppress floating-point jitter at rest.
const EPSILON: f64 = 0.00001;
const SPHERE_RADIUS: f64 = 0.075;

/// Model constants of the spring chain. [Default] matches the reference
/// pendulum: four unit-mass particles, gravity along -Y, light viscous drag,
/// stiff short springs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PendulumConfig {
    pub particle_count: usize,
    pub gravity: Vector3<f64>,
    pub particle_mass: f64,
    pub drag_coefficient: f64,
    pub spring_stiffness: f64,
    pub rest_length: f64,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        PendulumConfig {
            particle_count: 4,
            gravity: Vector3::new(0.0, -9.8, 0.0),
            particle_mass: 1.0,
            drag_coefficient: 0.3,
            spring_stiffness: 32.0,
            rest_length: 0.15,
        }
    }
}

/// Linear spring between the particles with indices `a` and `b`. The order
/// of endpoints only fixes the sign convention of the displacement vector,
/// not the direction of the force.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub stiffness: f64,
    pub rest_length: f64,
}

/// Chain of point masses hanging from a fixed anchor, coupled in sequence by
/// linear springs, under gravity and viscous drag.
///
/// Particle 0 is the anchor. Its net force is cleared on every derivative
/// evaluation, so it never accelerates; its velocity is still integrated into
/// position. The pin therefore holds only because the anchor is constructed
/// at rest, and assigning it a nonzero velocity would make it drift.
#[derive(Clone, Debug)]
pub struct PendulumSystem {
    config: PendulumConfig,
    springs: Vec<Spring>,
    /// particle index -> indices into `springs`, built once at construction
    touching: Vec<Vec<usize>>,
    state: StateVector,
}

impl PendulumSystem {
    /// Chain at rest: every particle hangs `rest_length` below the previous
    /// one, so the initial spring stretch is zero everywhere.
    pub fn new(config: PendulumConfig) -> Self {
        let positions = (0..config.particle_count)
            .map(|i| Vector3::new(-0.5, 1.0 - i as f64 * config.rest_length, 0.0))
            .collect();
        Self::with_positions(config, positions)
    }

    /// Chain with randomized initial conditions: every particle below the
    /// anchor starts at a uniform height in `[-0.5, 0.5)`.
    pub fn randomized(config: PendulumConfig, rng: &mut impl Rng) -> Self {
        let mut positions = vec![Vector3::new(-0.5, 1.0, 0.0)];
        for _ in 1..config.particle_count {
            positions.push(Vector3::new(-0.5, rng.gen_range(-0.5..0.5), 0.0));
        }
        Self::with_positions(config, positions)
    }

    fn with_positions(config: PendulumConfig, positions: Vec<Vector3<f64>>) -> Self {
        let springs: Vec<Spring> = (1..config.particle_count)
            .map(|i| Spring {
                a: i - 1,
                b: i,
                stiffness: config.spring_stiffness,
                rest_length: config.rest_length,
            })
            .collect();
        let mut touching = vec![Vec::new(); config.particle_count];
        for (index, spring) in springs.iter().enumerate() {
            touching[spring.a].push(index);
            touching[spring.b].push(index);
        }
        let pairs: Vec<_> = positions
            .into_iter()
            .map(|position| (position, Vector3::zeros()))
            .collect();
        PendulumSystem {
            config,
            springs,
            touching,
            state: StateVector::from_pairs(&pairs),
        }
    }

    pub fn config(&self) -> &PendulumConfig {
        &self.config
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    fn net_force(&self, state: &StateVector, particle: usize) -> Vector3<f64> {
        // Anchor: forces cleared no matter what gravity, drag and the
        // springs would contribute.
        if particle == 0 {
            return Vector3::zeros();
        }
        let gravity = self.config.gravity * self.config.particle_mass;
        let drag = drag_force(self.config.drag_coefficient, &state.velocity(particle));
        let mut spring_sum = Vector3::zeros();
        for &index in &self.touching[particle] {
            spring_sum += spring_force(state, &self.springs[index], particle);
        }
        gravity + drag + spring_sum
    }

    fn draw_color(&self) -> Vector3<f32> {
        Vector3::new(0.73, 0.0, 0.83)
    }
}

impl ParticleSystem for PendulumSystem {
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
        let mut slots = Vec::with_capacity(state.slot_count());
        for particle in 0..state.particle_count() {
            slots.push(state.velocity(particle));
            slots.push(self.net_force(state, particle) / self.config.particle_mass);
        }
        StateVector::from_slots(slots)
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        ctx.update_material(self.draw_color());
        for particle in 0..self.state.particle_count() {
            ctx.draw_sphere(self.state.position(particle), SPHERE_RADIUS);
        }
    }
}

/// Hooke force on `particle` from one spring touching it. The other endpoint
/// is read from the spring itself.
fn spring_force(state: &StateVector, spring: &Spring, particle: usize) -> Vector3<f64> {
    let other = if spring.a == particle { spring.b } else { spring.a };
    let d = state.position(particle) - state.position(other);
    let len = d.magnitude();
    // Coincident endpoints leave the direction undefined; contribute nothing
    // rather than a NaN.
    if len == 0.0 {
        return Vector3::zeros();
    }
    let magnitude = -spring.stiffness * (len - spring.rest_length);
    if magnitude.abs() < EPSILON {
        return Vector3::zeros();
    }
    d * (magnitude / len)
}

/// `-c v`, with per-axis components under the jitter threshold snapped to
/// exactly zero.
fn drag_force(coefficient: f64, velocity: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        snap(coefficient * velocity.x),
        snap(coefficient * velocity.y),
        snap(coefficient * velocity.z),
    )
}

fn snap(component: f64) -> f64 {
    if component.abs() < EPSILON {
        0.0
    } else {
        -component
    }
}

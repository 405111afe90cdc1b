use na::Vector3;
use serde::{Deserialize, Serialize};

use crate::ShapeError;

/// Full configuration of a particle system at an instant.
///
/// Slots interleave positions and velocities: slot `2 * i` holds the position
/// of particle `i` and slot `2 * i + 1` its velocity. The slot count is even
/// and stays constant for the lifetime of a system instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    slots: Vec<Vector3<f64>>,
}

/// Time derivative of a [StateVector]: even slots hold velocities, odd slots
/// accelerations. Same shape law as the state itself.
pub type Derivative = StateVector;

impl StateVector {
    /// Build a state from interleaved position/velocity slots.
    pub fn from_slots(slots: Vec<Vector3<f64>>) -> Result<Self, ShapeError> {
        if slots.len() % 2 != 0 {
            return Err(ShapeError::OddLength { len: slots.len() });
        }
        Ok(StateVector { slots })
    }

    /// Build a state from (position, velocity) pairs, one pair per particle.
    pub fn from_pairs(pairs: &[(Vector3<f64>, Vector3<f64>)]) -> Self {
        let mut slots = Vec::with_capacity(pairs.len() * 2);
        for (position, velocity) in pairs {
            slots.push(*position);
            slots.push(*velocity);
        }
        StateVector { slots }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn particle_count(&self) -> usize {
        self.slots.len() / 2
    }

    /// Position of particle `particle`.
    pub fn position(&self, particle: usize) -> Vector3<f64> {
        self.slots[2 * particle]
    }

    /// Velocity of particle `particle`.
    pub fn velocity(&self, particle: usize) -> Vector3<f64> {
        self.slots[2 * particle + 1]
    }

    pub fn slots(&self) -> &[Vector3<f64>] {
        &self.slots
    }

    /// Fail unless this vector has exactly `expected` slots. Systems call
    /// this at their `set_state`/`eval_f` boundaries.
    pub fn check_len(&self, expected: usize) -> Result<(), ShapeError> {
        if self.slots.len() != expected {
            return Err(ShapeError::LengthMismatch {
                expected,
                actual: self.slots.len(),
            });
        }
        Ok(())
    }

    /// `self + scale * rhs`, the slot-wise update every explicit integrator
    /// is built from. Both operands must have the same slot count.
    pub fn scaled_add(&self, rhs: &StateVector, scale: f64) -> Result<StateVector, ShapeError> {
        rhs.check_len(self.slots.len())?;
        let slots = self
            .slots
            .iter()
            .zip(&rhs.slots)
            .map(|(a, b)| a + b * scale)
            .collect();
        Ok(StateVector { slots })
    }

    /// True if every component of every slot is finite.
    pub fn is_finite(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.x.is_finite() && slot.y.is_finite() && slot.z.is_finite())
    }
}

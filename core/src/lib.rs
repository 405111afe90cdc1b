mod error;
mod state;
mod system;
extern crate nalgebra as na;
extern crate serde;

pub use error::{ShapeError, StepError};
pub use state::{Derivative, StateVector};
pub use system::{ParticleSystem, RenderContext};

#[cfg(test)]
mod tests {
    use na::Vector3;
    use crate::{ShapeError, StateVector};

    fn test_state() -> StateVector {
        StateVector::from_pairs(&[
            (Vector3::new(0.25, 0.5, 1.0), Vector3::new(1.0, 0.0, 0.0)),
            (Vector3::new(-0.5, 1.0, 0.0), Vector3::new(0.0, -2.0, 0.0)),
        ])
    }

    #[test]
    fn interleaved_layout() {
        let state = test_state();
        assert_eq!(state.slot_count(), 4);
        assert_eq!(state.particle_count(), 2);
        assert_eq!(state.position(0), Vector3::new(0.25, 0.5, 1.0));
        assert_eq!(state.velocity(0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(state.position(1), Vector3::new(-0.5, 1.0, 0.0));
        assert_eq!(state.velocity(1), Vector3::new(0.0, -2.0, 0.0));
        assert_eq!(state.slots()[2], state.position(1));
    }

    #[test]
    fn odd_slot_count_rejected() {
        let slots = vec![Vector3::zeros(); 3];
        assert_eq!(
            StateVector::from_slots(slots),
            Err(ShapeError::OddLength { len: 3 })
        );
    }

    #[test]
    fn scaled_add() {
        let state = test_state();
        let shifted = state.scaled_add(&state, 2.0).expect("same shape");
        assert_eq!(shifted.position(0), Vector3::new(0.75, 1.5, 3.0));
        assert_eq!(shifted.velocity(1), Vector3::new(0.0, -6.0, 0.0));
    }

    #[test]
    fn scaled_add_length_mismatch() {
        let state = test_state();
        let short = StateVector::from_pairs(&[(Vector3::zeros(), Vector3::zeros())]);
        assert_eq!(
            state.scaled_add(&short, 1.0),
            Err(ShapeError::LengthMismatch {
                expected: 4,
                actual: 2,
            })
        );
    }

    #[test]
    fn finite_check() {
        assert!(test_state().is_finite());
        let bad = StateVector::from_slots(vec![
            Vector3::new(f64::NAN, 0.0, 0.0),
            Vector3::zeros(),
        ])
        .expect("even slot count");
        assert!(!bad.is_finite());
        let inf = StateVector::from_slots(vec![
            Vector3::zeros(),
            Vector3::new(0.0, f64::INFINITY, 0.0),
        ])
        .expect("even slot count");
        assert!(!inf.is_finite());
    }

    #[test]
    fn state_serialization() {
        let state = test_state();

        let serialized = serde_json::to_string(&state).unwrap();
        let deserialized: StateVector = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, state);
    }
}

use thiserror::Error;

/// State vector of the wrong shape for the system it was handed to.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ShapeError {
    /// Interleaved slot lists pair a position with a velocity, so the slot
    /// count must be even.
    #[error("interleaved state needs an even slot count, got {len}")]
    OddLength { len: usize },
    /// The vector does not match the system's particle count.
    #[error("state has {actual} slots, system expects {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Fault raised by a single integration step.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum StepError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The candidate state contained NaN or infinite components. The step is
    /// rejected and the system keeps its previous state.
    #[error("integration step produced a non-finite state")]
    NonFinite,
}

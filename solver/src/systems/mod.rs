mod pendulum;
mod simple;

pub use pendulum::*;
pub use simple::*;

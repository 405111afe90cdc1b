extern crate pendsim_core;
extern crate nalgebra as na;
pub mod integrator;
pub mod systems;

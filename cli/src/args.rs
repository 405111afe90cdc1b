use clap::{Parser, Subcommand};
use clap::ValueEnum;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum SystemChoose {
    /// single particle on a closed-form rotational field
    Simple,
    /// spring chain hanging from a fixed anchor
    Pendulum,
}

#[derive(Clone, ValueEnum)]
pub enum IntegratorChoose {
    /// first-order explicit Euler
    ForwardEuler,
    /// Heun's predictor-corrector
    Trapezoidal,
    /// classical fourth-order Runge-Kutta
    RungeKutta4,
}

#[derive(Subcommand)]
pub enum Commands {
    /// advance a particle system and print sampled frames
    Simulate {
        /// system to integrate
        #[arg(short = 's', long, value_enum)]
        system: SystemChoose,
        /// method of integration
        #[arg(short = 'i', long, value_enum)]
        integrate_method: IntegratorChoose,
        /// step size in seconds
        #[arg(short = 'd', long)]
        delta_time: f64,
        /// number of steps to take
        #[arg(short = 'n', long)]
        iteration_count: usize,
        /// draw every k-th frame; 0 draws only the final frame
        #[arg(long, default_value_t = 0)]
        sample_every: usize,
        /// particles in the pendulum chain
        #[arg(long)]
        particle_count: Option<usize>,
        /// randomize the chain's initial heights
        #[arg(long)]
        randomize: bool,
        /// seed for --randomize
        #[arg(long)]
        seed: Option<u64>,
    },
}

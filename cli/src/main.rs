use clap::Parser;
use crate::args::*;
use crate::commands::simulate;

mod args;
mod commands;
mod render;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();
    let args = Args::parse();
    match &args.command {
        Commands::Simulate {
            system,
            integrate_method,
            delta_time,
            iteration_count,
            sample_every,
            particle_count,
            randomize,
            seed,
        } => {
            if let Err(fault) = simulate(
                system,
                integrate_method,
                *delta_time,
                *iteration_count,
                *sample_every,
                *particle_count,
                *randomize,
                *seed,
            ) {
                eprintln!("simulation halted: {}", fault);
                std::process::exit(1);
            }
        }
    }
}

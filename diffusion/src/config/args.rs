//! Command-line argument parsing for diffusion runs

use clap::Parser;

/// Metropolis Monte Carlo diffusion of a 2D Lennard-Jones gas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Override the number of sweeps
    #[arg(long)]
    pub sweeps: Option<usize>,

    /// Override the reporting interval
    #[arg(long)]
    pub report_every: Option<usize>,

    /// Seed for the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of particles
    #[arg(long)]
    pub particles: Option<usize>,

    /// Override the temperature in K (kT and step size are re-derived)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Draw a text scatter plot of every snapshot
    #[arg(long)]
    pub plot: bool,

    /// Width of the scatter plot in characters
    #[arg(long, default_value_t = 60)]
    pub plot_width: usize,
}

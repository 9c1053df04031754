//! Diffusion Command-Line Interface
//!
//! Runs a Metropolis Monte Carlo diffusion simulation from a YAML configuration.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::DiffusionApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    DiffusionApplication::from_cli()?.run()
}

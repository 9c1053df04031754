//! Metropolis Monte Carlo sampling of a 2D Lennard-Jones gas.

pub mod acceptance;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod moves;
pub mod potential;
pub mod sweep;
pub mod system;
pub mod units;

pub use acceptance::{accept, accept_with_draw, acceptance_probability};
pub use driver::{run, RunStatistics, Simulation, Snapshot};
pub use error::{Result, SimulationError};
pub use geometry::{distance, Domain};
pub use moves::TrialMoveGenerator;
pub use potential::{lj_potential, LennardJones, MIN_PAIR_DISTANCE};
pub use sweep::{sweep, SimulationParams, SweepOutcome};
pub use system::ParticleSystem;

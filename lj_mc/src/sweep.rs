use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::acceptance::accept;
use crate::error::{Result, SimulationError};
use crate::moves::TrialMoveGenerator;
use crate::potential::LennardJones;
use crate::system::ParticleSystem;

/// Material and sampling constants, fixed for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SimulationParams {
    /// Lennard-Jones σ and ε
    pub potential: LennardJones,
    /// Thermal energy scale k_B T, in the same units as ε
    pub kt: f64,
    /// Maximum per-axis displacement of one trial move
    pub movement_limit: f64,
    /// Draw budget for a single trial move
    pub max_attempts: usize,
    /// Minimum distance between a candidate and any occupied position (0 = exact match only)
    pub min_separation: f64,
}

impl SimulationParams {
    pub fn new(sigma: f64, epsilon: f64, kt: f64, movement_limit: f64) -> Self {
        Self {
            potential: LennardJones::new(epsilon, sigma),
            kt,
            movement_limit,
            max_attempts: 100_000,
            min_separation: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.potential.validate()?;
        if !(self.kt > 0.0 && self.kt.is_finite()) {
            return Err(SimulationError::InvalidParameter(
                "kT must be positive".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(SimulationError::InvalidParameter(
                "max_attempts must be positive".to_string(),
            ));
        }
        if !(self.min_separation >= 0.0 && self.min_separation.is_finite()) {
            return Err(SimulationError::InvalidParameter(
                "min_separation must be finite and non-negative".to_string(),
            ));
        }
        self.move_generator().map(|_| ())
    }

    pub fn move_generator(&self) -> Result<TrialMoveGenerator> {
        Ok(TrialMoveGenerator::new(self.movement_limit, self.max_attempts)?
            .with_min_separation(self.min_separation))
    }
}

/// Result of one pass over the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SweepOutcome {
    /// Sum over particles of the retained one-sided energy. Each pair is
    /// counted once per particle, so this is a progress indicator, not the
    /// thermodynamic energy of the system.
    pub total_energy: f64,
    pub attempted: usize,
    pub accepted: usize,
}

impl SweepOutcome {
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempted as f64
        }
    }
}

/// One Metropolis sweep, updating particles in place in index order.
///
/// Particle `j` sees the already-updated positions of particles `0..j`.
pub fn sweep<R: Rng + ?Sized>(
    system: &mut ParticleSystem,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<SweepOutcome> {
    let generator = params.move_generator()?;
    let lj = &params.potential;
    let domain = *system.domain();

    let mut outcome = SweepOutcome::default();

    for j in 0..system.len() {
        let current = system.position(j);
        let e_initial = lj.particle_energy(&current, j, system.positions())?;

        let candidate = generator.propose(&current, j, &domain, system.positions(), rng)?;
        let e_final = lj.particle_energy(&candidate, j, system.positions())?;

        outcome.attempted += 1;
        if accept(e_final, e_initial, params.kt, rng) {
            system.set_position(j, candidate);
            outcome.total_energy += e_final;
            outcome.accepted += 1;
        } else {
            outcome.total_energy += e_initial;
        }
    }

    debug!(
        "sweep done: energy={:.6e}, accepted {}/{}",
        outcome.total_energy, outcome.accepted, outcome.attempted
    );
    Ok(outcome)
}

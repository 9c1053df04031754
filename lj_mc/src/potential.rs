// file: `lj_mc/src/potential.rs`
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::geometry::distance;

/// Pair distances below this are treated as coincident particles
pub const MIN_PAIR_DISTANCE: f64 = 1e-10;

/// 12-6 Lennard-Jones energy `4ε[(σ/r)^12 - (σ/r)^6]`.
///
/// Singular at `r = 0`; callers must pass a strictly positive distance.
pub fn lj_potential(sigma: f64, epsilon: f64, r: f64) -> f64 {
    let inv_r2 = sigma * sigma / (r * r);
    let inv_r6 = inv_r2 * inv_r2 * inv_r2;
    4.0 * epsilon * (inv_r6 * inv_r6 - inv_r6)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LennardJones {
    pub epsilon: f64,
    pub sigma: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        LennardJones { epsilon, sigma }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(SimulationError::InvalidParameter(
                "LJ epsilon must be positive".to_string(),
            ));
        }
        if !(self.sigma > 0.0 && self.sigma.is_finite()) {
            return Err(SimulationError::InvalidParameter(
                "LJ sigma must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Distance of the potential minimum, `2^(1/6) σ`
    pub fn r_min(&self) -> f64 {
        2f64.powf(1.0 / 6.0) * self.sigma
    }

    /// Pair energy at distance `r`, refusing distances that would blow up
    pub fn energy(&self, r: f64) -> Result<f64> {
        if r < MIN_PAIR_DISTANCE {
            return Err(SimulationError::DegenerateDistance { distance: r });
        }
        Ok(lj_potential(self.sigma, self.epsilon, r))
    }

    /// Interaction energy of a particle at `pos` with every entry of `positions`
    /// except index `skip` (the particle itself).
    pub fn particle_energy(
        &self,
        pos: &Vector2<f64>,
        skip: usize,
        positions: &[Vector2<f64>],
    ) -> Result<f64> {
        let mut energy = 0.0;
        for (k, other) in positions.iter().enumerate() {
            if k == skip {
                continue;
            }
            energy += self.energy(distance(pos, other))?;
        }
        Ok(energy)
    }
}

use nalgebra::Vector2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::{Result, SimulationError};
use crate::geometry::Domain;
use crate::system::coincides;

/// Proposes bounded random displacements by rejection sampling.
///
/// Each axis is displaced independently by a uniform draw from
/// `[-movement_limit, movement_limit]`. Candidates outside the domain or
/// colliding with an occupied position are redrawn, up to `max_attempts`
/// draws in total.
#[derive(Debug, Clone, Copy)]
pub struct TrialMoveGenerator {
    pub movement_limit: f64,
    pub max_attempts: usize,
    pub min_separation: f64,
}

impl TrialMoveGenerator {
    pub fn new(movement_limit: f64, max_attempts: usize) -> Result<Self> {
        if !(movement_limit >= 0.0 && movement_limit.is_finite()) {
            return Err(SimulationError::InvalidParameter(format!(
                "movement limit must be finite and non-negative, got {}",
                movement_limit
            )));
        }
        Ok(Self {
            movement_limit,
            max_attempts,
            min_separation: 0.0,
        })
    }

    pub fn with_min_separation(mut self, min_separation: f64) -> Self {
        self.min_separation = min_separation.max(0.0);
        self
    }

    /// Draw a candidate position for particle `index`, currently at `current`.
    ///
    /// `occupied` is the full current ensemble. With an exact-match check
    /// (`min_separation == 0`) the moving particle's own position counts as
    /// occupied, so a zero displacement is never returned. With a proximity
    /// check the moving particle is skipped, as it vacates its old spot.
    pub fn propose<R: Rng + ?Sized>(
        &self,
        current: &Vector2<f64>,
        index: usize,
        domain: &Domain,
        occupied: &[Vector2<f64>],
        rng: &mut R,
    ) -> Result<Vector2<f64>> {
        let step = Uniform::new_inclusive(-self.movement_limit, self.movement_limit);

        for _ in 0..self.max_attempts {
            let candidate = current + Vector2::new(step.sample(rng), step.sample(rng));
            if !domain.contains(&candidate) {
                continue;
            }
            let exact = self.min_separation == 0.0;
            if occupied
                .iter()
                .enumerate()
                .filter(|&(k, _)| exact || k != index)
                .any(|(_, p)| coincides(p, &candidate, self.min_separation))
            {
                continue;
            }
            return Ok(candidate);
        }

        Err(SimulationError::ConstraintInfeasible {
            attempts: self.max_attempts,
        })
    }
}

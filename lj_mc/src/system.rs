use itertools::Itertools;
use nalgebra::Vector2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::info;

use crate::error::{Result, SimulationError};
use crate::geometry::{distance, Domain};

/// Two positions collide if they are closer than `min_separation`.
///
/// A separation of zero reduces this to exact equality, which continuous
/// draws essentially never hit.
#[inline]
pub(crate) fn coincides(a: &Vector2<f64>, b: &Vector2<f64>, min_separation: f64) -> bool {
    if min_separation > 0.0 {
        distance(a, b) < min_separation
    } else {
        a == b
    }
}

/// Ensemble of N particles confined to a rectangular domain.
///
/// Every position lies inside the domain and no two positions coincide.
/// N is fixed for the lifetime of the system.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    positions: Vec<Vector2<f64>>,
    domain: Domain,
}

impl ParticleSystem {
    /// Build a system from explicit positions, checking both invariants
    pub fn new(positions: Vec<Vector2<f64>>, domain: Domain) -> Result<Self> {
        domain.validate()?;
        let system = ParticleSystem { positions, domain };
        system.check_invariants()?;
        Ok(system)
    }

    /// Scatter `n` particles uniformly over `region`, redrawing any particle
    /// that collides with one already placed.
    ///
    /// # Arguments
    /// * `n` - Number of particles
    /// * `region` - Sub-rectangle of `domain` to place particles in
    /// * `domain` - Confining rectangle for the whole run
    /// * `rng` - Random number generator
    /// * `max_attempts` - Draw budget per particle
    /// * `min_separation` - Minimum pair distance (0 = exact match only)
    pub fn scatter<R: Rng + ?Sized>(
        n: usize,
        region: Domain,
        domain: Domain,
        rng: &mut R,
        max_attempts: usize,
        min_separation: f64,
    ) -> Result<Self> {
        domain.validate()?;
        region.validate()?;
        if !domain.encloses(&region) {
            return Err(SimulationError::InvalidParameter(
                "start region must lie inside the domain".to_string(),
            ));
        }

        let xs = Uniform::new_inclusive(region.x_min, region.x_max);
        let ys = Uniform::new_inclusive(region.y_min, region.y_max);

        let mut positions: Vec<Vector2<f64>> = Vec::with_capacity(n);
        for _ in 0..n {
            let mut attempts = 0;
            loop {
                if attempts >= max_attempts {
                    return Err(SimulationError::ConstraintInfeasible { attempts });
                }
                attempts += 1;

                let candidate = Vector2::new(xs.sample(rng), ys.sample(rng));
                if !positions.iter().any(|p| coincides(p, &candidate, min_separation)) {
                    positions.push(candidate);
                    break;
                }
            }
        }

        info!(
            "Placed {} particles in [{}, {}] x [{}, {}]",
            n, region.x_min, region.x_max, region.y_min, region.y_max
        );
        Ok(ParticleSystem { positions, domain })
    }

    /// Verify that every particle is in bounds and no two coincide
    pub fn check_invariants(&self) -> Result<()> {
        if let Some((i, p)) = self
            .positions
            .iter()
            .enumerate()
            .find(|(_, p)| !self.domain.contains(p))
        {
            return Err(SimulationError::InvalidParameter(format!(
                "particle {} at ({}, {}) lies outside the domain",
                i, p.x, p.y
            )));
        }
        if let Some(((i, _), (j, _))) = self
            .positions
            .iter()
            .enumerate()
            .tuple_combinations()
            .find(|((_, a), (_, b))| coincides(a, b, 0.0))
        {
            return Err(SimulationError::InvalidParameter(format!(
                "particles {} and {} share a position",
                i, j
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vector2<f64>] {
        &self.positions
    }

    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn position(&self, index: usize) -> Vector2<f64> {
        self.positions[index]
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub(crate) fn set_position(&mut self, index: usize, pos: Vector2<f64>) {
        self.positions[index] = pos;
    }

    /// True if `candidate` collides with any current position
    pub fn is_occupied(&self, candidate: &Vector2<f64>, min_separation: f64) -> bool {
        self.positions
            .iter()
            .any(|p| coincides(p, candidate, min_separation))
    }

    /// Largest pairwise distance in the ensemble
    pub fn spread(&self) -> f64 {
        self.positions
            .iter()
            .tuple_combinations()
            .map(|(a, b)| distance(a, b))
            .fold(0.0, f64::max)
    }

    /// Lower-left and upper-right corners of the occupied area
    pub fn bounding_box(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn box30() -> Domain {
        Domain::new(0.0, 30.0, 0.0, 30.0).unwrap()
    }

    #[test]
    fn test_scatter_in_region() {
        let mut rng = StdRng::seed_from_u64(42);
        let strip = Domain::new(14.0, 15.0, 0.0, 1.0).unwrap();
        let system = ParticleSystem::scatter(50, strip, box30(), &mut rng, 1000, 0.0).unwrap();

        assert_eq!(system.len(), 50);
        for p in system.positions() {
            assert!(strip.contains(p));
        }
        assert!(system.check_invariants().is_ok());
    }

    #[test]
    fn test_scatter_min_separation() {
        let mut rng = StdRng::seed_from_u64(7);
        let strip = Domain::new(14.0, 15.0, 0.0, 1.0).unwrap();
        let system = ParticleSystem::scatter(30, strip, box30(), &mut rng, 10_000, 0.1).unwrap();

        assert_eq!(system.len(), 30);
        let closest = system
            .positions()
            .iter()
            .tuple_combinations()
            .map(|(a, b)| distance(a, b))
            .fold(f64::INFINITY, f64::min);
        assert!(closest >= 0.1, "closest pair at {}", closest);
    }

    #[test]
    fn test_scatter_region_outside_domain() {
        let mut rng = StdRng::seed_from_u64(1);
        let region = Domain::new(25.0, 35.0, 0.0, 1.0).unwrap();
        let result = ParticleSystem::scatter(5, region, box30(), &mut rng, 1000, 0.0);
        assert!(matches!(result, Err(SimulationError::InvalidParameter(_))));
    }

    #[test]
    fn test_scatter_zero_budget() {
        let mut rng = StdRng::seed_from_u64(1);
        let strip = Domain::new(14.0, 15.0, 0.0, 1.0).unwrap();
        let result = ParticleSystem::scatter(3, strip, box30(), &mut rng, 0, 0.0);
        assert_eq!(
            result,
            Err(SimulationError::ConstraintInfeasible { attempts: 0 })
        );
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        let positions = vec![Vector2::new(1.0, 1.0), Vector2::new(31.0, 1.0)];
        assert!(ParticleSystem::new(positions, box30()).is_err());
    }

    #[test]
    fn test_new_rejects_coincident() {
        let positions = vec![
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(1.0, 1.0),
        ];
        assert!(ParticleSystem::new(positions, box30()).is_err());
    }

    #[test]
    fn test_is_occupied() {
        let system =
            ParticleSystem::new(vec![Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.0)], box30())
                .unwrap();
        assert!(system.is_occupied(&Vector2::new(2.0, 2.0), 0.0));
        assert!(!system.is_occupied(&Vector2::new(2.0, 2.05), 0.0));
        assert!(system.is_occupied(&Vector2::new(2.0, 2.05), 0.1));
    }

    #[test]
    fn test_spread_and_bounding_box() {
        let system = ParticleSystem::new(
            vec![
                Vector2::new(1.0, 1.0),
                Vector2::new(4.0, 5.0),
                Vector2::new(2.0, 3.0),
            ],
            box30(),
        )
        .unwrap();
        assert_relative_eq!(system.spread(), 5.0, epsilon = 1e-12);

        let (lo, hi) = system.bounding_box().unwrap();
        assert_eq!(lo, Vector2::new(1.0, 1.0));
        assert_eq!(hi, Vector2::new(4.0, 5.0));
    }
}

use nalgebra::Vector2;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SimulationError};
use crate::sweep::{sweep, SimulationParams};
use crate::system::ParticleSystem;
use crate::units::ENERGY_REPORT_SCALE;

/// State of the ensemble after a reporting sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// 0-based index of the sweep that produced this snapshot
    pub sweep: usize,
    /// Sweep-total energy in simulation units
    pub total_energy: f64,
    /// `total_energy` scaled by [`ENERGY_REPORT_SCALE`] for display in eV
    pub reported_energy: f64,
    /// Fraction of trial moves accepted during this sweep
    pub acceptance_rate: f64,
    /// Largest pairwise distance in the ensemble
    pub spread: f64,
    pub positions: Vec<Vector2<f64>>,
}

/// Counters accumulated over a whole run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RunStatistics {
    pub sweeps: usize,
    pub moves_attempted: u64,
    pub moves_accepted: u64,
    pub snapshots: usize,
}

impl RunStatistics {
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_attempted == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_attempted as f64
        }
    }

    pub fn print_summary(&self) {
        info!("=== Run Statistics ===");
        info!("Sweeps:          {}", self.sweeps);
        info!(
            "Trial moves:     {} / {} ({:.2}% accepted)",
            self.moves_accepted,
            self.moves_attempted,
            100.0 * self.acceptance_rate()
        );
        info!("Snapshots:       {}", self.snapshots);
    }
}

/// Whether sweep `i` (0-based) is reported: the first one and every `report_every`-th
#[inline]
pub fn is_report_sweep(i: usize, report_every: usize) -> bool {
    i == 0 || (i + 1) % report_every == 0
}

/// Runs a fixed number of sweeps and yields a [`Snapshot`] after each
/// reporting sweep.
///
/// The iterator is lazy: sweeps run only as snapshots are pulled. After an
/// error it is exhausted. Replaying a run needs the same initial system and
/// the same seed.
pub struct Simulation<R: Rng> {
    system: ParticleSystem,
    params: SimulationParams,
    rng: R,
    n_sweeps: usize,
    report_every: usize,
    next_sweep: usize,
    failed: bool,
    stats: RunStatistics,
}

impl<R: Rng> Simulation<R> {
    pub fn new(
        system: ParticleSystem,
        params: SimulationParams,
        n_sweeps: usize,
        report_every: usize,
        rng: R,
    ) -> Result<Self> {
        params.validate()?;
        if report_every == 0 {
            return Err(SimulationError::InvalidParameter(
                "report interval must be positive".to_string(),
            ));
        }
        info!(
            "Simulation of {} particles: {} sweeps, reporting every {}",
            system.len(),
            n_sweeps,
            report_every
        );
        Ok(Self {
            system,
            params,
            rng,
            n_sweeps,
            report_every,
            next_sweep: 0,
            failed: false,
            stats: RunStatistics::default(),
        })
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    /// Number of snapshots a complete run emits
    pub fn expected_snapshots(&self) -> usize {
        (0..self.n_sweeps)
            .filter(|&i| is_report_sweep(i, self.report_every))
            .count()
    }

    pub fn into_system(self) -> ParticleSystem {
        self.system
    }

    fn step(&mut self) -> Result<Option<Snapshot>> {
        let i = self.next_sweep;
        let outcome = sweep(&mut self.system, &self.params, &mut self.rng)?;
        self.next_sweep += 1;

        self.stats.sweeps += 1;
        self.stats.moves_attempted += outcome.attempted as u64;
        self.stats.moves_accepted += outcome.accepted as u64;

        if !is_report_sweep(i, self.report_every) {
            return Ok(None);
        }

        self.stats.snapshots += 1;
        debug!("snapshot at sweep {}", i);
        Ok(Some(Snapshot {
            sweep: i,
            total_energy: outcome.total_energy,
            reported_energy: outcome.total_energy * ENERGY_REPORT_SCALE,
            acceptance_rate: outcome.acceptance_rate(),
            spread: self.system.spread(),
            positions: self.system.positions().to_vec(),
        }))
    }
}

impl<R: Rng> Iterator for Simulation<R> {
    type Item = Result<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while self.next_sweep < self.n_sweeps {
            match self.step() {
                Ok(Some(snapshot)) => return Some(Ok(snapshot)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Run a complete simulation eagerly, collecting every snapshot
pub fn run<R: Rng>(
    system: ParticleSystem,
    params: SimulationParams,
    n_sweeps: usize,
    report_every: usize,
    rng: R,
) -> Result<(Vec<Snapshot>, ParticleSystem)> {
    let mut simulation = Simulation::new(system, params, n_sweeps, report_every, rng)?;
    let snapshots = simulation.by_ref().collect::<Result<Vec<_>>>()?;
    Ok((snapshots, simulation.into_system()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Domain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_system(rng: &mut StdRng) -> ParticleSystem {
        let domain = Domain::new(0.0, 30.0, 0.0, 30.0).unwrap();
        let region = Domain::new(10.0, 20.0, 10.0, 20.0).unwrap();
        ParticleSystem::scatter(5, region, domain, rng, 1000, 0.0).unwrap()
    }

    #[test]
    fn test_report_cadence() {
        let mut rng = StdRng::seed_from_u64(8);
        let system = small_system(&mut rng);
        let params = SimulationParams::new(0.0256, 0.0849, 0.02587, 0.1);
        let simulation = Simulation::new(system, params, 500, 100, rng).unwrap();
        assert_eq!(simulation.expected_snapshots(), 6);

        let sweeps: Vec<usize> = simulation.map(|s| s.unwrap().sweep).collect();
        assert_eq!(sweeps, vec![0, 99, 199, 299, 399, 499]);
    }

    #[test]
    fn test_report_every_sweep() {
        let sweeps: Vec<usize> = (0..5).filter(|&i| is_report_sweep(i, 1)).collect();
        assert_eq!(sweeps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_report_interval_rejected() {
        let mut rng = StdRng::seed_from_u64(8);
        let system = small_system(&mut rng);
        let params = SimulationParams::new(0.0256, 0.0849, 0.02587, 0.1);
        assert!(Simulation::new(system, params, 10, 0, rng).is_err());
    }

    #[test]
    fn test_lazy_iteration() {
        let mut rng = StdRng::seed_from_u64(21);
        let system = small_system(&mut rng);
        let params = SimulationParams::new(0.0256, 0.0849, 0.02587, 0.1);
        let mut simulation = Simulation::new(system, params, 50, 10, rng).unwrap();

        assert_eq!(simulation.stats().sweeps, 0);
        let first = simulation.next().unwrap().unwrap();
        assert_eq!(first.sweep, 0);
        assert_eq!(simulation.stats().sweeps, 1);

        let second = simulation.next().unwrap().unwrap();
        assert_eq!(second.sweep, 9);
        assert_eq!(simulation.stats().sweeps, 10);
        assert_eq!(second.reported_energy, second.total_energy * ENERGY_REPORT_SCALE);
    }

    #[test]
    fn test_same_seed_same_run() {
        let make = || {
            let mut rng = StdRng::seed_from_u64(31);
            let system = small_system(&mut rng);
            let params = SimulationParams::new(0.0256, 0.0849, 0.02587, 0.2);
            run(system, params, 30, 10, rng).unwrap().0
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn test_error_ends_iteration() {
        let mut rng = StdRng::seed_from_u64(2);
        let system = small_system(&mut rng);
        let mut params = SimulationParams::new(0.0256, 0.0849, 0.02587, 0.0);
        params.max_attempts = 5;
        let mut simulation = Simulation::new(system, params, 10, 1, rng).unwrap();

        assert!(matches!(
            simulation.next(),
            Some(Err(SimulationError::ConstraintInfeasible { .. }))
        ));
        assert!(simulation.next().is_none());
    }

    #[test]
    fn test_statistics_accumulate() {
        let mut rng = StdRng::seed_from_u64(12);
        let system = small_system(&mut rng);
        let params = SimulationParams::new(0.0256, 0.0849, 0.02587, 0.3);
        let mut simulation = Simulation::new(system, params, 20, 5, rng).unwrap();
        let count = simulation.by_ref().count();

        let stats = simulation.stats();
        assert_eq!(count, 5);
        assert_eq!(stats.sweeps, 20);
        assert_eq!(stats.snapshots, 5);
        assert_eq!(stats.moves_attempted, 100);
        assert!(stats.acceptance_rate() > 0.0 && stats.acceptance_rate() <= 1.0);
    }
}

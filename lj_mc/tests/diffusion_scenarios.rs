//! End-to-end runs of the Metropolis driver on small ensembles.

use lj_mc::units::{mean_speed, movement_limit};
use lj_mc::{distance, run, Domain, ParticleSystem, SimulationParams};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIGMA: f64 = 0.0256;
const EPSILON: f64 = 0.0849;
const KT: f64 = 0.02587;

fn box30() -> Domain {
    Domain::new(0.0, 30.0, 0.0, 30.0).unwrap()
}

#[test]
fn distant_pair_stays_stable() {
    let rng = StdRng::seed_from_u64(2);
    let domain = box30();
    let system = ParticleSystem::new(
        vec![Vector2::new(5.0, 15.0), Vector2::new(25.0, 15.0)],
        domain,
    )
    .unwrap();
    let limit = 0.01;
    let params = SimulationParams::new(SIGMA, EPSILON, KT, limit);

    let (snapshots, last) = run(system, params, 100, 10, rng).unwrap();
    assert_eq!(snapshots.len(), 11);

    // Two unbiased walks of 100 steps each; the pair distance wanders on the
    // order of limit * sqrt(2 * 100)
    let max_drift = 5.0 * limit * (2.0 * 100.0f64).sqrt();
    for snapshot in &snapshots {
        for p in &snapshot.positions {
            assert!(domain.contains(p));
        }
        let r = distance(&snapshot.positions[0], &snapshot.positions[1]);
        assert!((r - 20.0).abs() <= max_drift, "pair distance {} drifted", r);
        assert!(snapshot.total_energy.is_finite());
    }
    assert_eq!(last.len(), 2);
}

#[test]
fn strip_diffuses_into_box() {
    let mut rng = StdRng::seed_from_u64(42);
    let domain = box30();
    let strip = Domain::new(14.0, 15.0, 0.0, 1.0).unwrap();
    let system = ParticleSystem::scatter(50, strip, domain, &mut rng, 100_000, 0.0).unwrap();
    let initial_spread = system.spread();

    let limit = movement_limit(mean_speed(300.0, 4.0), 5.0);
    let params = SimulationParams::new(SIGMA, EPSILON, KT, limit);

    let (snapshots, last) = run(system, params, 500, 100, rng).unwrap();
    assert_eq!(snapshots.len(), 6);
    assert_eq!(last.len(), 50);
    assert!(last.check_invariants().is_ok());

    let spreads: Vec<f64> = snapshots.iter().map(|s| s.spread).collect();
    assert!(spreads[5] > spreads[0]);
    assert!(spreads[5] > 2.0 * initial_spread);

    let early = (spreads[0] + spreads[1] + spreads[2]) / 3.0;
    let late = (spreads[3] + spreads[4] + spreads[5]) / 3.0;
    assert!(late > early, "spread did not grow: {:?}", spreads);

    let (lo, hi) = last.bounding_box().unwrap();
    assert!(hi.x - lo.x > strip.width());
    assert!(hi.y - lo.y > strip.height());
}

#[test]
fn reporting_cadence_matches_schedule() {
    let mut rng = StdRng::seed_from_u64(9);
    let region = Domain::new(5.0, 25.0, 5.0, 25.0).unwrap();
    let system = ParticleSystem::scatter(4, region, box30(), &mut rng, 1000, 0.0).unwrap();
    let params = SimulationParams::new(SIGMA, EPSILON, KT, 0.05);

    let (snapshots, _) = run(system, params, 500, 100, rng).unwrap();
    let sweeps: Vec<usize> = snapshots.iter().map(|s| s.sweep).collect();
    assert_eq!(sweeps, vec![0, 99, 199, 299, 399, 499]);
}

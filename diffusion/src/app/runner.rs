use crate::config::{Args, Config};
use color_eyre::eyre::{Result, WrapErr};
use lj_mc::{Domain, ParticleSystem, RunStatistics, Simulation, Snapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Fold command-line overrides into the file configuration
pub fn resolve_config(mut config: Config, args: &Args) -> Config {
    if let Some(sweeps) = args.sweeps {
        info!("Overriding n_sweeps with: {}", sweeps);
        config.simulation.n_sweeps = Some(sweeps);
    }
    if let Some(every) = args.report_every {
        info!("Overriding report_every with: {}", every);
        config.simulation.report_every = Some(every);
    }
    if let Some(seed) = args.seed {
        info!("Overriding seed with: {}", seed);
        config.simulation.seed = Some(seed);
    }
    if let Some(n) = args.particles {
        info!("Overriding n_particles with: {}", n);
        config.n_particles = Some(n);
    }
    if let Some(t) = args.temperature {
        info!("Overriding temperature with: {} K", t);
        config.physics.temperature = Some(t);
        // Derive both from the new temperature
        config.physics.kt = None;
        config.physics.movement_limit = None;
    }
    config
}

pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn initial_system(config: &Config, rng: &mut StdRng) -> Result<ParticleSystem> {
    let params = config.simulation_params();
    ParticleSystem::scatter(
        config.n_particles(),
        config.start_region(),
        config.domain(),
        rng,
        params.max_attempts,
        params.min_separation,
    )
    .wrap_err("Failed to place the initial configuration")
}

/// Drive the sampler to completion, handing every snapshot to `on_snapshot`
pub fn run_simulation<F>(
    config: &Config,
    system: ParticleSystem,
    rng: StdRng,
    mut on_snapshot: F,
) -> Result<RunStatistics>
where
    F: FnMut(&Snapshot, &Domain),
{
    let domain = *system.domain();
    let mut simulation = Simulation::new(
        system,
        config.simulation_params(),
        config.n_sweeps(),
        config.report_every(),
        rng,
    )?;

    for snapshot in simulation.by_ref() {
        let snapshot = snapshot.wrap_err("Simulation aborted")?;
        on_snapshot(&snapshot, &domain);
    }

    Ok(*simulation.stats())
}

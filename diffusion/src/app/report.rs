use crate::config::Config;
use crate::io::render_scatter;
use lj_mc::{Domain, ParticleSystem, RunStatistics, Snapshot};
use tracing::info;

pub fn report_configuration(config: &Config) {
    let domain = config.domain();
    let region = config.start_region();
    let params = config.simulation_params();

    info!("Configuration:");
    info!(
        "  Domain:        [{}, {}] x [{}, {}]",
        domain.x_min, domain.x_max, domain.y_min, domain.y_max
    );
    info!(
        "  Start region:  [{}, {}] x [{}, {}]",
        region.x_min, region.x_max, region.y_min, region.y_max
    );
    info!("  Particles:     {}", config.n_particles());
    info!(
        "  Sweeps:        {} (report every {})",
        config.n_sweeps(),
        config.report_every()
    );
    info!(
        "  LJ sigma/eps:  {} / {}",
        params.potential.sigma, params.potential.epsilon
    );
    info!("  kT:            {:.5} eV", params.kt);
    info!("  Step limit:    {:.5}", params.movement_limit);
    match config.simulation.seed {
        Some(seed) => info!("  Seed:          {}", seed),
        None => info!("  Seed:          from entropy"),
    }
}

pub fn report_initial(system: &ParticleSystem, plot_width: Option<usize>) {
    info!(
        "Initial configuration: {} particles, spread {:.4}",
        system.len(),
        system.spread()
    );
    if let Some(width) = plot_width {
        info!("\n{}", render_scatter(system.positions(), system.domain(), width));
    }
}

fn energy_line(snapshot: &Snapshot) -> String {
    format!("{:.6} eV", snapshot.reported_energy)
}

/// Progress line; `sweep` is the 0-based index carried by the snapshot
fn progress_line(snapshot: &Snapshot) -> String {
    format!(
        "  sweep {:>6}: acceptance {:.1}%, spread {:.4}",
        snapshot.sweep,
        100.0 * snapshot.acceptance_rate,
        snapshot.spread
    )
}

pub fn report_snapshot(snapshot: &Snapshot, domain: &Domain, plot_width: Option<usize>) {
    info!("{}", energy_line(snapshot));
    info!("{}", progress_line(snapshot));
    if let Some(width) = plot_width {
        info!("\n{}", render_scatter(&snapshot.positions, domain, width));
    }
}

pub fn report_summary(stats: &RunStatistics) {
    stats.print_summary();
}

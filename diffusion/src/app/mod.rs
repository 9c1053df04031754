mod report;
mod runner;

pub use runner::{build_rng, initial_system, resolve_config, run_simulation};

use self::report::{report_configuration, report_initial, report_snapshot, report_summary};
use crate::config::{Args, Config};
use crate::io::setup_output;
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs;
use tracing::info;

pub struct DiffusionApplication {
    args: Args,
    config: Config,
}

impl DiffusionApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());

        let config = resolve_config(self.config, &self.args);
        config.validate().map_err(|e| eyre!(e))?;
        report_configuration(&config);

        let plot_width = self.args.plot.then_some(self.args.plot_width);
        let mut rng = build_rng(config.simulation.seed);
        let system = initial_system(&config, &mut rng)?;
        report_initial(&system, plot_width);

        let stats = run_simulation(&config, system, rng, |snapshot, domain| {
            report_snapshot(snapshot, domain, plot_width)
        })?;

        report_summary(&stats);
        info!("Simulation complete");
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = args.config_file.as_ref() else {
        return Ok(Config::default().with_defaults());
    };

    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

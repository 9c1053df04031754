//! Configuration management for diffusion runs
//!
//! This module handles the YAML configuration structures, their defaults and
//! validation, and turns them into the parameters the sampler needs.

mod args;

pub use args::Args;

use lj_mc::units::{mean_speed, movement_limit, thermal_energy_ev};
use lj_mc::{Domain, SimulationParams};
use serde::{Deserialize, Serialize};

/// Main configuration structure for a diffusion run
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub domain: Option<Region>,
    pub start_region: Option<Region>,
    pub n_particles: Option<usize>,
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default)]
    pub physics: PhysicsParams,
}

/// Rectangle given as `x: [min, max]`, `y: [min, max]`
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Region {
    pub fn to_domain(self) -> Domain {
        Domain {
            x_min: self.x[0],
            x_max: self.x[1],
            y_min: self.y[0],
            y_max: self.y[1],
        }
    }
}

/// Sweep schedule and sampler settings
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SimulationSection {
    pub n_sweeps: Option<usize>,
    pub report_every: Option<usize>,
    pub seed: Option<u64>,
    pub max_attempts: Option<usize>,
    pub min_separation: Option<f64>,
}

impl SimulationSection {
    fn defaults() -> Self {
        SimulationSection {
            n_sweeps: Some(500),
            report_every: Some(100),
            seed: None,
            max_attempts: Some(100_000),
            min_separation: Some(0.0),
        }
    }

    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::defaults();
        if self.n_sweeps.is_none() {
            self.n_sweeps = defaults.n_sweeps;
        }
        if self.report_every.is_none() {
            self.report_every = defaults.report_every;
        }
        if self.max_attempts.is_none() {
            self.max_attempts = defaults.max_attempts;
        }
        if self.min_separation.is_none() {
            self.min_separation = defaults.min_separation;
        }
        self
    }
}

/// Physical constants of the gas
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PhysicsParams {
    /// Temperature in K
    pub temperature: Option<f64>,
    /// Molar mass in g/mol
    pub molar_mass: Option<f64>,
    /// Time represented by one trial move, in ps
    pub timescale: Option<f64>,
    pub sigma: Option<f64>,
    pub epsilon: Option<f64>,
    /// Thermal energy in eV; derived from the temperature when absent.
    /// Defaults to 0.02587 only for the default 300 K.
    pub kt: Option<f64>,
    /// Per-axis step bound; derived from the mean speed when absent
    pub movement_limit: Option<f64>,
}

impl PhysicsParams {
    fn defaults() -> Self {
        PhysicsParams {
            temperature: Some(300.0),
            molar_mass: Some(4.0),
            timescale: Some(5.0),
            sigma: Some(0.0256),
            epsilon: Some(0.0849),
            kt: Some(0.02587),
            movement_limit: None,
        }
    }

    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::defaults();
        if self.temperature.is_none() {
            self.temperature = defaults.temperature;
        }
        if self.molar_mass.is_none() {
            self.molar_mass = defaults.molar_mass;
        }
        if self.timescale.is_none() {
            self.timescale = defaults.timescale;
        }
        if self.sigma.is_none() {
            self.sigma = defaults.sigma;
        }
        if self.epsilon.is_none() {
            self.epsilon = defaults.epsilon;
        }
        if self.kt.is_none() && self.temperature == defaults.temperature {
            self.kt = defaults.kt;
        }
        self
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(300.0)
    }

    pub fn kt(&self) -> f64 {
        self.kt
            .unwrap_or_else(|| thermal_energy_ev(self.temperature()))
    }

    pub fn movement_limit(&self) -> f64 {
        self.movement_limit.unwrap_or_else(|| {
            let speed = mean_speed(self.temperature(), self.molar_mass.unwrap_or(4.0));
            movement_limit(speed, self.timescale.unwrap_or(5.0))
        })
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if self.domain.is_none() {
            self.domain = Some(Region {
                x: [0.0, 30.0],
                y: [0.0, 30.0],
            });
        }
        if self.start_region.is_none() {
            self.start_region = Some(Region {
                x: [14.0, 15.0],
                y: [0.0, 1.0],
            });
        }
        if self.n_particles.is_none() {
            self.n_particles = Some(50);
        }
        self.simulation = self.simulation.with_defaults();
        self.physics = self.physics.with_defaults();
        self
    }

    pub fn domain(&self) -> Domain {
        self.domain
            .map(Region::to_domain)
            .unwrap_or(Domain {
                x_min: 0.0,
                x_max: 30.0,
                y_min: 0.0,
                y_max: 30.0,
            })
    }

    pub fn start_region(&self) -> Domain {
        self.start_region
            .map(Region::to_domain)
            .unwrap_or_else(|| self.domain())
    }

    pub fn n_particles(&self) -> usize {
        self.n_particles.unwrap_or(50)
    }

    pub fn n_sweeps(&self) -> usize {
        self.simulation.n_sweeps.unwrap_or(500)
    }

    pub fn report_every(&self) -> usize {
        self.simulation.report_every.unwrap_or(100)
    }

    /// Sampler parameters with every derived quantity resolved
    pub fn simulation_params(&self) -> SimulationParams {
        let mut params = SimulationParams::new(
            self.physics.sigma.unwrap_or(0.0256),
            self.physics.epsilon.unwrap_or(0.0849),
            self.physics.kt(),
            self.physics.movement_limit(),
        );
        if let Some(max_attempts) = self.simulation.max_attempts {
            params.max_attempts = max_attempts;
        }
        if let Some(min_separation) = self.simulation.min_separation {
            params.min_separation = min_separation;
        }
        params
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        let domain = self.domain();
        domain.validate().map_err(|e| e.to_string())?;
        let region = self.start_region();
        region.validate().map_err(|e| e.to_string())?;
        if !domain.encloses(&region) {
            return Err("Start region must lie inside the domain".to_string());
        }

        if self.n_sweeps() == 0 {
            return Err("Number of sweeps must be positive".to_string());
        }
        if self.report_every() == 0 {
            return Err("Report interval must be positive".to_string());
        }

        for (name, value) in [
            ("Temperature", self.physics.temperature),
            ("Molar mass", self.physics.molar_mass),
            ("Timescale", self.physics.timescale),
        ] {
            if let Some(v) = value {
                if v <= 0.0 {
                    return Err(format!("{} must be positive", name));
                }
            }
        }

        self.simulation_params()
            .validate()
            .map_err(|e| e.to_string())
    }
}

//! Unit bookkeeping for the diffusion model.
//!
//! Lengths are measured in units of 10^4 pm, energies of the Lennard-Jones
//! parameters in the same units as kT (eV).

use std::f64::consts::PI;

/// Gas constant in J / (kmol K), paired with molar masses in g/mol
pub const GAS_CONSTANT: f64 = 8314.0;

/// Boltzmann constant in eV/K
pub const BOLTZMANN_EV: f64 = 8.617_333_262e-5;

/// Picometres per domain length unit
pub const LENGTH_UNIT_PM: f64 = 10_000.0;

/// Factor applied to the sweep-total energy before it is reported in eV
pub const ENERGY_REPORT_SCALE: f64 = 0.01037;

/// Mean molecular speed `sqrt(8RT / (πM))` in m/s
pub fn mean_speed(temperature: f64, molar_mass: f64) -> f64 {
    (8.0 * GAS_CONSTANT * temperature / (PI * molar_mass)).sqrt()
}

/// Per-axis displacement bound for a particle moving at `speed` (m/s) for
/// `timescale` picoseconds, in domain units
pub fn movement_limit(speed: f64, timescale: f64) -> f64 {
    // m/s * ps = pm
    speed * timescale / LENGTH_UNIT_PM
}

/// Thermal energy k_B T in eV
pub fn thermal_energy_ev(temperature: f64) -> f64 {
    BOLTZMANN_EV * temperature
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_helium_mean_speed() {
        // Helium at room temperature
        let v = mean_speed(300.0, 4.0);
        assert_relative_eq!(v, 1260.1, max_relative = 1e-3);
    }

    #[test]
    fn test_movement_limit() {
        let v = mean_speed(300.0, 4.0);
        assert_relative_eq!(movement_limit(v, 5.0), 0.63, max_relative = 1e-2);
    }

    #[test]
    fn test_room_temperature_kt() {
        assert_relative_eq!(thermal_energy_ev(300.0), 0.02585, max_relative = 1e-3);
    }
}

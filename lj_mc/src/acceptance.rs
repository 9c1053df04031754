use rand::Rng;

/// Boltzmann factor `exp(-ΔE / kT)` for an uphill move of size `delta_e`
#[inline]
pub fn acceptance_probability(delta_e: f64, kt: f64) -> f64 {
    (-delta_e / kt).exp()
}

/// Metropolis criterion with an externally supplied uniform draw in `[0, 1)`.
///
/// Downhill and neutral moves are always accepted, whatever the draw.
/// Uphill moves are accepted iff `draw <= exp(-(e_final - e_initial) / kT)`.
pub fn accept_with_draw(e_final: f64, e_initial: f64, kt: f64, draw: f64) -> bool {
    if e_final <= e_initial {
        return true;
    }
    draw <= acceptance_probability(e_final - e_initial, kt)
}

/// Metropolis criterion drawing from `rng`. No draw is consumed for downhill moves.
pub fn accept<R: Rng + ?Sized>(e_final: f64, e_initial: f64, kt: f64, rng: &mut R) -> bool {
    if e_final <= e_initial {
        return true;
    }
    accept_with_draw(e_final, e_initial, kt, rng.gen::<f64>())
}

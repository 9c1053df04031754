//! Input/Output operations for diffusion runs
//!
//! This module handles logging setup and text rendering of snapshots.

mod output;
mod scatter;

pub use output::setup_output;
pub use scatter::render_scatter;

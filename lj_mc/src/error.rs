//! Error types for lj_mc.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("no admissible position found after {attempts} attempts")]
    ConstraintInfeasible { attempts: usize },

    #[error("pair distance {distance:e} is below the allowed minimum")]
    DegenerateDistance { distance: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

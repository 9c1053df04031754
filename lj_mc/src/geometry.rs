use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Euclidean distance between two points in the plane
pub fn distance(p1: &Vector2<f64>, p2: &Vector2<f64>) -> f64 {
    (p2 - p1).norm()
}

/// Axis-aligned rectangle `[x_min, x_max] x [y_min, y_max]` with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Domain {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let domain = Domain {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        domain.validate()?;
        Ok(domain)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(SimulationError::InvalidParameter(
                "domain bounds must be finite".to_string(),
            ));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(SimulationError::InvalidParameter(format!(
                "empty domain [{}, {}] x [{}, {}]",
                self.x_min, self.x_max, self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, p: &Vector2<f64>) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// True if `other` lies entirely inside this rectangle
    pub fn encloses(&self, other: &Domain) -> bool {
        other.x_min >= self.x_min
            && other.x_max <= self.x_max
            && other.y_min >= self.y_min
            && other.y_max <= self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

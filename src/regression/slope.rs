use serde::{Serialize, Deserialize};

use crate::error::{LabError, Result};
use crate::math::linspace;

/// Default number of points sampled along the loss curve.
pub const DEFAULT_GRID_POINTS: usize = 100;

/// Closed interval of slopes the user may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SlopeRange {
    fn default() -> Self {
        SlopeRange { min: -2.0, max: 4.0 }
    }
}

impl SlopeRange {
    /// Builds a range, rejecting non-finite bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<SlopeRange> {
        let range = SlopeRange { min, max };
        range.check()?;
        Ok(range)
    }

    /// Checks the bounds of an already constructed range (e.g. one read
    /// from a config file).
    pub fn check(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(LabError::InvalidRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    pub fn contains(&self, slope: f64) -> bool {
        slope >= self.min && slope <= self.max
    }

    /// Returns `slope` unchanged if it lies in the range; NaN and values
    /// outside the bounds fail with `SlopeOutOfRange`.
    pub fn validate(&self, slope: f64) -> Result<f64> {
        if self.contains(slope) {
            Ok(slope)
        } else {
            Err(LabError::SlopeOutOfRange { slope, min: self.min, max: self.max })
        }
    }

    /// Pins `slope` to the nearest bound, like a slider at its end stop.
    pub fn clamp(&self, slope: f64) -> f64 {
        slope.clamp(self.min, self.max)
    }
}

/// Evenly spaced candidate slopes spanning a `SlopeRange`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeGrid {
    slopes: Vec<f64>,
}

impl SlopeGrid {
    pub fn new(range: SlopeRange, points: usize) -> Result<SlopeGrid> {
        range.check()?;
        Ok(SlopeGrid { slopes: linspace(range.min, range.max, points) })
    }

    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    pub fn len(&self) -> usize {
        self.slopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slopes.is_empty()
    }
}

impl Default for SlopeGrid {
    fn default() -> Self {
        let range = SlopeRange::default();
        SlopeGrid { slopes: linspace(range.min, range.max, DEFAULT_GRID_POINTS) }
    }
}

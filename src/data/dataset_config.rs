use serde::{Serialize, Deserialize};

use crate::error::{LabError, Result};

/// Parameters of the synthetic regression dataset.
///
/// The generated points are `x = linspace(x_min, x_max, samples)` and
/// `y = true_slope * x + noise` with noise drawn from `N(0, noise_std)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Seed for the noise generator. Same seed, same dataset.
    pub seed: u64,
    pub samples: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Slope of the line the points are scattered around.
    pub true_slope: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_std: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            seed: 42,
            samples: 10,
            x_min: 0.0,
            x_max: 10.0,
            true_slope: 2.0,
            noise_std: 5.0,
        }
    }
}

impl DatasetConfig {
    /// Rejects parameters that would put NaN or infinity into the data.
    pub fn check(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(LabError::EmptyInput);
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(LabError::InvalidNoise(format!(
                "standard deviation must be finite and non-negative, got {}",
                self.noise_std
            )));
        }
        if !(self.x_max - self.x_min).is_finite() {
            return Err(LabError::InvalidConfig(format!(
                "x range [{}, {}] must be finite with a finite span",
                self.x_min, self.x_max
            )));
        }
        if !self.true_slope.is_finite() {
            return Err(LabError::InvalidConfig(format!(
                "true_slope must be finite, got {}",
                self.true_slope
            )));
        }
        Ok(())
    }
}

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Serialize, Deserialize};

use crate::data::dataset_config::DatasetConfig;
use crate::error::{LabError, Result};
use crate::math::linspace;

/// An immutable set of `(x, y)` observations.
///
/// Stored column-wise since every computation in the lab consumes the x and
/// y values as separate slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Builds a dataset from explicit columns.
    ///
    /// Fails with `LengthMismatch` if the columns differ in length and with
    /// `EmptyInput` if they are empty.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Dataset> {
        if x.len() != y.len() {
            return Err(LabError::LengthMismatch { expected: x.len(), actual: y.len() });
        }
        if x.is_empty() {
            return Err(LabError::EmptyInput);
        }
        Ok(Dataset { x, y })
    }

    /// Generates the noisy linear dataset described by `config`.
    ///
    /// All randomness comes from a `StdRng` seeded with `config.seed`, so the
    /// result depends on nothing but the config.
    pub fn generate(config: &DatasetConfig) -> Result<Dataset> {
        config.check()?;

        let noise = Normal::new(0.0, config.noise_std)?;
        let mut rng = StdRng::seed_from_u64(config.seed);

        let x = linspace(config.x_min, config.x_max, config.samples);
        let y = x.iter()
            .map(|xi| config.true_slope * xi + noise.sample(&mut rng))
            .collect();

        debug!(
            "generated dataset: {} samples, seed {}, true slope {}, noise std {}",
            config.samples, config.seed, config.true_slope, config.noise_std
        );

        Dataset::new(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the observations as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

use log::info;
use serde::{Serialize, Deserialize};

use crate::data::{Dataset, DatasetConfig};
use crate::error::{LabError, Result};
use crate::regression::{SlopeGrid, SlopeRange, DEFAULT_GRID_POINTS};

/// All the knobs of the lab: how the dataset is generated, where the slider
/// stops, how finely the loss curve is sampled, and where the slider starts.
///
/// Missing fields in a JSON file fall back to the classroom defaults, so a
/// config containing only `{"dataset": {"seed": 7}}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub dataset: DatasetConfig,
    pub slopes: SlopeRange,
    pub grid_points: usize,
    pub initial_slope: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            dataset: DatasetConfig::default(),
            slopes: SlopeRange::default(),
            grid_points: DEFAULT_GRID_POINTS,
            initial_slope: 1.0,
        }
    }
}

impl LabConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `LabConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<LabConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: LabConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        info!("loaded config from {path}");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.slopes.check()?;
        if self.grid_points < 2 {
            return Err(LabError::InvalidConfig(format!(
                "grid_points must be at least 2, got {}",
                self.grid_points
            )));
        }
        if !self.slopes.contains(self.initial_slope) {
            return Err(LabError::InvalidConfig(format!(
                "initial_slope {} is outside [{}, {}]",
                self.initial_slope, self.slopes.min, self.slopes.max
            )));
        }
        if self.dataset.samples == 0 {
            return Err(LabError::InvalidConfig("dataset.samples must be positive".into()));
        }
        self.dataset.check()
            .map_err(|e| LabError::InvalidConfig(format!("dataset: {e}")))
    }

    pub fn grid(&self) -> Result<SlopeGrid> {
        SlopeGrid::new(self.slopes, self.grid_points)
    }

    pub fn dataset(&self) -> Result<Dataset> {
        Dataset::generate(&self.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LabConfig::default();
        config.validate().unwrap();
        assert_eq!(config.grid().unwrap().len(), 100);
        assert_eq!(config.initial_slope, 1.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: LabConfig = serde_json::from_str(r#"{"dataset": {"seed": 7}}"#).unwrap();
        assert_eq!(config.dataset.seed, 7);
        assert_eq!(config.dataset.samples, 10);
        assert_eq!(config.slopes, SlopeRange::default());
    }

    #[test]
    fn initial_slope_outside_range_is_invalid() {
        let config = LabConfig { initial_slope: 9.0, ..LabConfig::default() };
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
    }

    #[test]
    fn single_point_grid_is_invalid() {
        let config = LabConfig { grid_points: 1, ..LabConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("slope-lab-config-{}.json", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        let config = LabConfig {
            initial_slope: -0.5,
            grid_points: 25,
            ..LabConfig::default()
        };
        config.save_json(&path).unwrap();
        let loaded = LabConfig::load_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn overflowing_x_span_is_invalid() {
        let config: LabConfig =
            serde_json::from_str(r#"{"dataset": {"x_min": -1e308, "x_max": 1e308}}"#).unwrap();
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
        assert!(config.dataset().is_err());
    }

    #[test]
    fn non_finite_slope_or_noise_is_invalid() {
        let mut config = LabConfig::default();
        config.dataset.true_slope = f64::INFINITY;
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));

        let mut config = LabConfig::default();
        config.dataset.noise_std = f64::NAN;
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
    }

    #[test]
    fn valid_config_never_yields_negative_or_nan_loss() {
        let config: LabConfig =
            serde_json::from_str(r#"{"dataset": {"x_min": -1e150, "x_max": 1e150}}"#).unwrap();
        config.validate().unwrap();
        let dataset = config.dataset().unwrap();
        let snap = crate::Snapshot::compute(&dataset, 1.0, &config.grid().unwrap()).unwrap();
        assert!(snap.mse >= 0.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            LabConfig::load_json("/definitely/not/here.json"),
            Err(LabError::Io(_))
        ));
    }
}

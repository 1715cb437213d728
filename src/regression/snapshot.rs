use log::debug;
use serde::{Serialize, Deserialize};

use crate::data::Dataset;
use crate::error::Result;
use crate::loss::mean_squared_error;
use crate::regression::loss_curve::{compute_loss_curve, LossCurve};
use crate::regression::predict::predict;
use crate::regression::slope::SlopeGrid;

/// Everything a front-end needs to redraw after the slope changes.
///
/// - `predictions` — fitted line evaluated at each x of the dataset
/// - `mse`         — loss at the current slope, i.e. the highlighted point
///                   `(slope, mse)` on the curve
/// - `curve`       — loss sampled over the whole slope grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub slope: f64,
    pub predictions: Vec<f64>,
    pub mse: f64,
    pub curve: LossCurve,
}

impl Snapshot {
    /// Runs one full update for `slope`.
    ///
    /// Nothing is cached between calls: the curve is recomputed from scratch
    /// every time, which keeps the update a pure function of its arguments.
    pub fn compute(dataset: &Dataset, slope: f64, grid: &SlopeGrid) -> Result<Snapshot> {
        let predictions = predict(dataset.x(), slope);
        let mse = mean_squared_error(dataset.y(), &predictions)?;
        let curve = compute_loss_curve(dataset.x(), dataset.y(), grid.slopes())?;

        debug!("snapshot at slope {slope:.4}: mse = {mse:.4}");

        Ok(Snapshot { slope, predictions, mse, curve })
    }
}

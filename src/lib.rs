pub mod error;
pub mod math;
pub mod loss;
pub mod data;
pub mod regression;
pub mod config;

// Convenience re-exports
pub use error::{LabError, Result};
pub use loss::{mean_squared_error, MseLoss};
pub use data::{Dataset, DatasetConfig};
pub use regression::{
    predict, best_fit_slope, compute_loss_curve,
    CurvePoint, LossCurve, SlopeGrid, SlopeRange, Snapshot,
};
pub use config::LabConfig;

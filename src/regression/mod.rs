pub mod predict;
pub mod slope;
pub mod loss_curve;
pub mod snapshot;

pub use predict::{predict, best_fit_slope};
pub use slope::{SlopeGrid, SlopeRange, DEFAULT_GRID_POINTS};
pub use loss_curve::{compute_loss_curve, CurvePoint, LossCurve};
pub use snapshot::Snapshot;

use log::trace;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::loss::mean_squared_error;
use crate::regression::predict::predict;

/// One sample of the loss curve: the MSE obtained with a candidate slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub slope: f64,
    pub mse: f64,
}

/// MSE sampled at every slope of a grid, in grid order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LossCurve {
    points: Vec<CurvePoint>,
}

impl LossCurve {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The sampled point with the lowest MSE; the earliest one wins a tie.
    pub fn minimum(&self) -> Option<CurvePoint> {
        self.points.iter().copied().fold(None, |best, p| match best {
            Some(b) if b.mse <= p.mse => Some(b),
            _ => Some(p),
        })
    }
}

/// Evaluates the MSE of `y = s * x` against `y_values` for every slope `s`
/// in `slope_grid`.
///
/// The result has exactly one point per grid entry, in the same order. The
/// first evaluation reports `LengthMismatch` if `x_values` and `y_values`
/// differ in length.
pub fn compute_loss_curve(
    x_values: &[f64],
    y_values: &[f64],
    slope_grid: &[f64],
) -> Result<LossCurve> {
    let points = slope_grid.iter()
        .map(|&slope| {
            let predictions = predict(x_values, slope);
            let mse = mean_squared_error(y_values, &predictions)?;
            Ok(CurvePoint { slope, mse })
        })
        .collect::<Result<Vec<_>>>()?;

    trace!("loss curve evaluated at {} slopes", points.len());
    Ok(LossCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabError;
    use crate::math::linspace;

    const X: [f64; 3] = [0.0, 1.0, 2.0];
    const Y: [f64; 3] = [0.0, 2.0, 4.0];

    #[test]
    fn preserves_grid_order_and_length() {
        let grid = [3.0, -1.0, 2.0, 0.5];
        let curve = compute_loss_curve(&X, &Y, &grid).unwrap();
        assert_eq!(curve.len(), grid.len());
        let slopes: Vec<f64> = curve.points().iter().map(|p| p.slope).collect();
        assert_eq!(slopes, grid.to_vec());
    }

    #[test]
    fn is_deterministic() {
        let grid = linspace(-2.0, 4.0, 100);
        let a = compute_loss_curve(&X, &Y, &grid).unwrap();
        let b = compute_loss_curve(&X, &Y, &grid).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn never_negative() {
        let grid = linspace(-2.0, 4.0, 100);
        let curve = compute_loss_curve(&X, &[1.0, -3.0, 7.0], &grid).unwrap();
        assert!(curve.points().iter().all(|p| p.mse >= 0.0));
    }

    #[test]
    fn minimum_is_at_the_true_slope() {
        let grid = [0.0, 1.0, 2.0, 3.0];
        let best = compute_loss_curve(&X, &Y, &grid).unwrap().minimum().unwrap();
        assert_eq!(best.slope, 2.0);
        assert_eq!(best.mse, 0.0);
    }

    #[test]
    fn minimum_prefers_first_on_tie() {
        // y = 0 everywhere: slopes -1 and 1 give the same loss.
        let curve = compute_loss_curve(&[1.0], &[0.0], &[-1.0, 1.0]).unwrap();
        assert_eq!(curve.minimum().unwrap().slope, -1.0);
    }

    #[test]
    fn empty_grid_gives_empty_curve() {
        let curve = compute_loss_curve(&X, &Y, &[]).unwrap();
        assert!(curve.is_empty());
        assert!(curve.minimum().is_none());
    }

    #[test]
    fn mismatched_dataset_fails() {
        let err = compute_loss_curve(&X, &[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, LabError::LengthMismatch { expected: 2, actual: 3 }));
    }
}

use crate::error::{LabError, Result};

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²)
    ///
    /// Fails with `LengthMismatch` when the two slices differ in length and
    /// with `EmptyInput` when both are empty.
    pub fn loss(expected: &[f64], predicted: &[f64]) -> Result<f64> {
        if expected.len() != predicted.len() {
            return Err(LabError::LengthMismatch {
                expected: expected.len(),
                actual: predicted.len(),
            });
        }
        if expected.is_empty() {
            return Err(LabError::EmptyInput);
        }

        let n = expected.len() as f64;
        Ok(expected.iter().zip(predicted.iter())
            .map(|(y, p)| (y - p).powi(2))
            .sum::<f64>() / n)
    }
}

/// Mean of squared differences between observations and predictions.
pub fn mean_squared_error(y_values: &[f64], predictions: &[f64]) -> Result<f64> {
    MseLoss::loss(y_values, predictions)
}

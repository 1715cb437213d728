use crate::error::{LabError, Result};

/// Predictions of the line `y = slope * x`, one per input.
pub fn predict(x_values: &[f64], slope: f64) -> Vec<f64> {
    x_values.iter().map(|x| slope * x).collect()
}

/// Closed-form least-squares slope for a line through the origin:
///   slope* = Σ(x·y) / Σ(x²)
///
/// This is the exact minimiser of the loss curve, which the sampled grid only
/// approximates.
pub fn best_fit_slope(x_values: &[f64], y_values: &[f64]) -> Result<f64> {
    if x_values.len() != y_values.len() {
        return Err(LabError::LengthMismatch {
            expected: x_values.len(),
            actual: y_values.len(),
        });
    }
    if x_values.is_empty() {
        return Err(LabError::EmptyInput);
    }

    let sxx: f64 = x_values.iter().map(|x| x * x).sum();
    if sxx == 0.0 {
        return Err(LabError::DegenerateInput);
    }
    let sxy: f64 = x_values.iter().zip(y_values.iter()).map(|(x, y)| x * y).sum();
    Ok(sxy / sxx)
}

use thiserror::Error;

/// Every failure the lab can report.
///
/// The numeric core only ever produces `LengthMismatch` and `EmptyInput`;
/// the remaining variants come from validating user-supplied slopes and
/// configuration, or from reading and writing config files.
#[derive(Error, Debug)]
pub enum LabError {
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cannot average over an empty sequence")]
    EmptyInput,

    #[error("slope {slope} is outside the allowed range [{min}, {max}]")]
    SlopeOutOfRange { slope: f64, min: f64, max: f64 },

    #[error("invalid slope range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid noise level: {0}")]
    InvalidNoise(String),

    #[error("no closed-form slope: every x value is zero")]
    DegenerateInput,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rand_distr::NormalError> for LabError {
    fn from(value: rand_distr::NormalError) -> Self {
        LabError::InvalidNoise(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LabError>;

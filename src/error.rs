/// Errors raised by network construction, training and inference.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A topology size is zero or the learning rate is not a positive finite number.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A caller-supplied vector disagrees with the declared topology.
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinity showed up in an activation or target.
    #[error("non-finite values in {layer}")]
    NumericInstability { layer: &'static str },

    #[error("label {label} is out of range for {classes} classes")]
    LabelOutOfRange { label: usize, classes: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::DimensionMismatch { what, expected, actual })
    }
}

/// Fails with `NumericInstability` if any value is NaN or infinite.
pub(crate) fn check_finite(layer: &'static str, values: &[f64]) -> Result<()> {
    if values.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(NetworkError::NumericInstability { layer })
    }
}

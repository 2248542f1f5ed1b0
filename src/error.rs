use thiserror::Error;

/// Errors raised while building tables or binding rates.
///
/// Every variant is a setup-time failure. Once an evaluator exists, evaluation
/// itself cannot fail.
#[derive(Error, Debug)]
pub enum PhotolysisError {
    #[error("No spectrum registered for rate `{0}`")]
    UnknownRate(String),
    #[error("Rate `{0}` is registered more than once")]
    DuplicateRate(String),
    #[error("Invalid calibration factor {factor} for rate `{rate}`: must be finite and >= 0")]
    InvalidCalibration { rate: String, factor: f64 },
    #[error("Invalid table `{table}`: {reason}")]
    InvalidTable { table: String, reason: String },
    #[error("Invalid location: {0}")]
    InvalidLocation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PhotolysisError {
    pub(crate) fn invalid_table(table: &str, reason: impl Into<String>) -> Self {
        PhotolysisError::InvalidTable {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type for `Result<T, PhotolysisError>`.
pub type PhotolysisResult<T> = Result<T, PhotolysisError>;

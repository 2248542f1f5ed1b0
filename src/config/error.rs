use crate::config::time_step::TimeStepParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("end_date cannot be earlier than start_date")]
    DateOrder,
    #[error("Failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
    #[error("{0}")]
    TimeStep(#[from] TimeStepParseError),
    #[error("hourly_increment should be one of 1, 2, 3, 4, 6, 8, 12")]
    HourlyIncrement,
    #[error("Invalid location: {0}")]
    Location(String),
    #[error("Invalid atmosphere: {0}")]
    Atmosphere(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

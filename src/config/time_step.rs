use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Spacing between the dates of a run.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TimeStep {
    #[serde(rename(deserialize = "daily"))]
    Daily,
    #[serde(rename(deserialize = "weekly"))]
    Weekly,
    #[serde(rename(deserialize = "monthly"))]
    Monthly,
}

impl FromStr for TimeStep {
    type Err = TimeStepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(TimeStep::Daily),
            "weekly" => Ok(TimeStep::Weekly),
            "monthly" => Ok(TimeStep::Monthly),
            other => Err(TimeStepParseError(other.to_string())),
        }
    }
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TimeStep::Daily => "daily",
            TimeStep::Weekly => "weekly",
            TimeStep::Monthly => "monthly",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug)]
pub struct TimeStepParseError(String);

impl fmt::Display for TimeStepParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid time step `{}`, expected daily, weekly or monthly",
            self.0
        )
    }
}

impl std::error::Error for TimeStepParseError {}

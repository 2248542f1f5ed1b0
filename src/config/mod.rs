use chrono::{Duration, Months, NaiveDate};

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::atmosphere::{AtmosphericSample, Location};
use crate::evaluator::Mechanism;

pub mod error;
pub use error::ConfigError;

pub mod time_step;
pub use time_step::TimeStep;

/// Single-column run: a time series at one location.
#[derive(Debug, Clone)]
pub struct Config {
    start_date: NaiveDate,
    end_date: NaiveDate,
    frequency: TimeStep,
    hourly_increment: u8,
    location: Location,
    atmosphere: AtmosphericSample,
    mechanism: Mechanism,
    spectra_file: Option<PathBuf>,
}

// This function deserializes a Config object from a deserializer, ensuring the dates are valid and
// in order, the hourly increment is within an acceptable range, and the location and atmosphere
// are physical.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            start_date: String,
            end_date: String,
            frequency: String,
            hourly_increment: u8,
            location: LocationHelper,
            atmosphere: Option<AtmosphericSample>,
            #[serde(default)]
            mechanism: Mechanism,
            spectra_file: Option<PathBuf>,
        }

        #[derive(Deserialize)]
        struct LocationHelper {
            latitude: f64,
            longitude: f64,
        }

        // Deserialize into the helper struct
        let helper = ConfigHelper::deserialize(deserializer)?;

        let start_date = NaiveDate::parse_from_str(&helper.start_date, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(ConfigError::DateParse(e)))?;

        let end_date = NaiveDate::parse_from_str(&helper.end_date, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(ConfigError::DateParse(e)))?;

        if start_date > end_date {
            return Err(D::Error::custom(ConfigError::DateOrder));
        }

        let frequency: TimeStep = helper
            .frequency
            .parse()
            .map_err(|e| D::Error::custom(ConfigError::TimeStep(e)))?;

        let valid_timestep = [1, 2, 3, 4, 6, 8, 12];
        if !valid_timestep.contains(&helper.hourly_increment) {
            return Err(D::Error::custom(ConfigError::HourlyIncrement));
        }

        let location = Location::from_degrees(helper.location.latitude, helper.location.longitude)
            .map_err(|e| D::Error::custom(ConfigError::Location(e.to_string())))?;

        let atmosphere = helper.atmosphere.unwrap_or_default();
        validate_atmosphere(&atmosphere).map_err(D::Error::custom)?;

        Ok(Config {
            start_date,
            end_date,
            frequency,
            hourly_increment: helper.hourly_increment,
            location,
            atmosphere,
            mechanism: helper.mechanism,
            spectra_file: helper.spectra_file,
        })
    }
}

fn validate_atmosphere(sample: &AtmosphericSample) -> Result<(), ConfigError> {
    if !(sample.pressure.is_finite() && sample.pressure > 0.0) {
        return Err(ConfigError::Atmosphere(format!(
            "pressure must be positive, got {}",
            sample.pressure
        )));
    }
    if !(sample.temperature.is_finite() && sample.temperature > 0.0) {
        return Err(ConfigError::Atmosphere(format!(
            "temperature must be positive, got {}",
            sample.temperature
        )));
    }
    if !(sample.water_vapor.is_finite() && sample.water_vapor >= 0.0) {
        return Err(ConfigError::Atmosphere(format!(
            "water_vapor must be non-negative, got {}",
            sample.water_vapor
        )));
    }
    Ok(())
}

impl Config {
    /// Run at `location` in a standard surface atmosphere with every rate.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        frequency: TimeStep,
        hourly_increment: u8,
        location: Location,
    ) -> Self {
        Self {
            start_date,
            end_date,
            frequency,
            hourly_increment,
            location,
            atmosphere: AtmosphericSample::default(),
            mechanism: Mechanism::default(),
            spectra_file: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn frequency(&self) -> TimeStep {
        self.frequency
    }

    pub fn hourly_increment(&self) -> u8 {
        self.hourly_increment
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn atmosphere(&self) -> &AtmosphericSample {
        &self.atmosphere
    }

    pub fn mechanism(&self) -> &Mechanism {
        &self.mechanism
    }

    /// Extra species definitions to load on top of the built-in set.
    pub fn spectra_file(&self) -> Option<&Path> {
        self.spectra_file.as_deref()
    }

    fn increment_date(&self, current_date: NaiveDate) -> Result<NaiveDate, String> {
        match self.frequency {
            TimeStep::Daily => Ok(current_date + Duration::days(1)),
            TimeStep::Weekly => Ok(current_date + Duration::weeks(1)),
            TimeStep::Monthly => current_date
                .checked_add_months(Months::new(1))
                .ok_or_else(|| format!("Failed to add a month to date: {}", current_date)),
        }
    }
}

impl Iterator for Config {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start_date <= self.end_date {
            let current_date = self.start_date;
            self.start_date = self.increment_date(self.start_date).ok()?;
            Some(current_date)
        } else {
            None
        }
    }
}

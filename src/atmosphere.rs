use serde::Deserialize;

use crate::error::{PhotolysisError, PhotolysisResult};

/// Geographic position, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Builds a location from degrees. Latitude must lie in [-90, 90] and
    /// longitude in [-180, 180].
    pub fn from_degrees(latitude: f64, longitude: f64) -> PhotolysisResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PhotolysisError::InvalidLocation(format!(
                "latitude {latitude} must be between -90 and 90"
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PhotolysisError::InvalidLocation(format!(
                "longitude {longitude} must be between -180 and 180"
            )));
        }

        Ok(Location {
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
        })
    }

    pub fn from_radians(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
        }
    }

    /// Latitude in radians.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in radians, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Local state of the air parcel a rate set is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AtmosphericSample {
    /// Pa
    pub pressure: f64,
    /// K
    pub temperature: f64,
    /// molecules cm⁻³
    #[serde(default)]
    pub water_vapor: f64,
}

impl AtmosphericSample {
    pub fn new(pressure: f64, temperature: f64, water_vapor: f64) -> Self {
        AtmosphericSample {
            pressure,
            temperature,
            water_vapor,
        }
    }
}

impl Default for AtmosphericSample {
    /// Standard surface atmosphere, dry.
    fn default() -> Self {
        AtmosphericSample::new(101325.0, 288.15, 0.0)
    }
}

use crate::config::Config;
use chrono::NaiveDateTime;
use log::warn;

/// Expands a run configuration into the instants it is evaluated at.
pub struct DateTimeGenerator {
    config: Config,
}

impl DateTimeGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// UTC date-times: every date of the run, stepped by `hourly_increment`.
    pub fn generate_datetime_series(&self) -> Vec<NaiveDateTime> {
        let hourly_increment = self.config.hourly_increment() as u32;
        if hourly_increment == 0 {
            warn!("hourly_increment is 0, no time steps generated");
            return Vec::new();
        }

        let mut datetimes = Vec::new();

        // Clone config to use as iterator
        let config_iter = self.config.clone();

        for date in config_iter {
            let hours_in_day = 24 / hourly_increment;

            for hour_step in 0..hours_in_day {
                if let Some(datetime) = date.and_hms_opt(hour_step * hourly_increment, 0, 0) {
                    datetimes.push(datetime);
                }
            }
        }

        datetimes
    }

    /// Same series as seconds since the Unix epoch.
    pub fn generate_timestamps(&self) -> Vec<f64> {
        self.generate_datetime_series()
            .iter()
            .map(|datetime| datetime.and_utc().timestamp() as f64)
            .collect()
    }
}

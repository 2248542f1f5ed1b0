//! Solar geometry.
//!
//! Uses the NOAA general solar position equations:
//! https://gml.noaa.gov/grad/solcalc/solareqns.PDF
//!
//! Time is seconds since 1970-01-01T00:00:00Z. Latitude and longitude are in
//! radians. All functions are generic over [`num::Float`] so the same code
//! runs for `f32`, `f64`, or any float-like type used by a solver.

use chrono::{DateTime, Datelike};
use num::{Float, NumCast};

const SECONDS_PER_DAY: f64 = 86400.0;

/// Length of the Gregorian calendar cycle, in days.
const GREGORIAN_CYCLE_DAYS: f64 = 146097.0;

fn lit<F: Float>(value: f64) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::nan)
}

#[derive(Debug, Clone, Copy)]
pub struct SolarPosition<F> {
    /// Solar declination (radians).
    pub declination: F,
    /// Equation of time (minutes).
    pub equation_of_time: F,
    /// Hour angle (radians), zero at local solar noon.
    pub hour_angle: F,
    /// Cosine of the solar zenith angle, in [-1, 1].
    pub cos_zenith: F,
}

impl<F: Float> SolarPosition<F> {
    /// Calculate the position of the sun.
    ///
    /// # Arguments
    /// * `time` - Seconds since the Unix epoch (UTC)
    /// * `latitude` - Latitude in radians
    /// * `longitude` - Longitude in radians, positive east
    pub fn calculate(time: F, latitude: F, longitude: F) -> Self {
        let seconds_per_day: F = lit(SECONDS_PER_DAY);
        let day = (time / seconds_per_day).floor();
        let hour = (time - day * seconds_per_day) / lit(3600.0);

        let (day_of_year, days_in_year) = calendar_day(day);

        let gamma = lit::<F>(2.0 * std::f64::consts::PI / days_in_year)
            * (lit::<F>(day_of_year - 1.0) + (hour - lit(12.0)) / lit(24.0));
        let two_gamma = gamma + gamma;
        let three_gamma = two_gamma + gamma;

        let declination = lit::<F>(0.006918) - lit::<F>(0.399912) * gamma.cos()
            + lit::<F>(0.070257) * gamma.sin()
            - lit::<F>(0.006758) * two_gamma.cos()
            + lit::<F>(0.000907) * two_gamma.sin()
            - lit::<F>(0.002697) * three_gamma.cos()
            + lit::<F>(0.00148) * three_gamma.sin();

        let equation_of_time = lit::<F>(229.18)
            * (lit::<F>(0.000075) + lit::<F>(0.001868) * gamma.cos()
                - lit::<F>(0.032077) * gamma.sin()
                - lit::<F>(0.014615) * two_gamma.cos()
                - lit::<F>(0.040849) * two_gamma.sin());

        // True solar time in minutes
        let time_offset = equation_of_time + lit::<F>(4.0) * longitude.to_degrees();
        let true_solar_time = hour * lit(60.0) + time_offset;
        let hour_angle = (true_solar_time / lit(4.0) - lit(180.0)).to_radians();

        let cos_zenith = latitude.sin() * declination.sin()
            + latitude.cos() * declination.cos() * hour_angle.cos();

        SolarPosition {
            declination,
            equation_of_time,
            hour_angle,
            cos_zenith: cos_zenith.max(-F::one()).min(F::one()),
        }
    }
}

/// Cosine of the solar zenith angle at `time` (Unix seconds) and
/// `latitude`/`longitude` (radians).
///
/// Values at or below zero mean the sun is at or below the horizon.
pub fn cos_zenith<F: Float>(time: F, latitude: F, longitude: F) -> F {
    SolarPosition::calculate(time, latitude, longitude).cos_zenith
}

/// Day of year (1-based) and number of days in that year for a day index
/// counted from 1970-01-01.
///
/// The calendar repeats every 400 years, so the index is folded into one cycle
/// before the date lookup. This keeps any finite time on a valid date.
fn calendar_day<F: Float>(day: F) -> (f64, f64) {
    let cycle_day = day
        .to_f64()
        .filter(|d| d.is_finite())
        .unwrap_or(0.0)
        .rem_euclid(GREGORIAN_CYCLE_DAYS) as i64;

    let date = DateTime::from_timestamp(cycle_day * SECONDS_PER_DAY as i64, 0)
        .unwrap_or_default()
        .date_naive();

    let year = date.year();
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_year = if leap { 366.0 } else { 365.0 };

    (date.ordinal() as f64, days_in_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn timestamp(datetime: &str) -> f64 {
        NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
            .timestamp() as f64
    }

    #[test]
    fn test_cos_zenith_reference_noon() {
        // 1970-01-01 12:00 UTC, 30N on the prime meridian
        let result = cos_zenith(43200.0, 30.0_f64.to_radians(), 0.0);
        let expected = 0.6009335117979622;
        assert!(
            ((result - expected) / expected).abs() < 1e-6,
            "Expected {expected}, got {result}"
        );
    }

    #[test]
    fn test_cos_zenith_early_morning() {
        // About 06:00 local solar time near Boulder, Colorado
        let time = timestamp("2024-06-24 12:00:00");
        let result = cos_zenith(time, 40.0_f64.to_radians(), (-105.0_f64).to_radians());
        let expected = 0.06750815340362026;
        assert!(
            ((result - expected) / expected).abs() < 1e-6,
            "Expected {expected}, got {result}"
        );
    }

    #[test]
    fn test_cos_zenith_in_range() {
        let times = [-1.0e12, -86400.5, 0.0, 1.0, 43200.0, 1.7e9, 3.3e10, 1.0e15, 1.0e300];
        let angles = [-7.0, -1.5, -0.3, 0.0, 0.5, 1.57, 3.2, 12.0];

        for &time in &times {
            for &lat in &angles {
                for &lon in &angles {
                    let c = cos_zenith(time, lat, lon);
                    assert!((-1.0..=1.0).contains(&c), "cos_zenith({time}, {lat}, {lon}) = {c}");
                }
            }
        }
    }

    #[test]
    fn test_single_and_double_precision_agree() {
        let time = timestamp("2023-03-21 15:30:00");
        let lat = 45.5_f64.to_radians();
        let lon = (-73.5_f64).to_radians();

        let double = cos_zenith(time, lat, lon);
        // f32 cannot resolve seconds at 1.7e9, so stay within the same day
        let day_start = (time / 86400.0).floor() * 86400.0;
        let single_day = cos_zenith((time - day_start) as f32, lat as f32, lon as f32);
        let double_day = cos_zenith(time - day_start, lat, lon);

        assert!((double_day - single_day as f64).abs() < 1e-4);
        assert!((-1.0..=1.0).contains(&double));
    }

    #[test]
    fn test_noon_at_equator_near_equinox() {
        let time = timestamp("2023-03-21 12:07:00");
        let pos = SolarPosition::calculate(time, 0.0, 0.0);

        assert!(pos.cos_zenith > 0.99, "{}", pos.cos_zenith);
        assert!(pos.declination.abs() < 0.01);
    }

    #[test]
    fn test_declination_range() {
        let mut min_dec = f64::MAX;
        let mut max_dec = f64::MIN;

        for day in (0..365).step_by(5) {
            let pos = SolarPosition::calculate(day as f64 * 86400.0, 0.0, 0.0);
            min_dec = min_dec.min(pos.declination.to_degrees());
            max_dec = max_dec.max(pos.declination.to_degrees());
        }

        assert!(min_dec < -23.0 && min_dec > -24.0, "min declination {min_dec}");
        assert!(max_dec > 23.0 && max_dec < 24.0, "max declination {max_dec}");
    }

    #[test]
    fn test_midnight_is_night() {
        let time = timestamp("2023-06-21 00:00:00");
        let c = cos_zenith(time, 45.0_f64.to_radians(), 0.0);
        assert!(c < 0.0);
    }

    #[test]
    fn test_polar_summer_has_midnight_sun() {
        let time = timestamp("2023-06-21 00:00:00");
        let c = cos_zenith(time, 85.0_f64.to_radians(), 0.0);
        assert!(c > 0.0);
    }

    #[test]
    fn test_leap_year_days() {
        let (doy, days) = calendar_day(timestamp("2024-12-31 06:00:00") / 86400.0);
        assert_eq!(doy, 366.0);
        assert_eq!(days, 366.0);

        let (doy, days) = calendar_day(timestamp("2023-12-31 06:00:00") / 86400.0);
        assert_eq!(doy, 365.0);
        assert_eq!(days, 365.0);
    }

    #[test]
    fn test_negative_times_use_valid_dates() {
        // 1969-12-31
        let (doy, days) = calendar_day(-1.0_f64);
        assert_eq!(doy, 365.0);
        assert_eq!(days, 365.0);
    }
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::data;
use crate::bins::{FluxVector, NBINS};
use crate::error::{PhotolysisError, PhotolysisResult};
use crate::interpolate::{bracket, check_grid, interpolate, lerp};

const TABLE_NAME: &str = "actinic flux";

/// Raw tables an [`ActinicFluxTable`] is built from.
///
/// This is also the JSON layout accepted by [`ActinicFluxTable::from_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluxTableData {
    /// Pressure levels (Pa), strictly increasing.
    pub pressure_levels: Vec<f64>,
    /// Top-of-atmosphere flux (photons cm⁻² s⁻¹).
    pub top_of_atmosphere: [f64; NBINS],
    /// Overhead-sun flux at each pressure level.
    pub overhead_flux: Vec<[f64; NBINS]>,
    /// Cosine of the solar zenith angle where the twilight curve is sampled.
    pub twilight_cos_zenith: Vec<f64>,
    /// Fraction of the horizon flux kept by diffuse bins.
    pub twilight_factor: Vec<f64>,
    /// Bins that keep scattered light once the sun is below the horizon.
    pub diffuse_bins: [bool; NBINS],
}

impl FluxTableData {
    pub fn builtin() -> Self {
        Self {
            pressure_levels: data::PRESSURE_LEVELS.to_vec(),
            top_of_atmosphere: data::TOP_OF_ATMOSPHERE,
            overhead_flux: data::OVERHEAD_FLUX.to_vec(),
            twilight_cos_zenith: data::TWILIGHT_COS_ZENITH.to_vec(),
            twilight_factor: data::TWILIGHT_FACTOR.to_vec(),
            diffuse_bins: data::DIFFUSE_BINS,
        }
    }

    fn validate(&self) -> PhotolysisResult<()> {
        check_grid(&self.pressure_levels)
            .map_err(|e| PhotolysisError::invalid_table(TABLE_NAME, format!("pressure levels {e}")))?;
        if self.pressure_levels[0] <= 0.0 {
            return Err(PhotolysisError::invalid_table(
                TABLE_NAME,
                "pressure levels must be positive",
            ));
        }
        if self.overhead_flux.len() != self.pressure_levels.len() {
            return Err(PhotolysisError::invalid_table(
                TABLE_NAME,
                format!(
                    "{} flux rows for {} pressure levels",
                    self.overhead_flux.len(),
                    self.pressure_levels.len()
                ),
            ));
        }

        for (bin, &top) in self.top_of_atmosphere.iter().enumerate() {
            if !(top.is_finite() && top > 0.0) {
                return Err(PhotolysisError::invalid_table(
                    TABLE_NAME,
                    format!("top-of-atmosphere flux in bin {bin} must be positive"),
                ));
            }
            let mut above = top;
            for (level, row) in self.overhead_flux.iter().enumerate() {
                let value = row[bin];
                if !(value.is_finite() && value > 0.0) {
                    return Err(PhotolysisError::invalid_table(
                        TABLE_NAME,
                        format!("flux at level {level}, bin {bin} must be positive"),
                    ));
                }
                if value > above {
                    return Err(PhotolysisError::invalid_table(
                        TABLE_NAME,
                        format!("flux in bin {bin} increases with pressure at level {level}"),
                    ));
                }
                above = value;
            }
        }

        check_grid(&self.twilight_cos_zenith)
            .map_err(|e| PhotolysisError::invalid_table(TABLE_NAME, format!("twilight curve {e}")))?;
        if self.twilight_factor.len() != self.twilight_cos_zenith.len() {
            return Err(PhotolysisError::invalid_table(
                TABLE_NAME,
                "twilight factors and nodes differ in length",
            ));
        }
        if self.twilight_cos_zenith.iter().any(|&c| c > 0.0) {
            return Err(PhotolysisError::invalid_table(
                TABLE_NAME,
                "twilight curve must lie at or below the horizon",
            ));
        }
        if self
            .twilight_factor
            .iter()
            .any(|f| !(0.0..=1.0).contains(f))
        {
            return Err(PhotolysisError::invalid_table(
                TABLE_NAME,
                "twilight factors must lie in [0, 1]",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum SlantPath {
    /// Sun above the horizon, relative air mass of the direct beam.
    Direct(f64),
    /// Sun below the horizon, fraction of the horizon flux left in diffuse bins.
    Twilight(f64),
    Dark,
}

/// Actinic flux as a function of solar zenith angle and pressure.
#[derive(Debug, Clone)]
pub struct ActinicFluxTable {
    pressure_levels: Vec<f64>,
    ln_pressure: Vec<f64>,
    top_of_atmosphere: [f64; NBINS],
    // Overhead optical depth, ln(F0 / F_ref), one row per pressure level
    optical_depth: Vec<[f64; NBINS]>,
    twilight_cos_zenith: Vec<f64>,
    twilight_factor: Vec<f64>,
    diffuse_bins: [bool; NBINS],
    horizon_air_mass: f64,
}

impl ActinicFluxTable {
    pub fn builtin() -> PhotolysisResult<Self> {
        Self::from_data(FluxTableData::builtin())
    }

    pub fn from_data(data: FluxTableData) -> PhotolysisResult<Self> {
        data.validate()?;

        let ln_pressure = data.pressure_levels.iter().map(|p| p.ln()).collect();
        let optical_depth = data
            .overhead_flux
            .iter()
            .map(|row| {
                let mut tau = [0.0; NBINS];
                for (bin, value) in tau.iter_mut().enumerate() {
                    *value = (data.top_of_atmosphere[bin] / row[bin]).ln();
                }
                tau
            })
            .collect();

        debug!(
            "Built actinic flux table: {} pressure levels ({} - {} Pa), {} diffuse bins",
            data.pressure_levels.len(),
            data.pressure_levels[0],
            data.pressure_levels[data.pressure_levels.len() - 1],
            data.diffuse_bins.iter().filter(|d| **d).count()
        );

        Ok(Self {
            pressure_levels: data.pressure_levels,
            ln_pressure,
            top_of_atmosphere: data.top_of_atmosphere,
            optical_depth,
            twilight_cos_zenith: data.twilight_cos_zenith,
            twilight_factor: data.twilight_factor,
            diffuse_bins: data.diffuse_bins,
            horizon_air_mass: air_mass(0.0),
        })
    }

    /// Loads a table from a JSON document with the [`FluxTableData`] layout.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PhotolysisResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let data: FluxTableData = serde_json::from_reader(reader)?;
        Self::from_data(data)
    }

    /// Flux in every bin for the given geometry and pressure (Pa).
    pub fn flux_vector(&self, cos_zenith: f64, pressure: f64) -> FluxVector {
        let (level, weight) = self.pressure_level(pressure);
        let path = self.slant_path(cos_zenith);

        let mut flux = [0.0; NBINS];
        for (bin, value) in flux.iter_mut().enumerate() {
            *value = self.bin_flux(path, level, weight, bin);
        }
        FluxVector::new(flux)
    }

    /// Flux in a single bin, or `None` if `bin` is not a valid bin index.
    pub fn flux(&self, cos_zenith: f64, pressure: f64, bin: usize) -> Option<f64> {
        if bin >= NBINS {
            return None;
        }
        let (level, weight) = self.pressure_level(pressure);
        Some(self.bin_flux(self.slant_path(cos_zenith), level, weight, bin))
    }

    pub fn pressure_range(&self) -> (f64, f64) {
        (
            self.pressure_levels[0],
            self.pressure_levels[self.pressure_levels.len() - 1],
        )
    }

    pub fn is_diffuse(&self, bin: usize) -> bool {
        self.diffuse_bins[bin]
    }

    fn pressure_level(&self, pressure: f64) -> (usize, f64) {
        let (low, high) = self.pressure_range();
        let clamped = pressure.max(low).min(high);
        bracket(&self.ln_pressure, clamped.ln())
    }

    fn slant_path(&self, cos_zenith: f64) -> SlantPath {
        let cos_zenith = cos_zenith.min(1.0);
        if cos_zenith > 0.0 {
            return SlantPath::Direct(air_mass(cos_zenith));
        }

        let factor = interpolate(&self.twilight_cos_zenith, &self.twilight_factor, cos_zenith);
        if factor > 0.0 {
            SlantPath::Twilight(factor)
        } else {
            SlantPath::Dark
        }
    }

    fn bin_flux(&self, path: SlantPath, level: usize, weight: f64, bin: usize) -> f64 {
        let tau = lerp(
            self.optical_depth[level][bin],
            self.optical_depth[level + 1][bin],
            weight,
        );
        let top = self.top_of_atmosphere[bin];

        match path {
            SlantPath::Direct(mass) => top * (-tau * mass).exp(),
            SlantPath::Twilight(factor) if self.diffuse_bins[bin] => {
                top * (-tau * self.horizon_air_mass).exp() * factor
            }
            SlantPath::Twilight(_) | SlantPath::Dark => 0.0,
        }
    }
}

/// Relative optical air mass of the direct beam (Kasten & Young, 1989).
///
/// Close to `1 / cos_zenith` for a high sun, finite (about 38) at the horizon.
pub fn air_mass(cos_zenith: f64) -> f64 {
    let zenith_deg = cos_zenith.acos().to_degrees();
    1.0 / (cos_zenith + 0.50572 * (96.07995 - zenith_deg).powf(-1.6364))
}

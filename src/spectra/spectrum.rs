use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bins::NBINS;
use crate::error::{PhotolysisError, PhotolysisResult};
use crate::interpolate::{bracket, check_grid, lerp};

/// Absorption cross section (cm²) per wavelength bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossSection {
    /// Independent of temperature.
    Fixed([f64; NBINS]),
    /// One row per tabulated temperature (K). Linear in temperature between
    /// rows and clamped to the first and last row outside the table.
    TemperatureDependent {
        temperatures: Vec<f64>,
        values: Vec<[f64; NBINS]>,
    },
}

impl CrossSection {
    /// Cross section in every bin at `temperature` (K).
    pub fn at(&self, temperature: f64) -> [f64; NBINS] {
        match self {
            CrossSection::Fixed(values) => *values,
            CrossSection::TemperatureDependent {
                temperatures,
                values,
            } => {
                let (idx, rr) = bracket(temperatures, temperature);
                let (low, high) = (&values[idx], &values[idx + 1]);

                let mut out = [0.0; NBINS];
                for (bin, value) in out.iter_mut().enumerate() {
                    *value = lerp(low[bin], high[bin], rr);
                }
                out
            }
        }
    }

    pub fn is_temperature_dependent(&self) -> bool {
        matches!(self, CrossSection::TemperatureDependent { .. })
    }

    pub(crate) fn validate(&self, species: &str) -> PhotolysisResult<()> {
        let rows: &[[f64; NBINS]] = match self {
            CrossSection::Fixed(values) => std::slice::from_ref(values),
            CrossSection::TemperatureDependent {
                temperatures,
                values,
            } => {
                check_grid(temperatures).map_err(|e| {
                    PhotolysisError::invalid_table(species, format!("temperatures {e}"))
                })?;
                if temperatures.len() != values.len() {
                    return Err(PhotolysisError::invalid_table(
                        species,
                        format!(
                            "{} cross-section rows for {} temperatures",
                            values.len(),
                            temperatures.len()
                        ),
                    ));
                }
                values
            }
        };

        if rows
            .iter()
            .flatten()
            .any(|value| !(value.is_finite() && *value >= 0.0))
        {
            return Err(PhotolysisError::invalid_table(
                species,
                "cross sections must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Quantum yield of one photolysis channel in each bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantumYield([f64; NBINS]);

impl QuantumYield {
    pub const UNIT: QuantumYield = QuantumYield([1.0; NBINS]);

    pub fn new(values: [f64; NBINS]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; NBINS] {
        &self.0
    }

    fn validate(&self, rate: &str) -> PhotolysisResult<()> {
        if self.0.iter().any(|phi| !(0.0..=1.0).contains(phi)) {
            return Err(PhotolysisError::invalid_table(
                rate,
                "quantum yields must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// One photolysis channel of a species, as read from a spectrum definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Name the rate is published under, e.g. `j_O3_O1D`.
    pub rate: String,
    pub quantum_yield: QuantumYield,
}

/// Spectral data for one absorbing species and all of its channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSpectrum {
    pub species: String,
    pub cross_section: CrossSection,
    pub channels: Vec<ChannelSpec>,
}

impl SpeciesSpectrum {
    pub(crate) fn validate(&self) -> PhotolysisResult<()> {
        if self.channels.is_empty() {
            return Err(PhotolysisError::invalid_table(
                &self.species,
                "species has no photolysis channels",
            ));
        }
        self.cross_section.validate(&self.species)?;
        for channel in &self.channels {
            channel.quantum_yield.validate(&channel.rate)?;
        }
        Ok(())
    }
}

/// A rate bound to its spectral data.
///
/// Channels of the same species, and aliases of a channel, share the same
/// cross-section allocation.
#[derive(Debug, Clone)]
pub struct Channel {
    pub(crate) rate: String,
    pub(crate) species: String,
    pub(crate) alias_of: Option<String>,
    pub(crate) cross_section: Arc<CrossSection>,
    pub(crate) quantum_yield: Arc<QuantumYield>,
}

impl Channel {
    pub fn rate(&self) -> &str {
        &self.rate
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    /// Rate whose spectrum this channel borrows, if it is a stand-in.
    pub fn alias_of(&self) -> Option<&str> {
        self.alias_of.as_deref()
    }

    pub fn cross_section(&self) -> &Arc<CrossSection> {
        &self.cross_section
    }

    pub fn quantum_yield(&self) -> &QuantumYield {
        &self.quantum_yield
    }

    /// Whether both channels read the same underlying absorption table.
    pub fn shares_absorption_with(&self, other: &Channel) -> bool {
        Arc::ptr_eq(&self.cross_section, &other.cross_section)
    }
}

/// Static form of the built-in tables.
#[derive(Debug)]
pub(crate) enum BuiltinCrossSection {
    Fixed(&'static [f64; NBINS]),
    TemperatureDependent(&'static [f64], &'static [[f64; NBINS]]),
}

#[derive(Debug)]
pub(crate) struct BuiltinSpecies {
    pub species: &'static str,
    pub cross_section: BuiltinCrossSection,
    pub channels: &'static [(&'static str, &'static [f64; NBINS])],
}

impl BuiltinSpecies {
    pub fn to_spectrum(&self) -> SpeciesSpectrum {
        let cross_section = match self.cross_section {
            BuiltinCrossSection::Fixed(values) => CrossSection::Fixed(*values),
            BuiltinCrossSection::TemperatureDependent(temperatures, values) => {
                CrossSection::TemperatureDependent {
                    temperatures: temperatures.to_vec(),
                    values: values.to_vec(),
                }
            }
        };

        SpeciesSpectrum {
            species: self.species.to_string(),
            cross_section,
            channels: self
                .channels
                .iter()
                .map(|(rate, yields)| ChannelSpec {
                    rate: rate.to_string(),
                    quantum_yield: QuantumYield::new(**yields),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_temperature_table() -> CrossSection {
        let mut cold = [0.0; NBINS];
        let mut warm = [0.0; NBINS];
        cold[10] = 1.0e-19;
        warm[10] = 3.0e-19;
        cold[11] = 2.0e-20;
        warm[11] = 2.0e-20;

        CrossSection::TemperatureDependent {
            temperatures: vec![200.0, 300.0],
            values: vec![cold, warm],
        }
    }

    #[test]
    fn test_temperature_interpolation() {
        let xs = two_temperature_table();

        let mid = xs.at(250.0);
        assert!((mid[10] - 2.0e-19).abs() < 1e-30);
        assert_eq!(mid[11], 2.0e-20);
        assert_eq!(mid[0], 0.0);
    }

    #[test]
    fn test_temperature_is_clamped() {
        let xs = two_temperature_table();

        assert_eq!(xs.at(100.0), xs.at(200.0));
        assert_eq!(xs.at(400.0), xs.at(300.0));
        assert_eq!(xs.at(f64::NAN), xs.at(200.0));
        assert_eq!(xs.at(400.0)[10], 3.0e-19);
    }

    #[test]
    fn test_fixed_ignores_temperature() {
        let mut values = [0.0; NBINS];
        values[4] = 5.0e-19;
        let xs = CrossSection::Fixed(values);

        assert_eq!(xs.at(150.0), xs.at(320.0));
        assert!(!xs.is_temperature_dependent());
    }

    #[test]
    fn test_validation() {
        assert!(two_temperature_table().validate("X").is_ok());

        let mut values = [0.0; NBINS];
        values[2] = -1.0e-20;
        assert!(CrossSection::Fixed(values).validate("X").is_err());

        let mismatched = CrossSection::TemperatureDependent {
            temperatures: vec![200.0, 250.0, 300.0],
            values: vec![[0.0; NBINS]; 2],
        };
        assert!(mismatched.validate("X").is_err());

        let unordered = CrossSection::TemperatureDependent {
            temperatures: vec![300.0, 200.0],
            values: vec![[0.0; NBINS]; 2],
        };
        assert!(unordered.validate("X").is_err());

        let mut yields = [1.0; NBINS];
        yields[0] = 1.5;
        assert!(QuantumYield::new(yields).validate("j_X").is_err());
    }

    #[test]
    fn test_species_needs_channels() {
        let spectrum = SpeciesSpectrum {
            species: "X".to_string(),
            cross_section: CrossSection::Fixed([0.0; NBINS]),
            channels: vec![],
        };
        assert!(spectrum.validate().is_err());
    }

    #[test]
    fn test_json_layout() {
        let json = r#"
        {
            "species": "XO",
            "cross_section": {
                "temperature_dependent": {
                    "temperatures": [220.0, 298.0],
                    "values": [
                        [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1e-19,2e-19,0],
                        [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2e-19,3e-19,0]
                    ]
                }
            },
            "channels": [
                {"rate": "j_XO", "quantum_yield": [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1]}
            ]
        }
        "#;

        let spectrum: SpeciesSpectrum = serde_json::from_str(json).unwrap();
        assert_eq!(spectrum.species, "XO");
        assert!(spectrum.cross_section.is_temperature_dependent());
        assert_eq!(spectrum.channels[0].quantum_yield, QuantumYield::UNIT);
        assert!(spectrum.validate().is_ok());
    }
}

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use super::data::{BUILTIN_ALIASES, BUILTIN_SPECIES};
use super::spectrum::{Channel, SpeciesSpectrum};
use crate::error::{PhotolysisError, PhotolysisResult};

/// Spectral data for every registered photolysis rate, keyed by rate name.
#[derive(Debug, Clone, Default)]
pub struct SpectralDataStore {
    channels: HashMap<String, Channel>,
}

impl SpectralDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the built-in species and their stand-in aliases.
    pub fn builtin() -> PhotolysisResult<Self> {
        let mut store = Self::new();
        for species in BUILTIN_SPECIES {
            store.insert(species.to_spectrum())?;
        }
        for (rate, source) in BUILTIN_ALIASES {
            store.alias(rate, source)?;
        }

        debug!(
            "Built spectral store: {} species, {} rates",
            BUILTIN_SPECIES.len(),
            store.len()
        );
        Ok(store)
    }

    /// Registers a species and every one of its channels.
    ///
    /// Nothing is registered if any channel name is already taken or the
    /// tables are malformed.
    pub fn insert(&mut self, spectrum: SpeciesSpectrum) -> PhotolysisResult<()> {
        spectrum.validate()?;

        for (i, channel) in spectrum.channels.iter().enumerate() {
            let repeated = spectrum.channels[..i]
                .iter()
                .any(|other| other.rate == channel.rate);
            if repeated || self.channels.contains_key(&channel.rate) {
                return Err(PhotolysisError::DuplicateRate(channel.rate.clone()));
            }
        }

        let SpeciesSpectrum {
            species,
            cross_section,
            channels,
        } = spectrum;
        let cross_section = Arc::new(cross_section);

        for spec in channels {
            let channel = Channel {
                rate: spec.rate.clone(),
                species: species.clone(),
                alias_of: None,
                cross_section: Arc::clone(&cross_section),
                quantum_yield: Arc::new(spec.quantum_yield),
            };
            self.channels.insert(spec.rate, channel);
        }
        Ok(())
    }

    /// Publishes `rate` using the spectrum of the already registered `source`.
    ///
    /// The alias shares the source's tables rather than copying them.
    pub fn alias(&mut self, rate: &str, source: &str) -> PhotolysisResult<()> {
        if self.channels.contains_key(rate) {
            return Err(PhotolysisError::DuplicateRate(rate.to_string()));
        }
        let channel = self.alias_channel(rate, source)?;
        self.channels.insert(rate.to_string(), channel);
        Ok(())
    }

    /// Builds the channel an alias of `source` would have, without
    /// registering it.
    pub(crate) fn alias_channel(&self, rate: &str, source: &str) -> PhotolysisResult<Channel> {
        let original = self.get(source)?;
        Ok(Channel {
            rate: rate.to_string(),
            species: original.species.clone(),
            alias_of: Some(
                original
                    .alias_of
                    .clone()
                    .unwrap_or_else(|| original.rate.clone()),
            ),
            cross_section: Arc::clone(&original.cross_section),
            quantum_yield: Arc::clone(&original.quantum_yield),
        })
    }

    pub fn channel(&self, rate: &str) -> Option<&Channel> {
        self.channels.get(rate)
    }

    /// Like [`channel`](Self::channel), but a missing rate is an error.
    pub fn get(&self, rate: &str) -> PhotolysisResult<&Channel> {
        self.channels
            .get(rate)
            .ok_or_else(|| PhotolysisError::UnknownRate(rate.to_string()))
    }

    pub fn contains(&self, rate: &str) -> bool {
        self.channels.contains_key(rate)
    }

    /// Registered rate names in alphabetical order.
    pub fn rate_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.channels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Adds the species listed in a JSON file (an array of
    /// [`SpeciesSpectrum`]). Returns the number of species added.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> PhotolysisResult<usize> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let spectra: Vec<SpeciesSpectrum> = serde_json::from_reader(reader)?;

        let count = spectra.len();
        for spectrum in spectra {
            self.insert(spectrum)?;
        }

        debug!("Loaded {} species from {}", count, path.as_ref().display());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bins::NBINS;
    use crate::spectra::spectrum::{ChannelSpec, CrossSection, QuantumYield};
    use std::io::Write;
    use tempfile::tempdir;

    fn species(name: &str, rates: &[&str]) -> SpeciesSpectrum {
        SpeciesSpectrum {
            species: name.to_string(),
            cross_section: CrossSection::Fixed([1.0e-20; NBINS]),
            channels: rates
                .iter()
                .map(|rate| ChannelSpec {
                    rate: rate.to_string(),
                    quantum_yield: QuantumYield::new([0.5; NBINS]),
                })
                .collect(),
        }
    }

    #[test]
    fn test_builtin_contents() {
        let store = SpectralDataStore::builtin().unwrap();

        for rate in [
            "j_O3_O1D", "j_O3_O3P", "j_NO2", "j_H2O2", "j_CH2Oa", "j_CH2Ob", "j_CH3OOH", "j_NO3a",
            "j_NO3b", "j_HNO3", "j_ClNO3a", "j_BrNO3b", "j_CFCl3", "j_C2H5OOH", "j_MEK",
        ] {
            assert!(store.contains(rate), "missing {rate}");
        }
        assert!(store.len() >= 53);
        assert!(store.rate_names().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_branches_share_absorption() {
        let store = SpectralDataStore::builtin().unwrap();
        let o1d = store.get("j_O3_O1D").unwrap();
        let o3p = store.get("j_O3_O3P").unwrap();

        assert!(o1d.shares_absorption_with(o3p));
        assert_ne!(o1d.quantum_yield(), o3p.quantum_yield());
        assert_eq!(o1d.species(), "O3");
        assert!(o1d.cross_section().is_temperature_dependent());
    }

    #[test]
    fn test_alias_shares_tables() {
        let store = SpectralDataStore::builtin().unwrap();
        let alias = store.get("j_C2H5OOH").unwrap();
        let source = store.get("j_CH3OOH").unwrap();

        assert!(alias.shares_absorption_with(source));
        assert!(Arc::ptr_eq(&alias.quantum_yield, &source.quantum_yield));
        assert_eq!(alias.alias_of(), Some("j_CH3OOH"));
        assert_eq!(source.alias_of(), None);
    }

    #[test]
    fn test_mechanism_style_aliases() {
        let store = SpectralDataStore::builtin().unwrap();

        for (alias, source) in [
            ("j_MP", "j_CH3OOH"),
            ("j_ALD2", "j_CH3CHO"),
            ("j_GLYC", "j_CH3CHO"),
            ("j_MACR", "j_CH3CHO"),
            ("j_HAC", "j_CH3COCH3"),
            ("j_MVK", "j_CH3COCH3"),
            ("j_R4N2", "j_HNO3"),
            ("j_PPN", "j_PAN"),
        ] {
            let channel = store.get(alias).unwrap();
            assert_eq!(channel.alias_of(), Some(source));
            assert!(channel.shares_absorption_with(store.get(source).unwrap()));
        }
    }

    #[test]
    fn test_alias_of_alias_points_to_original() {
        let mut store = SpectralDataStore::builtin().unwrap();
        store.alias("j_C3H7OOH", "j_C2H5OOH").unwrap();
        assert_eq!(
            store.get("j_C3H7OOH").unwrap().alias_of(),
            Some("j_CH3OOH")
        );
    }

    #[test]
    fn test_unknown_rate() {
        let store = SpectralDataStore::builtin().unwrap();
        assert!(store.channel("j_XYZ").is_none());
        assert!(matches!(
            store.get("j_XYZ"),
            Err(PhotolysisError::UnknownRate(name)) if name == "j_XYZ"
        ));

        let mut store = store;
        assert!(matches!(
            store.alias("j_ABC", "j_XYZ"),
            Err(PhotolysisError::UnknownRate(_))
        ));
    }

    #[test]
    fn test_duplicate_rates_are_rejected() {
        let mut store = SpectralDataStore::new();
        store.insert(species("A", &["j_A"])).unwrap();

        assert!(matches!(
            store.insert(species("B", &["j_B", "j_A"])),
            Err(PhotolysisError::DuplicateRate(name)) if name == "j_A"
        ));
        // Nothing from the rejected species was registered
        assert!(!store.contains("j_B"));

        assert!(store.insert(species("C", &["j_C", "j_C"])).is_err());
        assert!(store.alias("j_A", "j_A").is_err());
    }

    #[test]
    fn test_extend_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("spectra.json");
        let mut file = File::create(&file_path).unwrap();
        let json = serde_json::to_string(&vec![species("Y", &["j_Ya", "j_Yb"])]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let mut store = SpectralDataStore::builtin().unwrap();
        let before = store.len();
        let added = store.extend_from_file(&file_path).unwrap();

        assert_eq!(added, 1);
        assert_eq!(store.len(), before + 2);
        assert!(
            store
                .get("j_Ya")
                .unwrap()
                .shares_absorption_with(store.get("j_Yb").unwrap())
        );
    }

    #[test]
    fn test_extend_from_missing_file() {
        let mut store = SpectralDataStore::new();
        assert!(matches!(
            store.extend_from_file("/nonexistent/spectra.json"),
            Err(PhotolysisError::Io(_))
        ));
    }
}

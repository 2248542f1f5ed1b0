//! Photolysis rate coefficients (j-values) for atmospheric chemistry models.
//!
//! A j-value is the first-order loss rate (s⁻¹) of a molecule by sunlight:
//!
//! ```text
//! j = Σ_bins F(λ) σ(λ, T) φ(λ)
//! ```
//!
//! with `F` the actinic flux from [`flux`], `σ` the absorption cross section
//! and `φ` the quantum yield from [`spectra`]. The flux depends on the solar
//! zenith angle from [`solar`] and on pressure.
//!
//! ```no_run
//! use photolysis::{AtmosphericSample, Location, Mechanism, PhotolysisContext, RateSetEvaluator};
//!
//! let context = PhotolysisContext::shared()?;
//! let mechanism = Mechanism {
//!     rates: vec!["j_NO2".to_string(), "j_O3_O1D".to_string()],
//!     ..Default::default()
//! };
//! let evaluator = RateSetEvaluator::new(context, &mechanism)?;
//!
//! let location = Location::from_degrees(40.0, -105.0)?;
//! let rates = evaluator.evaluate(1719230400.0, &location, &AtmosphericSample::default());
//! println!("j_NO2 = {:e}", rates.get("j_NO2").unwrap_or_default());
//! # Ok::<(), photolysis::PhotolysisError>(())
//! ```

pub mod atmosphere;
pub mod bins;
pub mod config;
pub mod context;
pub mod date_gen;
pub mod error;
pub mod evaluator;
pub mod flux;
pub mod interpolate;
pub mod kernel;
pub mod solar;
pub mod spectra;

pub use atmosphere::{AtmosphericSample, Location};
pub use bins::{FluxVector, NBINS, WAVELENGTHS};
pub use context::PhotolysisContext;
pub use error::{PhotolysisError, PhotolysisResult};
pub use evaluator::{AliasSpec, Mechanism, RateId, RateSet, RateSetEvaluator};
pub use flux::ActinicFluxTable;
pub use kernel::{Calibration, PhotolysisKernel};
pub use solar::cos_zenith;
pub use spectra::{SpeciesSpectrum, SpectralDataStore};

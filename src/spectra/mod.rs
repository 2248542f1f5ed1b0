//! Per-species absorption cross sections and quantum yields.
//!
//! Every table is indexed by the shared wavelength bins in [`crate::bins`].
//! Species with several product channels register one [`Channel`] per channel,
//! all pointing at the same cross-section table.

pub mod data;
pub mod spectrum;
pub mod store;

pub use spectrum::{Channel, ChannelSpec, CrossSection, QuantumYield, SpeciesSpectrum};
pub use store::SpectralDataStore;

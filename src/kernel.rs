use std::sync::Arc;

use crate::bins::{FluxVector, NBINS};
use crate::error::{PhotolysisError, PhotolysisResult};
use crate::spectra::{Channel, CrossSection, QuantumYield};

/// Multiplicative correction applied to a computed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration(f64);

impl Calibration {
    pub const IDENTITY: Calibration = Calibration(1.0);

    /// Fails unless `factor` is finite and non-negative.
    pub fn new(rate: &str, factor: f64) -> PhotolysisResult<Self> {
        if !(factor.is_finite() && factor >= 0.0) {
            return Err(PhotolysisError::InvalidCalibration {
                rate: rate.to_string(),
                factor,
            });
        }
        Ok(Self(factor))
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn apply(&self, rate: f64) -> f64 {
        rate * self.0
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Integrates one photolysis channel over the wavelength bins.
#[derive(Debug, Clone)]
pub struct PhotolysisKernel {
    cross_section: Arc<CrossSection>,
    quantum_yield: Arc<QuantumYield>,
    calibration: Calibration,
}

impl PhotolysisKernel {
    pub fn from_channel(channel: &Channel) -> Self {
        Self {
            cross_section: Arc::clone(&channel.cross_section),
            quantum_yield: Arc::clone(&channel.quantum_yield),
            calibration: Calibration::IDENTITY,
        }
    }

    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    pub(crate) fn cross_section(&self) -> &Arc<CrossSection> {
        &self.cross_section
    }

    /// Calibrated j-value (s⁻¹) at `temperature` (K) under `flux`.
    #[inline]
    pub fn j_rate(&self, temperature: f64, flux: &FluxVector) -> f64 {
        self.calibration.apply(self.raw_j_rate(temperature, flux))
    }

    /// j-value before calibration.
    #[inline]
    pub fn raw_j_rate(&self, temperature: f64, flux: &FluxVector) -> f64 {
        let sigma = self.cross_section.at(temperature);
        self.integrate(&sigma, flux)
    }

    /// Calibrated j-value for a cross section already evaluated at the
    /// sample temperature.
    #[inline]
    pub fn rate_from_cross_section(&self, sigma: &[f64; NBINS], flux: &FluxVector) -> f64 {
        self.calibration.apply(self.integrate(sigma, flux))
    }

    fn integrate(&self, sigma: &[f64; NBINS], flux: &FluxVector) -> f64 {
        let phi = self.quantum_yield.as_array();

        // Summed in bin order so results are reproducible
        let mut rate = 0.0;
        for bin in 0..NBINS {
            rate += flux[bin] * sigma[bin] * phi[bin];
        }
        rate
    }
}

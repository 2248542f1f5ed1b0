//! Wavelength bins shared by every flux and spectral table.
//!
//! All tables are stored as `[f64; NBINS]`, so bin count agreement is enforced
//! by the type system and bin ordering by this module's [`WAVELENGTHS`].

use std::fmt::Display;
use std::ops::{Index, Mul};

/// Number of spectral bins.
pub const NBINS: usize = 18;

/// Effective wavelength of each bin (nm), shortest first.
pub const WAVELENGTHS: [u32; NBINS] = [
    187, 191, 193, 196, 202, 208, 211, 214, 261, 267, 277, 295, 303, 310, 316, 333, 380, 574,
];

/// Actinic flux (photons cm⁻² s⁻¹) in every wavelength bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxVector([f64; NBINS]);

impl FluxVector {
    pub const fn zeros() -> Self {
        Self([0.0; NBINS])
    }

    pub const fn new(values: [f64; NBINS]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; NBINS] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// Returns a copy with every bin multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = self.0;
        for value in out.iter_mut() {
            *value *= factor;
        }
        Self(out)
    }

    /// Sum over all bins.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Default for FluxVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Index<usize> for FluxVector {
    type Output = f64;

    fn index(&self, bin: usize) -> &f64 {
        &self.0[bin]
    }
}

impl Mul<f64> for FluxVector {
    type Output = FluxVector;

    fn mul(self, factor: f64) -> FluxVector {
        self.scaled(factor)
    }
}

impl From<[f64; NBINS]> for FluxVector {
    fn from(values: [f64; NBINS]) -> Self {
        Self(values)
    }
}

impl Display for FluxVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FluxVector [")?;
        for (bin, value) in self.0.iter().enumerate() {
            if bin > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}nm: {:.3e}", WAVELENGTHS[bin], value)?;
        }
        write!(f, "]")
    }
}

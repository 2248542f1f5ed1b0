use std::sync::{Arc, OnceLock};

use log::info;

use crate::error::PhotolysisResult;
use crate::flux::ActinicFluxTable;
use crate::spectra::SpectralDataStore;

/// Immutable tables shared by every evaluator.
#[derive(Debug, Clone)]
pub struct PhotolysisContext {
    flux: ActinicFluxTable,
    spectra: SpectralDataStore,
}

impl PhotolysisContext {
    pub fn new(flux: ActinicFluxTable, spectra: SpectralDataStore) -> Self {
        Self { flux, spectra }
    }

    /// Fresh context holding the built-in tables.
    pub fn builtin() -> PhotolysisResult<Self> {
        Ok(Self::new(
            ActinicFluxTable::builtin()?,
            SpectralDataStore::builtin()?,
        ))
    }

    /// Process-wide built-in context, built on first use.
    ///
    /// Every call returns the same allocation.
    pub fn shared() -> PhotolysisResult<Arc<Self>> {
        static SHARED: OnceLock<Arc<PhotolysisContext>> = OnceLock::new();

        if let Some(context) = SHARED.get() {
            return Ok(Arc::clone(context));
        }

        // A racing thread may build a second copy; only one is ever kept
        let built = Arc::new(Self::builtin()?);
        let context = SHARED.get_or_init(|| {
            info!(
                "Initialized shared photolysis context with {} rates",
                built.spectra.len()
            );
            built
        });
        Ok(Arc::clone(context))
    }

    pub fn flux_table(&self) -> &ActinicFluxTable {
        &self.flux
    }

    pub fn spectra(&self) -> &SpectralDataStore {
        &self.spectra
    }
}

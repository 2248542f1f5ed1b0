pub mod data;
pub mod table;

// Re-export the main structures for convenience
pub use table::{ActinicFluxTable, FluxTableData, air_mass};

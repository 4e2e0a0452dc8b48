//! MorphoConseil Shared Library
//!
//! This crate contains the domain types, the silhouette classifier and its
//! advice table, shared by the backend and the WASM module.

pub mod advice;
pub mod errors;
pub mod models;
pub mod morphology;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{Account, MeasurementSnapshot, Measurements};
pub use morphology::{analyze, classify, MorphologyType};
pub use types::*;

//! Calorie Calculator Shared Library
//!
//! This crate contains the domain types, Mifflin-St Jeor calculations,
//! option catalogs, and validation shared by the widget and WASM crates.

pub mod catalog;
pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;

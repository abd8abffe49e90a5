//! Error types for the calorie calculator

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Form fields referenced by validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Weight,
    Height,
    Age,
    BiologicalSex,
    ActivityLevel,
}

impl Field {
    /// User-friendly display label
    pub fn display_label(&self) -> &'static str {
        match self {
            Field::Weight => "Weight",
            Field::Height => "Height",
            Field::Age => "Age",
            Field::BiologicalSex => "Biological Sex",
            Field::ActivityLevel => "Activity Level",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// Errors produced by the calculator form
///
/// The `MissingFields` display string is the exact notification message
/// shown to the user; the carried fields keep the per-field detail for
/// hosts that want it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("All fields are required!")]
    MissingFields(Vec<Field>),

    #[error("{field}: {message}")]
    InvalidSelection { field: Field, message: String },
}

impl CalculatorError {
    /// Shorthand for a single-field selection error
    pub fn invalid_selection(field: Field, message: impl Into<String>) -> Self {
        CalculatorError::InvalidSelection {
            field,
            message: message.into(),
        }
    }
}

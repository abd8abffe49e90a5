//! Presentation boundary types
//!
//! Payloads exchanged with the rendering layer: the current form state,
//! the computed metrics report, and the notification shown on failure.

use crate::errors::CalculatorError;
use crate::health_metrics::{ActivityLevel, BiologicalSex, HealthMetrics};
use serde::{Deserialize, Serialize};

/// Current form state as seen by the rendering layer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_sex: Option<BiologicalSex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Present only after a successful calculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsReport>,
}

/// Energy report shown in the result panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Basal Metabolic Rate
    pub bmr: i32,
    /// Total Daily Energy Expenditure
    pub tdee: i32,
    pub unit: String,
}

impl From<HealthMetrics> for MetricsReport {
    fn from(metrics: HealthMetrics) -> Self {
        MetricsReport {
            bmr: metrics.bmr,
            tdee: metrics.tdee,
            unit: "kcal".to_string(),
        }
    }
}

/// Transient notification delivered to the host UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: String,
    pub message: String,
    /// Display labels of the fields behind the error
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<String>,
}

impl Notification {
    /// Build the payload the host toasts for a calculator error
    pub fn from_error(error: &CalculatorError) -> Self {
        let fields = match error {
            CalculatorError::MissingFields(fields) => fields
                .iter()
                .map(|field| field.display_label().to_string())
                .collect(),
            CalculatorError::InvalidSelection { field, .. } => {
                vec![field.display_label().to_string()]
            }
        };
        Notification {
            kind: "error".to_string(),
            message: error.to_string(),
            fields,
        }
    }
}

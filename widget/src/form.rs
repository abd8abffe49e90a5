//! The calculator form state and its transitions
//!
//! `CalculatorForm` holds the five user selections, each absent until
//! chosen, plus the last computed result. Setters are the only way a
//! selection changes; `calculate` refuses to run until every field is
//! present, and a failed calculation leaves the previous result intact.

use calorie_calculator_shared::errors::{CalculatorError, Field};
use calorie_calculator_shared::health_metrics::{
    calculate_health_metrics, ActivityLevel, BiologicalSex, HealthMetrics, HealthProfile,
};
use calorie_calculator_shared::types::{FormSnapshot, MetricsReport};
use calorie_calculator_shared::validation::{
    validate_age_years, validate_height_cm, validate_weight_kg,
};
use tracing::debug;

/// The calorie calculator form widget
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: Option<i32>,
    sex: Option<BiologicalSex>,
    activity_level: Option<ActivityLevel>,
    metrics: Option<HealthMetrics>,
}

impl CalculatorForm {
    /// Create a form with every field unselected and no result
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Field setters
    // ========================================================================

    /// Select a weight in kg
    ///
    /// Rejects values outside the selectable range; the previous
    /// selection is kept on rejection.
    pub fn set_weight_kg(&mut self, weight_kg: f64) -> Result<(), CalculatorError> {
        validate_weight_kg(weight_kg)
            .map_err(|message| CalculatorError::InvalidSelection { field: Field::Weight, message })?;
        self.weight_kg = Some(weight_kg);
        debug!(weight_kg, "weight selected");
        Ok(())
    }

    /// Clear the weight selection
    pub fn clear_weight(&mut self) {
        self.weight_kg = None;
        debug!("weight cleared");
    }

    /// Select a height in cm
    pub fn set_height_cm(&mut self, height_cm: f64) -> Result<(), CalculatorError> {
        validate_height_cm(height_cm)
            .map_err(|message| CalculatorError::InvalidSelection { field: Field::Height, message })?;
        self.height_cm = Some(height_cm);
        debug!(height_cm, "height selected");
        Ok(())
    }

    /// Clear the height selection
    pub fn clear_height(&mut self) {
        self.height_cm = None;
        debug!("height cleared");
    }

    /// Select an age in whole years
    pub fn set_age_years(&mut self, age_years: i32) -> Result<(), CalculatorError> {
        validate_age_years(age_years)
            .map_err(|message| CalculatorError::InvalidSelection { field: Field::Age, message })?;
        self.age_years = Some(age_years);
        debug!(age_years, "age selected");
        Ok(())
    }

    /// Clear the age selection
    pub fn clear_age(&mut self) {
        self.age_years = None;
        debug!("age cleared");
    }

    /// Select a biological sex
    pub fn set_biological_sex(&mut self, sex: BiologicalSex) {
        self.sex = Some(sex);
        debug!(sex = ?sex, "biological sex selected");
    }

    /// Clear the biological sex selection
    pub fn clear_biological_sex(&mut self) {
        self.sex = None;
        debug!("biological sex cleared");
    }

    /// Select an activity level
    pub fn set_activity_level(&mut self, level: ActivityLevel) {
        self.activity_level = Some(level);
        debug!(level = ?level, "activity level selected");
    }

    /// Clear the activity level selection
    pub fn clear_activity_level(&mut self) {
        self.activity_level = None;
        debug!("activity level cleared");
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Compute BMR and TDEE from the current selections
    ///
    /// Succeeds only when all five fields are present; the result is
    /// stored and returned. On failure the previous result is left
    /// untouched and the error lists every absent field. Validation
    /// failures are reported to the caller, not logged.
    pub fn calculate(&mut self) -> Result<HealthMetrics, CalculatorError> {
        match (
            self.weight_kg,
            self.height_cm,
            self.age_years,
            self.sex,
            self.activity_level,
        ) {
            (Some(weight_kg), Some(height_cm), Some(age_years), Some(sex), Some(activity_level)) => {
                let profile = HealthProfile {
                    height_cm,
                    weight_kg,
                    age_years,
                    sex,
                    activity_level,
                };
                let metrics = calculate_health_metrics(&profile);
                self.metrics = Some(metrics);
                debug!(bmr = metrics.bmr, tdee = metrics.tdee, "metrics calculated");
                Ok(metrics)
            }
            _ => Err(CalculatorError::MissingFields(self.missing_fields())),
        }
    }

    /// Return the form to its initial state
    ///
    /// Clears all five selections and any computed result. Always
    /// succeeds, whether or not anything was set.
    pub fn reset(&mut self) {
        self.weight_kg = None;
        self.height_cm = None;
        self.age_years = None;
        self.sex = None;
        self.activity_level = None;
        self.metrics = None;
        debug!("form reset");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Currently selected weight, if any
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Currently selected height, if any
    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    /// Currently selected age, if any
    pub fn age_years(&self) -> Option<i32> {
        self.age_years
    }

    /// Currently selected biological sex, if any
    pub fn biological_sex(&self) -> Option<BiologicalSex> {
        self.sex
    }

    /// Currently selected activity level, if any
    pub fn activity_level(&self) -> Option<ActivityLevel> {
        self.activity_level
    }

    /// Last computed result, if any
    pub fn metrics(&self) -> Option<HealthMetrics> {
        self.metrics
    }

    /// True once every field has a selection
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fields still awaiting a selection, in form order
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push(Field::Weight);
        }
        if self.height_cm.is_none() {
            missing.push(Field::Height);
        }
        if self.age_years.is_none() {
            missing.push(Field::Age);
        }
        if self.sex.is_none() {
            missing.push(Field::BiologicalSex);
        }
        if self.activity_level.is_none() {
            missing.push(Field::ActivityLevel);
        }
        missing
    }

    /// Current selections and result for the rendering layer
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            biological_sex: self.sex,
            activity_level: self.activity_level,
            metrics: self.metrics.map(MetricsReport::from),
        }
    }
}

//! Calorie Calculator WASM Module
//!
//! WebAssembly bindings for the calculator form. The host page
//! populates its dropdowns from the catalog getters, forwards select
//! changes to the setters, and drives the calculate/reset actions.
//! Structured values cross the boundary as JSON strings.

use calorie_calculator_shared::catalog;
use calorie_calculator_shared::errors::{CalculatorError, Field};
use calorie_calculator_shared::health_metrics::{ActivityLevel, BiologicalSex};
use calorie_calculator_shared::types::{MetricsReport, Notification};
use calorie_calculator_widget::CalculatorForm;
use wasm_bindgen::prelude::*;

/// Install the panic hook so Rust panics surface in the browser console
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Notification payload for a calculator error, as JSON
fn notification_json(error: &CalculatorError) -> String {
    let note = Notification::from_error(error);
    serde_json::to_string(&note).unwrap_or_else(|_| note.message.clone())
}

fn notification_js(error: &CalculatorError) -> JsValue {
    JsValue::from_str(&notification_json(error))
}

/// The calculator form driven by the host page
///
/// Setters accept the raw `<select>` value; an empty string means the
/// user re-selected the placeholder and clears that field.
#[wasm_bindgen]
pub struct CalorieCalculator {
    form: CalculatorForm,
}

#[wasm_bindgen]
impl CalorieCalculator {
    /// Create a calculator with every field unselected
    #[wasm_bindgen(constructor)]
    pub fn new() -> CalorieCalculator {
        CalorieCalculator {
            form: CalculatorForm::new(),
        }
    }

    /// Select a weight in kg; an empty value clears the field
    pub fn set_weight(&mut self, value: &str) -> Result<(), JsValue> {
        let value = value.trim();
        if value.is_empty() {
            self.form.clear_weight();
            return Ok(());
        }
        let weight_kg: f64 = value.parse().map_err(|_| {
            notification_js(&CalculatorError::invalid_selection(
                Field::Weight,
                "must be a valid number",
            ))
        })?;
        self.form
            .set_weight_kg(weight_kg)
            .map_err(|e| notification_js(&e))
    }

    /// Select a height in cm; an empty value clears the field
    pub fn set_height(&mut self, value: &str) -> Result<(), JsValue> {
        let value = value.trim();
        if value.is_empty() {
            self.form.clear_height();
            return Ok(());
        }
        let height_cm: f64 = value.parse().map_err(|_| {
            notification_js(&CalculatorError::invalid_selection(
                Field::Height,
                "must be a valid number",
            ))
        })?;
        self.form
            .set_height_cm(height_cm)
            .map_err(|e| notification_js(&e))
    }

    /// Select an age in years; an empty value clears the field
    pub fn set_age(&mut self, value: &str) -> Result<(), JsValue> {
        let value = value.trim();
        if value.is_empty() {
            self.form.clear_age();
            return Ok(());
        }
        let age_years: i32 = value.parse().map_err(|_| {
            notification_js(&CalculatorError::invalid_selection(
                Field::Age,
                "must be a whole number",
            ))
        })?;
        self.form
            .set_age_years(age_years)
            .map_err(|e| notification_js(&e))
    }

    /// Select a biological sex; an empty value clears the field
    ///
    /// Anything other than the offered options is rejected rather than
    /// carried as an unknown value.
    pub fn set_biological_sex(&mut self, value: &str) -> Result<(), JsValue> {
        let value = value.trim();
        if value.is_empty() {
            self.form.clear_biological_sex();
            return Ok(());
        }
        let sex: BiologicalSex = value.parse().map_err(|message: String| {
            notification_js(&CalculatorError::InvalidSelection {
                field: Field::BiologicalSex,
                message,
            })
        })?;
        self.form.set_biological_sex(sex);
        Ok(())
    }

    /// Select an activity level; an empty value clears the field
    ///
    /// Accepts the multiplier literal the dropdown uses as its option
    /// value ("1.55") as well as the snake_case identifier.
    pub fn set_activity_level(&mut self, value: &str) -> Result<(), JsValue> {
        let value = value.trim();
        if value.is_empty() {
            self.form.clear_activity_level();
            return Ok(());
        }
        let level: ActivityLevel = value.parse().map_err(|message: String| {
            notification_js(&CalculatorError::InvalidSelection {
                field: Field::ActivityLevel,
                message,
            })
        })?;
        self.form.set_activity_level(level);
        Ok(())
    }

    /// Compute BMR and TDEE from the current selections
    ///
    /// Returns the metrics report as JSON. On failure the error is the
    /// notification payload for the host to toast; the previous result
    /// is left untouched.
    pub fn calculate(&mut self) -> Result<String, JsValue> {
        match self.form.calculate() {
            Ok(metrics) => to_json(&MetricsReport::from(metrics)),
            Err(error) => Err(notification_js(&error)),
        }
    }

    /// Clear every selection and any computed result
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Current selections and result as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.form.snapshot())
    }

    /// True once every field has a selection
    pub fn is_complete(&self) -> bool {
        self.form.is_complete()
    }
}

impl Default for CalorieCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Dropdown catalogs
// ============================================================================

/// Weight options (40-150 kg) as JSON
#[wasm_bindgen]
pub fn weight_options() -> Result<String, JsValue> {
    to_json(&catalog::weight_options())
}

/// Height options (140-210 cm) as JSON
#[wasm_bindgen]
pub fn height_options() -> Result<String, JsValue> {
    to_json(&catalog::height_options())
}

/// Age options (1-150 years) as JSON
#[wasm_bindgen]
pub fn age_options() -> Result<String, JsValue> {
    to_json(&catalog::age_options())
}

/// Biological sex options as JSON
#[wasm_bindgen]
pub fn biological_sex_options() -> Result<String, JsValue> {
    to_json(&catalog::biological_sex_options())
}

/// Activity level options as JSON; option values are the multiplier
/// literals
#[wasm_bindgen]
pub fn activity_options() -> Result<String, JsValue> {
    to_json(&catalog::activity_options())
}

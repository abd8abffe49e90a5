//! Input validation functions
//!
//! Range checks for the calculator's numeric selections. The bounds
//! here are the same ones the option catalogs enumerate, so any value
//! offered by a dropdown always passes.

/// Selectable weight range in kg
pub const WEIGHT_MIN_KG: f64 = 40.0;
pub const WEIGHT_MAX_KG: f64 = 150.0;

/// Selectable height range in cm
pub const HEIGHT_MIN_CM: f64 = 140.0;
pub const HEIGHT_MAX_CM: f64 = 210.0;

/// Selectable age range in years
pub const AGE_MIN_YEARS: i32 = 1;
pub const AGE_MAX_YEARS: i32 = 150;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if weight_kg < WEIGHT_MIN_KG {
        return Err(format!("must be at least {} kg", WEIGHT_MIN_KG));
    }
    if weight_kg > WEIGHT_MAX_KG {
        return Err(format!("must be at most {} kg", WEIGHT_MAX_KG));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if height_cm < HEIGHT_MIN_CM {
        return Err(format!("must be at least {} cm", HEIGHT_MIN_CM));
    }
    if height_cm > HEIGHT_MAX_CM {
        return Err(format!("must be at most {} cm", HEIGHT_MAX_CM));
    }
    Ok(())
}

/// Validate age value (in whole years)
pub fn validate_age_years(age_years: i32) -> Result<(), String> {
    if age_years < AGE_MIN_YEARS {
        return Err(format!("must be at least {} year", AGE_MIN_YEARS));
    }
    if age_years > AGE_MAX_YEARS {
        return Err(format!("cannot exceed {} years", AGE_MAX_YEARS));
    }
    Ok(())
}

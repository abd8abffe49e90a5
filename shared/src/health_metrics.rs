//! Health metrics calculations module
//!
//! Provides the BMR and TDEE calculations behind the calorie calculator
//! form, based on the Mifflin-St Jeor equation.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Formulas from peer-reviewed research
//! 3. **Type Safety**: Strong typing prevents unit confusion

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Both options in display order
    pub const ALL: [BiologicalSex; 2] = [BiologicalSex::Male, BiologicalSex::Female];

    /// Stable identifier used in boundary payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }

    /// User-facing option label
    pub fn label(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "Male",
            BiologicalSex::Female => "Female",
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(format!("unrecognized value '{}'", s)),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// All tiers in display order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// User-facing option label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Light (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderate (3-5 days/week)",
            ActivityLevel::VeryActive => "Active (6-7 days/week)",
            ActivityLevel::ExtraActive => "Very Active (twice/day etc.)",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    // Accepts both the snake_case identifier and the multiplier literal
    // the activity dropdown uses as its option value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" | "1.2" => Ok(ActivityLevel::Sedentary),
            "lightly_active" | "1.375" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" | "1.55" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" | "1.725" => Ok(ActivityLevel::VeryActive),
            "extra_active" | "1.9" => Ok(ActivityLevel::ExtraActive),
            _ => Err(format!("unrecognized value '{}'", s)),
        }
    }
}

/// Validated input tuple needed for the calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Height in centimeters (stored in SI)
    pub height_cm: f64,
    /// Current weight in kilograms (stored in SI)
    pub weight_kg: f64,
    /// Age in years
    pub age_years: i32,
    /// Biological sex for physiological calculations
    pub sex: BiologicalSex,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(profile: &HealthProfile) -> f64 {
    let bmr = calculate_bmr_mifflin(profile.weight_kg, profile.height_cm, profile.age_years, profile.sex);
    bmr * profile.activity_level.multiplier()
}

/// Result pair shown by the calculator, in whole kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Basal Metabolic Rate
    pub bmr: i32,
    /// Total Daily Energy Expenditure
    pub tdee: i32,
}

/// Calculate the rounded BMR/TDEE pair for a profile
///
/// TDEE is derived from the unrounded BMR; each value is rounded to
/// whole kcal exactly once, at the end.
pub fn calculate_health_metrics(profile: &HealthProfile) -> HealthMetrics {
    let bmr = calculate_bmr_mifflin(profile.weight_kg, profile.height_cm, profile.age_years, profile.sex);
    let tdee = bmr * profile.activity_level.multiplier();
    HealthMetrics {
        bmr: bmr.round() as i32,
        tdee: tdee.round() as i32,
    }
}

//! Option catalogs for the calculator's selection inputs
//!
//! The rendering layer fills its five dropdowns from these lists. Every
//! numeric catalog enumerates the full selectable range, so a value that
//! came from a dropdown never fails validation.

use crate::health_metrics::{ActivityLevel, BiologicalSex};
use crate::validation::{
    AGE_MAX_YEARS, AGE_MIN_YEARS, HEIGHT_MAX_CM, HEIGHT_MIN_CM, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use serde::{Deserialize, Serialize};

/// A single dropdown entry: the option value submitted by the select
/// and the label shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Weight options, 40 kg through 150 kg in 1 kg steps
pub fn weight_options() -> Vec<SelectOption> {
    (WEIGHT_MIN_KG as i32..=WEIGHT_MAX_KG as i32)
        .map(|kg| SelectOption {
            value: kg.to_string(),
            label: format!("{} kg", kg),
        })
        .collect()
}

/// Height options, 140 cm through 210 cm in 1 cm steps
pub fn height_options() -> Vec<SelectOption> {
    (HEIGHT_MIN_CM as i32..=HEIGHT_MAX_CM as i32)
        .map(|cm| SelectOption {
            value: cm.to_string(),
            label: format!("{} cm", cm),
        })
        .collect()
}

/// Age options, 1 through 150 years
pub fn age_options() -> Vec<SelectOption> {
    (AGE_MIN_YEARS..=AGE_MAX_YEARS)
        .map(|years| SelectOption {
            value: years.to_string(),
            label: format!("{} years", years),
        })
        .collect()
}

/// Biological sex options
pub fn biological_sex_options() -> Vec<SelectOption> {
    BiologicalSex::ALL
        .iter()
        .map(|sex| SelectOption {
            value: sex.as_str().to_string(),
            label: sex.label().to_string(),
        })
        .collect()
}

/// Activity level options; the multiplier literal is the option value
pub fn activity_options() -> Vec<SelectOption> {
    ActivityLevel::ALL
        .iter()
        .map(|level| SelectOption {
            value: level.multiplier().to_string(),
            label: level.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_age_years, validate_height_cm, validate_weight_kg};

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(weight_options().len(), 111);
        assert_eq!(height_options().len(), 71);
        assert_eq!(age_options().len(), 150);
        assert_eq!(biological_sex_options().len(), 2);
        assert_eq!(activity_options().len(), 5);
    }

    #[test]
    fn test_catalog_endpoints() {
        let weights = weight_options();
        assert_eq!(weights.first().unwrap().label, "40 kg");
        assert_eq!(weights.last().unwrap().label, "150 kg");

        let heights = height_options();
        assert_eq!(heights.first().unwrap().label, "140 cm");
        assert_eq!(heights.last().unwrap().label, "210 cm");

        let ages = age_options();
        assert_eq!(ages.first().unwrap().label, "1 years");
        assert_eq!(ages.last().unwrap().label, "150 years");
    }

    #[test]
    fn test_every_weight_option_validates() {
        for option in weight_options() {
            let kg: f64 = option.value.parse().unwrap();
            assert!(validate_weight_kg(kg).is_ok(), "weight option {} rejected", option.value);
        }
    }

    #[test]
    fn test_every_height_option_validates() {
        for option in height_options() {
            let cm: f64 = option.value.parse().unwrap();
            assert!(validate_height_cm(cm).is_ok(), "height option {} rejected", option.value);
        }
    }

    #[test]
    fn test_every_age_option_validates() {
        for option in age_options() {
            let years: i32 = option.value.parse().unwrap();
            assert!(validate_age_years(years).is_ok(), "age option {} rejected", option.value);
        }
    }

    #[test]
    fn test_activity_labels() {
        let labels: Vec<String> = activity_options().into_iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec![
                "Sedentary (little or no exercise)",
                "Light (1-3 days/week)",
                "Moderate (3-5 days/week)",
                "Active (6-7 days/week)",
                "Very Active (twice/day etc.)",
            ]
        );
    }

    #[test]
    fn test_activity_values_parse_back_to_their_tier() {
        for (option, level) in activity_options().iter().zip(ActivityLevel::ALL) {
            assert_eq!(option.value.parse::<ActivityLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_sex_values_parse_back() {
        for (option, sex) in biological_sex_options().iter().zip(BiologicalSex::ALL) {
            assert_eq!(option.value.parse::<BiologicalSex>(), Ok(sex));
        }
        let options = biological_sex_options();
        assert_eq!(options[0].label, "Male");
        assert_eq!(options[1].label, "Female");
    }

    #[test]
    fn test_select_option_serialization() {
        let json = serde_json::to_string(&activity_options()[0]).unwrap();
        assert_eq!(json, r#"{"value":"1.2","label":"Sedentary (little or no exercise)"}"#);
    }
}

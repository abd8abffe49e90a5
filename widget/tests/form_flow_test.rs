//! Integration tests for complete calculator form flows

use calorie_calculator_shared::errors::{CalculatorError, Field};
use calorie_calculator_shared::health_metrics::{ActivityLevel, BiologicalSex};
use calorie_calculator_shared::types::Notification;
use calorie_calculator_widget::CalculatorForm;

#[test]
fn test_full_user_flow() {
    let mut form = CalculatorForm::new();

    // User fills the form top to bottom
    form.set_weight_kg(70.0).unwrap();
    form.set_height_cm(175.0).unwrap();
    form.set_age_years(30).unwrap();
    form.set_biological_sex(BiologicalSex::Male);
    form.set_activity_level(ActivityLevel::ModeratelyActive);
    assert!(form.is_complete());

    // Calculate and read the result panel
    let metrics = form.calculate().unwrap();
    assert_eq!(metrics.bmr, 1649);
    assert_eq!(metrics.tdee, 2556);

    let snapshot = form.snapshot();
    let report = snapshot.metrics.unwrap();
    assert_eq!(report.bmr, 1649);
    assert_eq!(report.tdee, 2556);
    assert_eq!(report.unit, "kcal");

    // User bumps the activity tier and recalculates; the whole result
    // pair is replaced
    form.set_activity_level(ActivityLevel::VeryActive);
    let updated = form.calculate().unwrap();
    assert_eq!(updated.bmr, 1649);
    assert_eq!(updated.tdee, 2844); // 1648.75 * 1.725 = 2844.09375

    // Reset returns the widget to its initial state
    form.reset();
    assert!(form.snapshot().metrics.is_none());
    assert_eq!(form.missing_fields().len(), 5);
}

#[test]
fn test_premature_calculate_then_completion() {
    let mut form = CalculatorForm::new();

    // User hits Calculate after picking only two fields
    form.set_weight_kg(82.0).unwrap();
    form.set_biological_sex(BiologicalSex::Female);
    let err = form.calculate().unwrap_err();

    // The host toasts exactly the fixed message
    let note = Notification::from_error(&err);
    assert_eq!(note.kind, "error");
    assert_eq!(note.message, "All fields are required!");
    assert_eq!(note.fields, vec!["Height", "Age", "Activity Level"]);
    assert!(form.metrics().is_none());

    // Earlier selections survive the failed attempt
    assert_eq!(form.weight_kg(), Some(82.0));
    assert_eq!(form.biological_sex(), Some(BiologicalSex::Female));

    // Filling in the rest makes the next attempt succeed
    form.set_height_cm(168.0).unwrap();
    form.set_age_years(41).unwrap();
    form.set_activity_level(ActivityLevel::LightlyActive);
    let metrics = form.calculate().unwrap();
    // 820 + 1050 - 205 - 161 = 1504; 1504 * 1.375 = 2068
    assert_eq!(metrics.bmr, 1504);
    assert_eq!(metrics.tdee, 2068);
}

#[test]
fn test_clearing_a_field_invalidates_completion_but_not_result() {
    let mut form = CalculatorForm::new();
    form.set_weight_kg(95.0).unwrap();
    form.set_height_cm(182.0).unwrap();
    form.set_age_years(52).unwrap();
    form.set_biological_sex(BiologicalSex::Male);
    form.set_activity_level(ActivityLevel::Sedentary);
    let first = form.calculate().unwrap();

    // User re-opens the sex dropdown and lands on the placeholder
    form.clear_biological_sex();
    assert!(!form.is_complete());

    let err = form.calculate().unwrap_err();
    assert_eq!(err, CalculatorError::MissingFields(vec![Field::BiologicalSex]));

    // The stale result stays on screen until reset or a successful run
    assert_eq!(form.metrics(), Some(first));

    form.reset();
    assert!(form.metrics().is_none());
}

#[test]
fn test_reset_between_users() {
    let mut form = CalculatorForm::new();
    form.set_weight_kg(120.0).unwrap();
    form.set_height_cm(195.0).unwrap();
    form.set_age_years(35).unwrap();
    form.set_biological_sex(BiologicalSex::Male);
    form.set_activity_level(ActivityLevel::ExtraActive);
    form.calculate().unwrap();

    form.reset();

    // A second person starts from a clean slate
    let err = form.calculate().unwrap_err();
    assert_eq!(
        err,
        CalculatorError::MissingFields(vec![
            Field::Weight,
            Field::Height,
            Field::Age,
            Field::BiologicalSex,
            Field::ActivityLevel,
        ])
    );

    form.set_weight_kg(48.0).unwrap();
    form.set_height_cm(152.0).unwrap();
    form.set_age_years(19).unwrap();
    form.set_biological_sex(BiologicalSex::Female);
    form.set_activity_level(ActivityLevel::ModeratelyActive);
    let metrics = form.calculate().unwrap();
    // 480 + 950 - 95 - 161 = 1174; 1174 * 1.55 = 1819.7
    assert_eq!(metrics.bmr, 1174);
    assert_eq!(metrics.tdee, 1820);
}

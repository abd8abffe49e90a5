//! Calorie Calculator Widget
//!
//! The stateful form component behind the calculator: five optional
//! selections, a calculate action producing a BMR/TDEE pair, and a
//! reset action returning the form to its initial state.

pub mod form;

pub use form::CalculatorForm;

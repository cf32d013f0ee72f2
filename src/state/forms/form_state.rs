//! Prediction form state and submit handling

use super::field::FormField;
use super::validation::{check, parse_float_prefix, parse_int_prefix, FieldId, ValidationFailure};
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Form values that passed validation, ready for the price model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedListing {
    pub location: String,
    pub bhk: u32,
    pub bath: u32,
    pub total_sqft: f64,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every check passed; the listing may be sent on
    Submitted(ValidatedListing),
    /// Submission was cancelled; each failure is shown on its field
    Blocked(Vec<ValidationFailure>),
}

#[cfg(test)]
impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Action buttons on the last form row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Predict,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Predict, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Predict => "Predict",
            Self::Reset => "Reset",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Predict => Self::Reset,
            Self::Reset => Self::Predict,
        }
    }
}

const LOCATION_INDEX: usize = 0;
const BHK_INDEX: usize = 1;
const BATH_INDEX: usize = 2;
const SQFT_INDEX: usize = 3;
const BUTTONS_INDEX: usize = 4;

/// House price prediction form
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub location: FormField,
    pub bhk: FormField,
    pub bath: FormField,
    pub sqft: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl PredictionForm {
    pub fn new(locations: Vec<String>) -> Self {
        Self {
            location: FormField::choice("location", "Location", locations),
            bhk: FormField::text(FieldId::Bhk.id(), "BHK (1-10)"),
            bath: FormField::text(FieldId::Bathrooms.id(), "Bathrooms (1-5)"),
            sqft: FormField::text(FieldId::TotalSqft.id(), "Total Sqft (200-10,000)"),
            active_field_index: 0,
            selected_button: FormButton::Predict,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Bhk => &self.bhk,
            FieldId::Bathrooms => &self.bath,
            FieldId::TotalSqft => &self.sqft,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Bhk => &mut self.bhk,
            FieldId::Bathrooms => &mut self.bath,
            FieldId::TotalSqft => &mut self.sqft,
        }
    }

    /// The validated field under the cursor, if any
    pub fn active_field_id(&self) -> Option<FieldId> {
        match self.active_field_index {
            BHK_INDEX => Some(FieldId::Bhk),
            BATH_INDEX => Some(FieldId::Bathrooms),
            SQFT_INDEX => Some(FieldId::TotalSqft),
            _ => None,
        }
    }

    /// Move the cursor to a validated field
    pub fn focus(&mut self, id: FieldId) {
        self.active_field_index = match id {
            FieldId::Bhk => BHK_INDEX,
            FieldId::Bathrooms => BATH_INDEX,
            FieldId::TotalSqft => SQFT_INDEX,
        };
    }

    pub fn is_location_active(&self) -> bool {
        self.active_field_index == LOCATION_INDEX
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_INDEX
    }

    pub fn show_error(&mut self, id: FieldId, message: impl Into<String>) {
        self.field_mut(id).set_error(message);
    }

    pub fn clear_error(&mut self, id: FieldId) {
        self.field_mut(id).clear_error();
    }

    pub fn clear_all_errors(&mut self) {
        for id in FieldId::ALL {
            self.clear_error(id);
        }
    }

    pub fn has_errors(&self) -> bool {
        FieldId::ALL.iter().any(|id| self.field(*id).has_error())
    }

    /// An edit of one field drops that field's error only
    pub fn on_field_input(&mut self, id: FieldId) {
        self.clear_error(id);
    }

    /// Validate the form for a submit attempt.
    ///
    /// Errors from the previous attempt are cleared first; each failure is
    /// then shown on its field.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.clear_all_errors();

        let bhk = parse_int_prefix(self.bhk.as_text());
        let bath = parse_int_prefix(self.bath.as_text());
        let sqft = parse_float_prefix(self.sqft.as_text());

        match check(bhk, bath, sqft) {
            Ok(values) => SubmitOutcome::Submitted(ValidatedListing {
                location: self.location.as_text().to_string(),
                bhk: values.bhk,
                bath: values.bath,
                total_sqft: values.total_sqft,
            }),
            Err(failures) => {
                for failure in &failures {
                    self.show_error(failure.field, failure.message());
                }
                SubmitOutcome::Blocked(failures)
            }
        }
    }

    /// Type into the active text field
    pub fn input_char(&mut self, c: char) {
        if let Some(id) = self.active_field_id() {
            if self.field_mut(id).push_char(c) {
                self.on_field_input(id);
            }
        }
    }

    /// Delete the last character of the active text field
    pub fn backspace(&mut self) {
        if let Some(id) = self.active_field_id() {
            if self.field_mut(id).pop_char() {
                self.on_field_input(id);
            }
        }
    }

    /// Empty the active text field
    pub fn clear_active(&mut self) {
        if let Some(id) = self.active_field_id() {
            let field = self.field_mut(id);
            if !field.as_text().is_empty() {
                field.clear();
                self.on_field_input(id);
            }
        }
    }

    /// Clear every value and error, keeping the location list
    pub fn reset(&mut self) {
        self.location.clear();
        for id in FieldId::ALL {
            let field = self.field_mut(id);
            field.clear();
            field.clear_error();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::Predict;
    }
}

impl Form for PredictionForm {
    fn field_count(&self) -> usize {
        5 // location, bhk, bath, sqft, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            LOCATION_INDEX => Some(&self.location),
            BHK_INDEX => Some(&self.bhk),
            BATH_INDEX => Some(&self.bath),
            SQFT_INDEX => Some(&self.sqft),
            // Buttons row has no FormField
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations() -> Vec<String> {
        vec!["Hebbal".to_string(), "Whitefield".to_string()]
    }

    fn fill(field: &mut FormField, text: &str) {
        field.clear();
        for c in text.chars() {
            field.push_char(c);
        }
    }

    fn form_with(bhk: &str, bath: &str, sqft: &str) -> PredictionForm {
        let mut form = PredictionForm::new(locations());
        fill(&mut form.bhk, bhk);
        fill(&mut form.bath, bath);
        fill(&mut form.sqft, sqft);
        form
    }

    fn errors(form: &PredictionForm) -> Vec<Option<&str>> {
        FieldId::ALL.iter().map(|id| form.field(*id).error()).collect()
    }

    mod submit {
        use super::*;

        #[test]
        fn test_valid_form_submits() {
            let mut form = form_with("3", "2", "1250");
            assert_eq!(
                form.submit(),
                SubmitOutcome::Submitted(ValidatedListing {
                    location: "Hebbal".to_string(),
                    bhk: 3,
                    bath: 2,
                    total_sqft: 1250.0,
                })
            );
            assert!(!form.has_errors());
        }

        #[test]
        fn test_every_valid_combination_submits() {
            for bhk in 1..=10 {
                for bath in 1..=bhk.min(5) {
                    for sqft in ["200", "5000", "10000"] {
                        let mut form = form_with(&bhk.to_string(), &bath.to_string(), sqft);
                        assert!(
                            !form.submit().is_blocked(),
                            "bhk={bhk} bath={bath} sqft={sqft}"
                        );
                    }
                }
            }
        }

        #[test]
        fn test_bhk_out_of_range_or_not_numeric() {
            for bhk in ["0", "11", "abc", ""] {
                let mut form = form_with(bhk, "1", "1000");
                assert!(form.submit().is_blocked());
                assert_eq!(
                    errors(&form),
                    vec![Some("BHK must be between 1 and 10."), None, None],
                    "bhk={bhk:?}"
                );
            }
        }

        #[test]
        fn test_bathroom_range_wins_over_cross_field() {
            let mut form = form_with("8", "6", "1000");
            assert!(form.submit().is_blocked());
            assert_eq!(
                errors(&form),
                vec![None, Some("Bathrooms must be between 1 and 5."), None]
            );
        }

        #[test]
        fn test_bathrooms_more_than_bhk() {
            let mut form = form_with("2", "3", "1000");
            assert!(form.submit().is_blocked());
            assert_eq!(
                errors(&form),
                vec![None, Some("Bathrooms cannot be more than BHK."), None]
            );
        }

        #[test]
        fn test_sqft_out_of_range() {
            for sqft in ["150", "15000"] {
                let mut form = form_with("2", "2", sqft);
                assert!(form.submit().is_blocked());
                assert_eq!(
                    errors(&form),
                    vec![None, None, Some("Total Sqft must be between 200 and 10,000.")]
                );
            }
        }

        #[test]
        fn test_truncating_parse_accepts_decimal_bhk() {
            let mut form = form_with("3.9", "3", "1000");
            match form.submit() {
                SubmitOutcome::Submitted(listing) => assert_eq!(listing.bhk, 3),
                other => panic!("expected submission, got {other:?}"),
            }
        }

        #[test]
        fn test_new_attempt_clears_stale_errors() {
            let mut form = form_with("0", "9", "1");
            assert!(form.submit().is_blocked());
            assert_eq!(errors(&form).iter().filter(|e| e.is_some()).count(), 3);

            fill(&mut form.bhk, "4");
            fill(&mut form.bath, "2");
            fill(&mut form.sqft, "900");
            assert!(!form.submit().is_blocked());
            assert_eq!(errors(&form), vec![None, None, None]);
        }

        #[test]
        fn test_blocked_reports_failures() {
            let mut form = form_with("0", "1", "100");
            match form.submit() {
                SubmitOutcome::Blocked(failures) => {
                    let fields: Vec<FieldId> = failures.iter().map(|f| f.field).collect();
                    assert_eq!(fields, vec![FieldId::Bhk, FieldId::TotalSqft]);
                }
                other => panic!("expected blocked, got {other:?}"),
            }
        }
    }

    mod field_input {
        use super::*;

        #[test]
        fn test_editing_clears_only_that_field() {
            let mut form = form_with("0", "9", "1");
            form.submit();

            form.focus(FieldId::Bathrooms);
            form.backspace();

            assert_eq!(
                errors(&form),
                vec![
                    Some("BHK must be between 1 and 10."),
                    None,
                    Some("Total Sqft must be between 200 and 10,000.")
                ]
            );
        }

        #[test]
        fn test_typing_clears_error() {
            let mut form = form_with("", "1", "1000");
            form.submit();
            form.focus(FieldId::Bhk);
            form.input_char('2');
            assert!(!form.has_errors());
            assert_eq!(form.bhk.as_text(), "2");
        }

        #[test]
        fn test_clear_active_fires_input() {
            let mut form = form_with("1", "1", "50");
            form.submit();
            form.focus(FieldId::TotalSqft);
            form.clear_active();
            assert_eq!(form.sqft.as_text(), "");
            assert!(!form.has_errors());
        }

        #[test]
        fn test_typing_on_location_does_nothing() {
            let mut form = form_with("0", "1", "1000");
            form.submit();
            form.active_field_index = 0;
            form.input_char('x');
            form.backspace();
            assert!(form.bhk.has_error());
            assert_eq!(form.location.as_text(), "Hebbal");
        }

        #[test]
        fn test_clear_error_twice() {
            let mut form = form_with("0", "1", "1000");
            form.submit();
            form.clear_error(FieldId::Bhk);
            form.clear_error(FieldId::Bhk);
            assert!(!form.has_errors());
        }

        #[test]
        fn test_show_error_keeps_single_message() {
            let mut form = form_with("2", "2", "1000");
            form.show_error(FieldId::Bathrooms, "Bathrooms must be between 1 and 5.");
            form.show_error(FieldId::Bathrooms, "Bathrooms cannot be more than BHK.");
            assert_eq!(
                form.bath.error(),
                Some("Bathrooms cannot be more than BHK.")
            );
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_field_count() {
            let form = PredictionForm::new(Vec::new());
            assert_eq!(form.field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = PredictionForm::new(Vec::new());
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = PredictionForm::new(Vec::new());
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert!(form.get_field(form.active_field()).is_none());
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = PredictionForm::new(Vec::new());
            assert_eq!(form.get_field(0).unwrap().name, "location");
            assert_eq!(form.get_field(1).unwrap().name, "bhk");
            assert_eq!(form.get_field(2).unwrap().name, "bath");
            assert_eq!(form.get_field(3).unwrap().name, "sqft");
            assert!(form.get_field(4).is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = PredictionForm::new(Vec::new());
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_button_toggle() {
            assert_eq!(FormButton::Predict.toggle(), FormButton::Reset);
            assert_eq!(FormButton::Reset.toggle(), FormButton::Predict);
        }
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let mut form = form_with("0", "9", "1");
        form.location.next_option();
        form.submit();
        form.active_field_index = 3;
        form.selected_button = FormButton::Reset;

        form.reset();

        assert_eq!(form, PredictionForm::new(locations()));
    }
}

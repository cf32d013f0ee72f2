//! Form domain layer
//!
//! Type-safe form handling for the prediction form: field values, per-field
//! error state, and the parse and range checks run on submit.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{Form, FormButton, PredictionForm, SubmitOutcome, ValidatedListing};
pub use validation::FieldId;

//! Application state definitions

use super::forms::{PredictionForm, ValidatedListing};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A price returned by the model for a validated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub listing: ValidatedListing,
    /// Estimated price in lakhs, rounded to two decimals
    pub price_lakhs: f64,
}

impl Prediction {
    pub fn new(listing: ValidatedListing, raw_price: f64) -> Self {
        Self {
            listing,
            price_lakhs: round_to_cents(raw_price),
        }
    }

    /// Price formatted for display, e.g. "₹ 85.40 L"
    pub fn display_price(&self) -> String {
        format!("₹ {:.2} L", self.price_lakhs)
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: PredictionForm,
    pub prediction: Option<Prediction>,
    /// Messages waiting to be shown in the error dialog, oldest first
    pub errors: VecDeque<String>,
}

impl AppState {
    pub fn new(locations: Vec<String>) -> Self {
        Self {
            form: PredictionForm::new(locations),
            prediction: None,
            errors: VecDeque::new(),
        }
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Clear the form and the last result
    pub fn clear_form(&mut self) {
        self.form.reset();
        self.prediction = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

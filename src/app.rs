//! Application state and core logic

use crate::config::TuiConfig;
use crate::predictor::{LinearModel, PricePredictor, UnavailableModel};
use crate::state::{AppState, Form, FormButton, Prediction, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Price model that receives validated listings
    predictor: Box<dyn PricePredictor>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar message, cleared on the next key press
    pub status_message: Option<String>,
    /// Location selected when the form opened
    initial_location: String,
}

impl App {
    /// Create a new App instance from the user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let loaded = match config.resolve_model_path() {
            Some(path) => LinearModel::load(&path).map_err(|e| e.to_string()),
            None => Err("no data directory available for the price model".to_string()),
        };

        match loaded {
            Ok(model) => Self::with_predictor(Box::new(model), config.default_location.as_deref()),
            Err(message) => {
                tracing::warn!("Price model unavailable: {message}");
                let mut app = Self::with_predictor(Box::new(UnavailableModel), None);
                app.push_error(format!("Failed to load price model: {message}"));
                app
            }
        }
    }

    /// Create an App around an existing predictor
    pub fn with_predictor(
        predictor: Box<dyn PricePredictor>,
        default_location: Option<&str>,
    ) -> Self {
        let mut state = AppState::new(predictor.locations());
        if let Some(location) = default_location {
            if !state.form.location.select_option(location) {
                tracing::debug!("Default location {location:?} is not known to the model");
            }
        }

        let initial_location = state.form.location.as_text().to_string();
        Self {
            state,
            predictor,
            quit: false,
            status_message: None,
            initial_location,
        }
    }

    /// The selected location, if the user changed it since startup
    pub fn changed_location(&self) -> Option<&str> {
        let current = self.state.form.location.as_text();
        (current != self.initial_location).then_some(current)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let form = &mut self.state.form;
        let on_text_field = form.active_field_id().is_some();

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('u') if ctrl => form.clear_active(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('q') if !on_text_field => self.quit = true,

            // Location selector
            KeyCode::Left | KeyCode::Char('h') if form.is_location_active() => {
                form.location.prev_option()
            }
            KeyCode::Right | KeyCode::Char('l') if form.is_location_active() => {
                form.location.next_option()
            }
            KeyCode::Enter if form.is_location_active() => form.next_field(),

            // Action buttons
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('j')
            | KeyCode::Char('k')
                if form.is_buttons_row_active() =>
            {
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter if form.is_buttons_row_active() => {
                let button = form.selected_button;
                match button {
                    FormButton::Predict => self.submit().await,
                    FormButton::Reset => {
                        self.state.clear_form();
                        self.status_message = Some("Form cleared".to_string());
                    }
                }
            }

            // Text input; Enter submits like a browser form
            KeyCode::Enter if on_text_field => self.submit().await,
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, if it passes, ask the model for a price
    async fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Blocked(failures) => {
                tracing::debug!("Submission blocked by {} failing field(s)", failures.len());
                self.state.prediction = None;
                if let Some(first) = failures.first() {
                    self.state.form.focus(first.field);
                }
                self.status_message = Some("Fix the highlighted fields".to_string());
            }
            SubmitOutcome::Submitted(listing) => {
                tracing::info!(
                    "Predicting price for {} BHK / {} bath / {} sqft in {:?}",
                    listing.bhk,
                    listing.bath,
                    listing.total_sqft,
                    listing.location
                );
                match self.predictor.predict(&listing).await {
                    Ok(price) => {
                        let prediction = Prediction::new(listing, price);
                        self.status_message =
                            Some(format!("Estimated price: {}", prediction.display_price()));
                        self.state.prediction = Some(prediction);
                    }
                    Err(err) => {
                        tracing::warn!("Prediction failed: {err}");
                        self.state.prediction = None;
                        self.push_error(format!("Something went wrong: {err}"));
                    }
                }
            }
        }
    }
}

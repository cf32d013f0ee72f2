//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field and form-group rendering utilities
//! - `prediction_form`: The price prediction form

mod field_renderer;
mod prediction_form;

pub use prediction_form::draw as draw_prediction_form;

//! Price model module
//!
//! The app talks to the model through `PricePredictor`; `LinearModel` is the
//! coefficient-file implementation used at runtime.

mod error;
mod linear;
mod traits;

pub use error::PredictError;
pub use linear::{LinearModel, UnavailableModel};
pub use traits::PricePredictor;

#[cfg(test)]
pub use traits::MockPricePredictor;

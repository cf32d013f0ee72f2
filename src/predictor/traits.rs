//! Trait abstraction for the price model to enable mocking in tests

use super::PredictError;
use crate::state::ValidatedListing;
use async_trait::async_trait;

/// Price model operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricePredictor: Send + Sync {
    /// Sorted, unique location names the model knows about
    fn locations(&self) -> Vec<String>;

    /// Estimate the price of a listing, in lakhs
    async fn predict(&self, listing: &ValidatedListing) -> Result<f64, PredictError>;
}

//! Linear regression model loaded from a JSON coefficient file

use super::{PredictError, PricePredictor};
use crate::state::ValidatedListing;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Weights of the numeric features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub total_sqft: f64,
    pub bath: f64,
    pub bhk: f64,
}

/// Linear price model with a one-hot encoded location term.
///
/// Locations missing from the table contribute nothing to the price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Coefficients,
    #[serde(default)]
    pub locations: BTreeMap<String, f64>,
}

impl LinearModel {
    /// Load a model from a JSON file
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        let content = fs::read_to_string(path).map_err(|source| PredictError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: LinearModel =
            serde_json::from_str(&content).map_err(|source| PredictError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            "Loaded price model from {} ({} locations)",
            path.display(),
            model.locations.len()
        );
        Ok(model)
    }

    /// Evaluate the model without rounding
    pub fn evaluate(&self, listing: &ValidatedListing) -> Result<f64, PredictError> {
        let location_term = self
            .locations
            .get(&listing.location)
            .copied()
            .unwrap_or(0.0);
        let price = self.intercept
            + self.coefficients.total_sqft * listing.total_sqft
            + self.coefficients.bath * f64::from(listing.bath)
            + self.coefficients.bhk * f64::from(listing.bhk)
            + location_term;

        if price.is_finite() {
            Ok(price)
        } else {
            Err(PredictError::NonFinite)
        }
    }
}

#[async_trait]
impl PricePredictor for LinearModel {
    fn locations(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }

    async fn predict(&self, listing: &ValidatedListing) -> Result<f64, PredictError> {
        self.evaluate(listing)
    }
}

/// Stand-in used when no model could be loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

#[async_trait]
impl PricePredictor for UnavailableModel {
    fn locations(&self) -> Vec<String> {
        Vec::new()
    }

    async fn predict(&self, _listing: &ValidatedListing) -> Result<f64, PredictError> {
        Err(PredictError::Unavailable)
    }
}

//! smsledger-classify: naive Bayes spending-category classifier.
//!
//! A [`Model`] is a precomputed token/category weight table loaded once
//! from a JSON asset; [`BayesClassifier`] scores merchant descriptions
//! against it. The model is immutable after load, so a classifier can be
//! shared read-only across threads.

pub mod bayes;
pub mod model;

use thiserror::Error;

pub use bayes::{BayesClassifier, tokenize};
pub use model::{CategoryWeights, Model};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("classifier model has no categories")]
    NoModel,
    #[error("invalid model json: {0}")]
    Json(#[from] serde_json::Error),
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// One category's slice of the model: a prior and per-token weights.
///
/// Weights are frequency counts (or any non-negative weighting the model
/// producer chooses); the classifier applies smoothing on top, so tokens
/// missing from the table are fine. Priors must be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub name: String,
    pub prior: f64,
    #[serde(default)]
    pub tokens: HashMap<String, f64>,
}

impl CategoryWeights {
    /// Sum of all token weights in this category's table.
    pub fn total_weight(&self) -> f64 {
        self.tokens.values().sum()
    }
}

/// The serialized classifier model: a list of categories.
///
/// Shape is a producer contract shared with the model-training side:
/// `{"categories": [{"name": ..., "prior": ..., "tokens": {...}}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub categories: Vec<CategoryWeights>,
}

impl Model {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [
                {"name": "communication", "prior": 0.4, "tokens": {"skype": 3.0, "mobile": 1.0}},
                {"name": "groceries", "prior": 0.6, "tokens": {"market": 5.0}}
            ]
        }"#;
        let model = Model::from_json(json).unwrap();
        assert_eq!(model.categories.len(), 2);
        assert_eq!(model.categories[0].name, "communication");
        assert_eq!(model.categories[0].total_weight(), 4.0);
    }

    #[test]
    fn test_tokens_default_to_empty() {
        let model = Model::from_json(r#"{"categories": [{"name": "misc", "prior": 1.0}]}"#).unwrap();
        assert!(model.categories[0].tokens.is_empty());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Model::from_json("{not json"),
            Err(ModelError::Json(_))
        ));
    }
}

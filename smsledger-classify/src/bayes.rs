use std::collections::{HashMap, HashSet};

use log::debug;

use crate::{Model, ModelError};

/// Split a description into classifier tokens.
///
/// The rule is deliberately simple and deterministic: lowercase the text,
/// split on every non-alphanumeric character, drop empty fragments. Model
/// producers must tokenize their training data the same way.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Naive Bayes classifier over a loaded [`Model`].
///
/// Scoring: `ln(prior) + Σ ln((weight(token) + 1) / (total + |V|))` per
/// category, where `|V|` is the union vocabulary across all categories —
/// additive (Laplace) smoothing with α = 1, so a token absent from one
/// category's table never zeroes that category out. The highest-scoring
/// category wins; exact ties go to the lexicographically smaller name.
#[derive(Debug, Clone)]
pub struct BayesClassifier {
    /// Sorted by name so the scan order fixes tie-breaking.
    categories: Vec<ScoredCategory>,
    vocab_size: usize,
}

#[derive(Debug, Clone)]
struct ScoredCategory {
    name: String,
    prior: f64,
    tokens: HashMap<String, f64>,
    total_weight: f64,
}

impl BayesClassifier {
    pub fn new(model: Model) -> Self {
        let vocab: HashSet<&str> = model
            .categories
            .iter()
            .flat_map(|c| c.tokens.keys())
            .map(String::as_str)
            .collect();
        // A denominator of zero is only reachable with an all-empty model;
        // clamp so such a model still scores by priors alone.
        let vocab_size = vocab.len().max(1);

        let mut categories: Vec<ScoredCategory> = model
            .categories
            .into_iter()
            .map(|c| ScoredCategory {
                total_weight: c.total_weight(),
                name: c.name,
                prior: c.prior,
                tokens: c.tokens,
            })
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            categories,
            vocab_size,
        }
    }

    /// Returns the most likely category name for `text`.
    pub fn classify(&self, text: &str) -> Result<String, ModelError> {
        if self.categories.is_empty() {
            return Err(ModelError::NoModel);
        }

        let tokens = tokenize(text);
        let mut best: Option<(&str, f64)> = None;
        for cat in &self.categories {
            let denom = cat.total_weight + self.vocab_size as f64;
            let mut score = cat.prior.ln();
            for token in &tokens {
                let weight = cat.tokens.get(token).copied().unwrap_or(0.0);
                score += ((weight + 1.0) / denom).ln();
            }
            debug!("category {}: score {:.4}", cat.name, score);
            // Strictly greater on a name-sorted scan: ties keep the
            // lexicographically smaller name.
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((&cat.name, score));
            }
        }

        // categories is non-empty, so best is always set by the loop.
        let (name, _) = best.ok_or(ModelError::NoModel)?;
        Ok(name.to_string())
    }
}

//! Pipeline configuration
//!
//! `VectorizerParams` is deliberately a single struct consumed by both the
//! training run and the inference-time TF-IDF rebuild. It is serialized
//! into the vocabulary artifact, so the two sides can never silently
//! diverge on min-frequency or vocabulary cap.

use serde::{Deserialize, Serialize};

/// Vocabulary / TF-IDF fitting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorizerParams {
    /// Minimum number of documents a feature must appear in.
    #[serde(default = "default_min_document_frequency")]
    pub min_document_frequency: usize,

    /// Hard cap on vocabulary size. When exceeded, negation-pattern
    /// features are retained preferentially.
    #[serde(default = "default_max_vocabulary")]
    pub max_vocabulary: usize,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            min_document_frequency: default_min_document_frequency(),
            max_vocabulary: default_max_vocabulary(),
        }
    }
}

fn default_min_document_frequency() -> usize {
    1
}

fn default_max_vocabulary() -> usize {
    6000
}

/// Logistic regression hyperparameters, shared by all 18 per-label models.
/// Step count is scaled per label by its positive-sample count and clamped
/// to [min_steps, max_steps].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    #[serde(default = "default_regularization")]
    pub regularization: f64,

    #[serde(default = "default_min_steps")]
    pub min_steps: usize,

    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Steps per positive training sample before clamping.
    #[serde(default = "default_steps_per_positive")]
    pub steps_per_positive: usize,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            regularization: default_regularization(),
            min_steps: default_min_steps(),
            max_steps: default_max_steps(),
            steps_per_positive: default_steps_per_positive(),
        }
    }
}

impl TrainingParams {
    /// Iteration count for a label with the given positive-sample count.
    pub fn steps_for(&self, positive_count: usize) -> usize {
        (positive_count * self.steps_per_positive).clamp(self.min_steps, self.max_steps)
    }
}

fn default_learning_rate() -> f64 {
    3e-4
}

fn default_regularization() -> f64 {
    0.01
}

fn default_min_steps() -> usize {
    400
}

fn default_max_steps() -> usize {
    1200
}

fn default_steps_per_positive() -> usize {
    4
}

/// Prediction history window configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryParams {
    /// Number of recent predictions the trend gate looks at.
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

fn default_window() -> usize {
    5
}

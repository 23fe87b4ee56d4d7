//! The one-vs-rest classifier bank
//!
//! Eighteen independent binary models, one per emotion label, trained and
//! invoked through a single code path. Outputs are independent: several
//! emotions may fire on one entry, or none at all.

use crate::logistic::LogisticModel;
use moodlens_core::{EmotionLabel, Error, Result, TrainingParams};
use tracing::{info, warn};

/// One binary logistic model per emotion label, in declaration order.
#[derive(Debug, Clone)]
pub struct ClassifierBank {
    models: Vec<LogisticModel>,
}

impl ClassifierBank {
    /// Train all 18 models one-vs-rest over the vectorized training set.
    ///
    /// `label_rows[i][j]` is 1.0 when document `i` carries label
    /// `EmotionLabel::ALL[j]`. Any single label failing to train aborts
    /// the whole run; partial banks are never produced.
    pub fn train(
        vectors: &[Vec<f64>],
        label_rows: &[Vec<f64>],
        params: &TrainingParams,
    ) -> Result<Self> {
        if vectors.len() != label_rows.len() {
            return Err(Error::model(format!(
                "vector/label row count mismatch: {} vs {}",
                vectors.len(),
                label_rows.len()
            )));
        }
        if let Some(bad) = label_rows
            .iter()
            .position(|row| row.len() != EmotionLabel::ALL.len())
        {
            return Err(Error::model(format!(
                "label row {bad} has {} columns, expected {}",
                label_rows[bad].len(),
                EmotionLabel::ALL.len()
            )));
        }

        let mut models = Vec::with_capacity(EmotionLabel::ALL.len());
        for (idx, label) in EmotionLabel::ALL.iter().enumerate() {
            let targets: Vec<f64> = label_rows.iter().map(|row| row[idx]).collect();
            let positives = targets.iter().filter(|&&t| t == 1.0).count();
            let steps = params.steps_for(positives);

            let model = LogisticModel::train(vectors, &targets, params, steps)?;
            info!(label = %label, positives, steps, "trained one-vs-rest model");
            models.push(model);
        }

        Ok(Self { models })
    }

    /// Reconstruct a bank from deserialized models. The caller guarantees
    /// declaration order; the count and a shared dimension are checked
    /// here.
    pub fn from_models(models: Vec<LogisticModel>) -> Result<Self> {
        if models.len() != EmotionLabel::ALL.len() {
            return Err(Error::artifact(format!(
                "expected {} models, artifact has {}",
                EmotionLabel::ALL.len(),
                models.len()
            )));
        }
        let dim = models[0].dimension();
        if let Some(bad) = models.iter().position(|m| m.dimension() != dim) {
            return Err(Error::artifact(format!(
                "model weight dimensions disagree: model 0 has {dim}, model {bad} has {}",
                models[bad].dimension()
            )));
        }
        Ok(Self { models })
    }

    /// Shared weight-vector dimension.
    pub fn dimension(&self) -> usize {
        self.models[0].dimension()
    }

    pub fn models(&self) -> &[LogisticModel] {
        &self.models
    }

    /// Probability per label, in declaration order. A model producing a
    /// non-finite value degrades to 0.0 for that label only; the other
    /// seventeen are unaffected.
    pub fn probabilities(&self, vector: &[f64]) -> Vec<(EmotionLabel, f64)> {
        EmotionLabel::ALL
            .iter()
            .zip(&self.models)
            .map(|(&label, model)| {
                let p = model.probability(vector);
                if p.is_finite() {
                    (label, p)
                } else {
                    warn!(label = %label, "non-finite probability, treating as 0");
                    (label, 0.0)
                }
            })
            .collect()
    }
}

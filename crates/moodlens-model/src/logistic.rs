//! Binary logistic regression
//!
//! Plain batch gradient descent with L2 regularization over dense f64
//! vectors. Small by modern standards, but the feature space is only a few
//! thousand TF-IDF dimensions and training is an offline batch step.

use moodlens_core::{Error, Result, TrainingParams};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A trained binary logistic regression model: weight vector plus bias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    weights: Vec<f64>,
    bias: f64,
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl LogisticModel {
    /// Reconstruct a model from serialized parameters.
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Train against binary targets. `steps` is decided per label by the
    /// caller (scaled by positive-sample count).
    pub fn train(
        vectors: &[Vec<f64>],
        targets: &[f64],
        params: &TrainingParams,
        steps: usize,
    ) -> Result<Self> {
        if vectors.is_empty() {
            return Err(Error::model("cannot train on an empty sample set"));
        }
        if vectors.len() != targets.len() {
            return Err(Error::model(format!(
                "sample/target length mismatch: {} vectors, {} targets",
                vectors.len(),
                targets.len()
            )));
        }
        let dim = vectors[0].len();
        if let Some(bad) = vectors.iter().position(|v| v.len() != dim) {
            return Err(Error::model(format!(
                "inconsistent vector dimensions: sample 0 has {dim}, sample {bad} has {}",
                vectors[bad].len()
            )));
        }

        let n = vectors.len() as f64;
        let mut weights = vec![0.0f64; dim];
        let mut bias = 0.0f64;

        for step in 0..steps {
            let mut grad = vec![0.0f64; dim];
            let mut bias_grad = 0.0f64;

            for (x, &y) in vectors.iter().zip(targets) {
                let err = sigmoid(dot(&weights, x) + bias) - y;
                for (g, &xi) in grad.iter_mut().zip(x) {
                    *g += err * xi;
                }
                bias_grad += err;
            }

            for (w, g) in weights.iter_mut().zip(&grad) {
                *w -= params.learning_rate * (g / n + params.regularization * *w);
            }
            bias -= params.learning_rate * (bias_grad / n);

            if step == steps - 1 {
                debug!(steps, dim, "gradient descent finished");
            }
        }

        Ok(Self { weights, bias })
    }

    /// Probability that the label is present, in [0, 1].
    pub fn probability(&self, vector: &[f64]) -> f64 {
        sigmoid(dot(&self.weights, vector) + self.bias)
    }

    /// Length of the weight vector (must equal the vocabulary size).
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        // One strong dimension decides the class.
        let vectors = vec![
            vec![3.0, 0.1],
            vec![2.5, 0.3],
            vec![2.8, 0.0],
            vec![0.1, 1.0],
            vec![0.0, 0.8],
            vec![0.2, 1.2],
        ];
        let targets = vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        (vectors, targets)
    }

    #[test]
    fn learns_a_separable_problem() {
        let (vectors, targets) = separable_data();
        let params = TrainingParams {
            learning_rate: 0.1,
            regularization: 0.001,
            ..Default::default()
        };
        let model = LogisticModel::train(&vectors, &targets, &params, 1200).unwrap();

        assert!(model.probability(&[3.0, 0.0]) > 0.7);
        assert!(model.probability(&[0.0, 1.0]) < 0.3);
    }

    #[test]
    fn probability_is_bounded() {
        let model = LogisticModel::from_parts(vec![100.0, -100.0], 5.0);
        for v in [[1000.0, 0.0], [0.0, 1000.0], [0.0, 0.0]] {
            let p = model.probability(&v);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn rejects_bad_shapes() {
        let params = TrainingParams::default();
        assert!(LogisticModel::train(&[], &[], &params, 10).is_err());

        let vectors = vec![vec![1.0, 2.0], vec![1.0]];
        let targets = vec![1.0, 0.0];
        assert!(LogisticModel::train(&vectors, &targets, &params, 10).is_err());

        let vectors = vec![vec![1.0, 2.0]];
        let targets = vec![1.0, 0.0];
        assert!(LogisticModel::train(&vectors, &targets, &params, 10).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let model = LogisticModel::from_parts(vec![0.5, -1.25], 0.75);
        let json = serde_json::to_string(&model).unwrap();
        let back: LogisticModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.weights(), model.weights());
        assert_eq!(back.bias(), model.bias());
    }
}

//! Prediction result types shared between the model and service crates

use crate::labels::EmotionLabel;
use serde::{Deserialize, Serialize};

/// A single label with its classifier confidence, as returned by the
/// ranked prediction entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfidence {
    pub label: EmotionLabel,
    /// Clamped to [0, 1].
    pub confidence: f64,
}

/// The label set predicted for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Labels whose probability met the threshold, in declaration order.
    pub labels: Vec<EmotionLabel>,
}

impl Prediction {
    pub fn new(labels: Vec<EmotionLabel>) -> Self {
        Self { labels }
    }

    /// Whether any predicted label belongs to the fixed negative subset.
    pub fn is_negative(&self) -> bool {
        self.labels.iter().any(|l| l.is_negative())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Outcome handed to the journal layer after a prediction is recorded:
/// whether this entry read as negative, and whether the rolling window
/// crossed the assistant trigger threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDecision {
    pub entry_is_negative: bool,
    pub should_trigger_assistant: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_negativity_follows_label_subset() {
        let negative = Prediction::new(vec![EmotionLabel::Happy, EmotionLabel::Sad]);
        assert!(negative.is_negative());

        let positive = Prediction::new(vec![EmotionLabel::Happy, EmotionLabel::Calm]);
        assert!(!positive.is_negative());

        assert!(!Prediction::default().is_negative());
    }
}

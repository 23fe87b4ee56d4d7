//! The emotion inference service
//!
//! Loads a trained artifact set at startup (fatal on any inconsistency),
//! rebuilds the TF-IDF corpus snapshot from the serialized training
//! documents, and serves predictions. Runtime failures degrade instead of
//! erroring: a dimension mismatch or a misbehaving model yields fewer
//! labels, never a failed request.

use crate::history::{is_negative_emotion, should_trigger_assistant, PredictionHistory};
use async_trait::async_trait;
use moodlens_core::{
    EmotionLabel, HistoryParams, LabelConfidence, Prediction, Result, TriggerDecision,
};
use moodlens_model::{load_artifacts, ClassifierBank, TfidfState, Vocabulary};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Default probability cutoff for the binary label set.
pub const DEFAULT_PREDICT_THRESHOLD: f64 = 0.5;

/// Default cutoff for the ranked confidence variant. Lower on purpose:
/// this entry point is for ranking, not binary gating.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Default negativity ratio for the assistant trigger.
pub const DEFAULT_NEGATIVITY_RATIO: f64 = 0.5;

/// Classification surface the journal layer consumes.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Labels whose probability meets the threshold, declaration order.
    async fn predict(&self, text: &str, threshold: f64) -> Prediction;

    /// Ranked (label, confidence) pairs at or above the threshold,
    /// descending by confidence.
    async fn predict_with_confidence(&self, text: &str, threshold: f64) -> Vec<LabelConfidence>;
}

/// Inference over a loaded artifact set plus the rolling prediction
/// history. Model state is immutable after load and shared freely;
/// the history is the only mutable piece.
pub struct InferenceService {
    vocabulary: Arc<Vocabulary>,
    tfidf: Arc<TfidfState>,
    bank: Arc<ClassifierBank>,
    history: PredictionHistory,
    negativity_ratio: f64,
}

impl InferenceService {
    /// Load artifacts from a training output directory. Missing or
    /// misaligned artifacts are fatal; the service never starts with
    /// partial state.
    pub fn load(artifact_dir: &Path) -> Result<Self> {
        Self::load_with_history(artifact_dir, HistoryParams::default())
    }

    pub fn load_with_history(artifact_dir: &Path, history: HistoryParams) -> Result<Self> {
        let artifacts = load_artifacts(artifact_dir)?;

        // The corpus snapshot is refitted against the serialized training
        // documents using the artifact's own vocabulary, so the document
        // frequencies the weights were trained against are reproduced.
        let tfidf = TfidfState::fit(&artifacts.documents, &artifacts.vocabulary);

        info!(
            vocabulary = artifacts.vocabulary.len(),
            documents = tfidf.document_count(),
            trained_at = %artifacts.trained_at,
            "inference service ready"
        );

        Ok(Self {
            vocabulary: Arc::new(artifacts.vocabulary),
            tfidf: Arc::new(tfidf),
            bank: Arc::new(artifacts.bank),
            history: PredictionHistory::new(history),
            negativity_ratio: DEFAULT_NEGATIVITY_RATIO,
        })
    }

    /// Per-label probabilities for a text, or None when the vectorized
    /// length disagrees with the vocabulary (stale artifacts). Soft
    /// failure: logged, never an error.
    fn probabilities(&self, text: &str) -> Option<Vec<(EmotionLabel, f64)>> {
        let vector = self.tfidf.vector_for_text(text, &self.vocabulary);
        if vector.len() != self.vocabulary.len() || vector.len() != self.bank.dimension() {
            warn!(
                vector = vector.len(),
                vocabulary = self.vocabulary.len(),
                model = self.bank.dimension(),
                "vector dimension mismatch, returning no labels"
            );
            return None;
        }
        Some(self.bank.probabilities(&vector))
    }

    /// Record a prediction in the rolling window and evaluate the
    /// assistant trigger over the updated window.
    pub fn record(&self, prediction: &Prediction) -> TriggerDecision {
        self.history.record(prediction.clone());
        let snapshot = self.history.snapshot();
        TriggerDecision {
            entry_is_negative: is_negative_emotion(&prediction.labels),
            should_trigger_assistant: should_trigger_assistant(&snapshot, self.negativity_ratio),
        }
    }

    pub fn history(&self) -> &PredictionHistory {
        &self.history
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[async_trait]
impl EmotionClassifier for InferenceService {
    async fn predict(&self, text: &str, threshold: f64) -> Prediction {
        let Some(probs) = self.probabilities(text) else {
            return Prediction::default();
        };

        let labels = probs
            .into_iter()
            .filter(|(_, p)| *p >= threshold)
            .map(|(label, _)| label)
            .collect();
        Prediction::new(labels)
    }

    async fn predict_with_confidence(&self, text: &str, threshold: f64) -> Vec<LabelConfidence> {
        let Some(probs) = self.probabilities(text) else {
            return Vec::new();
        };

        let mut ranked: Vec<LabelConfidence> = probs
            .into_iter()
            .map(|(label, p)| LabelConfidence {
                label,
                confidence: p.clamp(0.0, 1.0),
            })
            .filter(|c| c.confidence >= threshold)
            .collect();
        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

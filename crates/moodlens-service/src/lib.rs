//! moodlens inference service
//!
//! The serving half of the pipeline: loads training artifacts, classifies
//! journal text into emotion labels, and tracks the rolling negativity
//! window that decides when the journal's assistant should offer support.

pub mod history;
pub mod service;

pub use history::{is_negative_emotion, should_trigger_assistant, PredictionHistory};
pub use service::{
    EmotionClassifier, InferenceService, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_NEGATIVITY_RATIO,
    DEFAULT_PREDICT_THRESHOLD,
};

//! moodlens core types
//!
//! Shared foundation for the moodlens emotion pipeline: the fixed 18-label
//! emotion set, prediction result types, pipeline configuration, and the
//! workspace-wide error type.

pub mod config;
pub mod error;
pub mod labels;
pub mod types;

pub use config::{HistoryParams, TrainingParams, VectorizerParams};
pub use error::{Error, Result};
pub use labels::EmotionLabel;
pub use types::{LabelConfidence, Prediction, TriggerDecision};

//! moodlens trainer
//!
//! Offline side of the system: CSV corpus loading, the batch training
//! pipeline that produces the artifact set the inference service consumes,
//! and a count-based feature-importance diagnostic.

pub mod cli;
pub mod dataset;
pub mod importance;
pub mod pipeline;

pub use dataset::{load_corpus, LabeledCorpus};
pub use pipeline::{run_training, TrainingReport};

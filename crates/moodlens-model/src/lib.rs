//! moodlens model layer
//!
//! The statistical half of the pipeline: vocabulary construction, TF-IDF
//! vectorization over an immutable fitted snapshot, the 18-model
//! one-vs-rest logistic regression bank, and flat-file artifact
//! serialization connecting the offline trainer to the inference service.

pub mod artifacts;
pub mod bank;
pub mod logistic;
pub mod tfidf;
pub mod vocab;

pub use artifacts::{load_artifacts, write_artifacts, LoadedArtifacts};
pub use bank::ClassifierBank;
pub use logistic::LogisticModel;
pub use tfidf::TfidfState;
pub use vocab::Vocabulary;

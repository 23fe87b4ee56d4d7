//! moodlens text preprocessing
//!
//! The negation-aware front half of the emotion pipeline: normalization,
//! negation scope tagging, sentiment-preserving tokenization/stemming, and
//! feature extraction (n-grams plus the synthetic pattern catalogue).
//!
//! Everything here is deterministic and pure; the same text always yields
//! the same, identically-ordered feature sequence. Training and inference
//! share these functions, which is what keeps serialized vocabularies
//! valid across processes.

pub mod features;
pub mod negation;
pub mod normalize;
pub mod tokenize;

pub use features::{
    extract_features, is_negation_feature, ngrams, PatternInput, PatternRule, PATTERN_RULES,
};
pub use negation::{apply_negation_scope, is_negation_word, NEGATION_MARKER};
pub use normalize::normalize;
pub use tokenize::tokenize;

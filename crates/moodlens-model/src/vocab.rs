//! Vocabulary construction
//!
//! A vocabulary is an ordered, deduplicated list of feature strings with
//! stable indices. It is built once at training time and then frozen: the
//! classifier weight vectors are laid out in vocabulary order, so index
//! `i` has to mean the same feature at training and inference time.

use moodlens_core::{Error, Result, VectorizerParams};
use moodlens_text::{extract_features, is_negation_feature};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Ordered feature list with a reverse index.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary over a document corpus.
    ///
    /// Features below the minimum document frequency are dropped. If the
    /// survivor set still exceeds the cap, negation-pattern features are
    /// retained first, then higher-df features; ties break
    /// lexicographically so the result is a total order.
    pub fn build(docs: &[String], params: &VectorizerParams) -> Self {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        // First-appearance order keeps the uncapped vocabulary stable
        // across runs without relying on hash iteration order.
        let mut seen_order: Vec<String> = Vec::new();

        for doc in docs {
            let mut counted: HashSet<String> = HashSet::new();
            for feature in extract_features(doc) {
                // df counts a feature once per document.
                if !counted.insert(feature.clone()) {
                    continue;
                }
                let entry = doc_freq.entry(feature.clone()).or_insert(0);
                if *entry == 0 {
                    seen_order.push(feature);
                }
                *entry += 1;
            }
        }

        let mut terms: Vec<String> = seen_order
            .into_iter()
            .filter(|t| doc_freq[t] >= params.min_document_frequency)
            .collect();

        if terms.len() > params.max_vocabulary {
            debug!(
                candidates = terms.len(),
                cap = params.max_vocabulary,
                "vocabulary over cap, applying negation-biased truncation"
            );
            terms.sort_by(|a, b| {
                let a_neg = is_negation_feature(a);
                let b_neg = is_negation_feature(b);
                b_neg
                    .cmp(&a_neg)
                    .then_with(|| doc_freq[b].cmp(&doc_freq[a]))
                    .then_with(|| a.cmp(b))
            });
            terms.truncate(params.max_vocabulary);
        }

        info!(size = terms.len(), "vocabulary built");
        Self::from_terms_unchecked(terms)
    }

    /// Reconstruct a vocabulary from an ordered term list (artifact load).
    /// Duplicate terms mean a corrupt artifact.
    pub fn from_terms(terms: Vec<String>) -> Result<Self> {
        let vocab = Self::from_terms_unchecked(terms);
        if vocab.index.len() != vocab.terms.len() {
            return Err(Error::vocabulary(
                "vocabulary artifact contains duplicate terms",
            ));
        }
        Ok(vocab)
    }

    fn from_terms_unchecked(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

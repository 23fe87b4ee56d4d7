//! TF-IDF scoring over a fitted corpus snapshot
//!
//! The fitted state is immutable: scoring a brand-new document is a pure
//! read against the precomputed document-frequency table, so concurrent
//! inference calls can share one snapshot without any locking and the
//! corpus trivially "returns to its pre-insertion state" after every call.
//!
//! Weighting matches what the trained weights were fitted against:
//! tf is the raw term count in the document, idf is ln(N / (1 + df)) + 1
//! over the fitted corpus.

use crate::vocab::Vocabulary;
use moodlens_core::{Error, Result};
use moodlens_text::extract_features;
use std::collections::HashMap;

/// Immutable TF-IDF corpus state fitted over the training documents.
#[derive(Debug, Clone)]
pub struct TfidfState {
    /// Per-document term counts, vocabulary terms only.
    doc_term_counts: Vec<HashMap<String, usize>>,

    /// Number of fitted documents each vocabulary term appears in.
    document_frequency: HashMap<String, usize>,
}

impl TfidfState {
    /// Fit over a corpus: extract each document's features, drop terms
    /// outside the vocabulary, and record counts and document
    /// frequencies.
    pub fn fit(docs: &[String], vocab: &Vocabulary) -> Self {
        let mut doc_term_counts = Vec::with_capacity(docs.len());
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in docs {
            let counts = count_vocabulary_terms(doc, vocab);
            for term in counts.keys() {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
            doc_term_counts.push(counts);
        }

        Self {
            doc_term_counts,
            document_frequency,
        }
    }

    /// Number of fitted documents.
    pub fn document_count(&self) -> usize {
        self.doc_term_counts.len()
    }

    fn idf(&self, term: &str) -> f64 {
        let n = self.doc_term_counts.len() as f64;
        let df = self.document_frequency.get(term).copied().unwrap_or(0) as f64;
        (n / (1.0 + df)).ln() + 1.0
    }

    fn vector_from_counts(&self, counts: &HashMap<String, usize>, vocab: &Vocabulary) -> Vec<f64> {
        vocab
            .terms()
            .iter()
            .map(|term| match counts.get(term) {
                Some(&tf) if tf > 0 => tf as f64 * self.idf(term),
                _ => 0.0,
            })
            .collect()
    }

    /// Score a fitted training document by its corpus index.
    pub fn vector_for_document(&self, index: usize, vocab: &Vocabulary) -> Result<Vec<f64>> {
        let counts = self.doc_term_counts.get(index).ok_or_else(|| {
            Error::model(format!(
                "document index {index} out of range (corpus has {} documents)",
                self.doc_term_counts.len()
            ))
        })?;
        Ok(self.vector_from_counts(counts, vocab))
    }

    /// Score a new document against the fitted corpus. Never mutates the
    /// fitted state; safe to call concurrently.
    pub fn vector_for_text(&self, text: &str, vocab: &Vocabulary) -> Vec<f64> {
        let counts = count_vocabulary_terms(text, vocab);
        self.vector_from_counts(&counts, vocab)
    }
}

fn count_vocabulary_terms(text: &str, vocab: &Vocabulary) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for feature in extract_features(text) {
        if vocab.contains(&feature) {
            *counts.entry(feature).or_insert(0) += 1;
        }
    }
    counts
}

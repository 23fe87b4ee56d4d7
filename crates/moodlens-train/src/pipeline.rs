//! The offline training pipeline
//!
//! Strictly ordered batch run: load corpus → build vocabulary → fit
//! TF-IDF → vectorize every document → train the 18-model bank → write
//! artifacts. Any failure aborts before anything is written; there are no
//! partial artifact sets.

use crate::dataset::{load_corpus, LabeledCorpus};
use crate::importance::feature_importance;
use moodlens_core::{EmotionLabel, Result, TrainingParams, VectorizerParams};
use moodlens_model::{write_artifacts, ClassifierBank, TfidfState, Vocabulary};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Summary of a completed training run.
pub struct TrainingReport {
    pub documents: usize,
    pub vocabulary_size: usize,
    pub positive_counts: Vec<(EmotionLabel, usize)>,
    pub elapsed_secs: f64,
}

/// Run the full batch and write artifacts into `out_dir`.
pub fn run_training(
    data: &Path,
    text_column: &str,
    out_dir: &Path,
    vec_params: &VectorizerParams,
    train_params: &TrainingParams,
) -> Result<TrainingReport> {
    let started = Instant::now();

    let corpus = load_corpus(data, text_column)?;
    train_from_corpus(corpus, out_dir, vec_params, train_params, started)
}

/// Pipeline body, split out so tests can feed an in-memory corpus.
pub fn train_from_corpus(
    corpus: LabeledCorpus,
    out_dir: &Path,
    vec_params: &VectorizerParams,
    train_params: &TrainingParams,
    started: Instant,
) -> Result<TrainingReport> {
    let vocabulary = Vocabulary::build(&corpus.documents, vec_params);
    let tfidf = TfidfState::fit(&corpus.documents, &vocabulary);
    info!(
        documents = corpus.len(),
        vocabulary = vocabulary.len(),
        "vocabulary and TF-IDF state fitted"
    );

    let vectors: Vec<Vec<f64>> = (0..corpus.len())
        .map(|i| tfidf.vector_for_document(i, &vocabulary))
        .collect::<Result<_>>()?;
    info!(vectors = vectors.len(), dimension = vocabulary.len(), "training set vectorized");

    let bank = ClassifierBank::train(&vectors, &corpus.label_rows, train_params)?;

    let positive_counts = corpus.positive_counts();
    for (label, &positives) in EmotionLabel::ALL.iter().zip(&positive_counts) {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let top = feature_importance(&corpus.documents, &corpus.label_rows, *label);
            for entry in top.iter().take(5) {
                debug!(
                    label = %label,
                    feature = %entry.feature,
                    score = entry.score,
                    "top discriminative feature"
                );
            }
        }
        debug!(label = %label, positives, "label summary");
    }

    // Everything trained; only now do artifacts touch disk.
    write_artifacts(
        out_dir,
        &bank,
        &vocabulary,
        vec_params,
        &corpus.documents,
        &positive_counts,
    )?;

    Ok(TrainingReport {
        documents: corpus.len(),
        vocabulary_size: vocabulary.len(),
        positive_counts: EmotionLabel::ALL
            .iter()
            .copied()
            .zip(positive_counts)
            .collect(),
        elapsed_secs: started.elapsed().as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlens_model::load_artifacts;
    use tempfile::TempDir;

    fn small_corpus() -> LabeledCorpus {
        let rows: Vec<(&str, EmotionLabel)> = vec![
            ("not feeling good at all", EmotionLabel::Sad),
            ("feeling awful and tired", EmotionLabel::Sad),
            ("wonderful happy afternoon", EmotionLabel::Happy),
            ("great dinner with friends", EmotionLabel::Happy),
        ];
        let documents = rows.iter().map(|(t, _)| t.to_string()).collect();
        let label_rows = rows
            .iter()
            .map(|(_, label)| {
                let mut row = vec![0.0; 18];
                row[label.index()] = 1.0;
                row
            })
            .collect();
        LabeledCorpus {
            documents,
            label_rows,
        }
    }

    fn fast_params() -> TrainingParams {
        TrainingParams {
            min_steps: 30,
            max_steps: 30,
            ..Default::default()
        }
    }

    #[test]
    fn full_run_writes_loadable_artifacts() {
        let dir = TempDir::new().unwrap();
        let report = train_from_corpus(
            small_corpus(),
            dir.path(),
            &VectorizerParams::default(),
            &fast_params(),
            Instant::now(),
        )
        .unwrap();

        assert_eq!(report.documents, 4);
        assert!(report.vocabulary_size > 0);
        let sad = report
            .positive_counts
            .iter()
            .find(|(l, _)| *l == EmotionLabel::Sad)
            .unwrap();
        assert_eq!(sad.1, 2);

        let loaded = load_artifacts(dir.path()).unwrap();
        assert_eq!(loaded.vocabulary.len(), report.vocabulary_size);
        assert_eq!(loaded.documents.len(), 4);
    }

    #[test]
    fn failed_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut corpus = small_corpus();
        // Corrupt a label row so bank training fails.
        corpus.label_rows[1] = vec![0.0; 3];

        let result = train_from_corpus(
            corpus,
            dir.path(),
            &VectorizerParams::default(),
            &fast_params(),
            Instant::now(),
        );
        assert!(result.is_err());
        assert!(!dir
            .path()
            .join(moodlens_model::artifacts::MODELS_FILE)
            .exists());
    }
}

//! Training artifact serialization
//!
//! Three flat JSON files make up a trained model:
//! - `models.json`: the 18 classifiers' weights, biases, and training
//!   metadata, in label declaration order;
//! - `vocabulary.json`: the ordered feature list, explicit feature/index
//!   pairs, and the vectorizer parameters the run was fitted with;
//! - `corpus.json`: the raw training documents, kept so the inference
//!   process can rebuild equivalent TF-IDF corpus state at startup.
//!
//! All three must come from the same training run: vocabulary order is
//! baked into every weight vector, so loading validates alignment and
//! fails hard on any mismatch rather than serving with broken indices.

use crate::bank::ClassifierBank;
use crate::logistic::LogisticModel;
use crate::vocab::Vocabulary;
use chrono::{DateTime, Utc};
use moodlens_core::{EmotionLabel, Error, Result, VectorizerParams};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

pub const MODELS_FILE: &str = "models.json";
pub const VOCABULARY_FILE: &str = "vocabulary.json";
pub const CORPUS_FILE: &str = "corpus.json";

/// One serialized classifier with its training metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelModelRecord {
    pub label: EmotionLabel,
    pub positive_count: usize,
    pub weights: Vec<f64>,
    pub bias: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsArtifact {
    pub trained_at: DateTime<Utc>,
    pub models: Vec<LabelModelRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyArtifact {
    pub params: VectorizerParams,
    pub terms: Vec<String>,
    /// Redundant with `terms` order, but written explicitly so a reader
    /// never has to infer the index contract.
    pub term_index: Vec<(String, usize)>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusArtifact {
    pub documents: Vec<String>,
}

/// Everything the inference service needs, validated and ready.
pub struct LoadedArtifacts {
    pub bank: ClassifierBank,
    pub vocabulary: Vocabulary,
    pub params: VectorizerParams,
    pub documents: Vec<String>,
    pub trained_at: DateTime<Utc>,
}

/// Write all three artifacts for a completed training run.
///
/// `positive_counts` is per label, declaration order. The directory is
/// created if missing. Callers must only invoke this after every model
/// trained successfully; a failed run writes nothing.
pub fn write_artifacts(
    dir: &Path,
    bank: &ClassifierBank,
    vocabulary: &Vocabulary,
    params: &VectorizerParams,
    documents: &[String],
    positive_counts: &[usize],
) -> Result<()> {
    if positive_counts.len() != EmotionLabel::ALL.len() {
        return Err(Error::artifact(format!(
            "expected {} positive counts, got {}",
            EmotionLabel::ALL.len(),
            positive_counts.len()
        )));
    }
    std::fs::create_dir_all(dir)?;

    let models = ModelsArtifact {
        trained_at: Utc::now(),
        models: EmotionLabel::ALL
            .iter()
            .zip(bank.models())
            .zip(positive_counts)
            .map(|((&label, model), &positive_count)| LabelModelRecord {
                label,
                positive_count,
                weights: model.weights().to_vec(),
                bias: model.bias(),
            })
            .collect(),
    };
    write_json(&dir.join(MODELS_FILE), &models)?;

    let vocab_artifact = VocabularyArtifact {
        params: *params,
        terms: vocabulary.terms().to_vec(),
        term_index: vocabulary
            .terms()
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect(),
    };
    write_json(&dir.join(VOCABULARY_FILE), &vocab_artifact)?;

    let corpus = CorpusArtifact {
        documents: documents.to_vec(),
    };
    write_json(&dir.join(CORPUS_FILE), &corpus)?;

    info!(
        dir = %dir.display(),
        vocabulary = vocabulary.len(),
        documents = documents.len(),
        "training artifacts written"
    );
    Ok(())
}

/// Load and validate a full artifact set. Any inconsistency (wrong label
/// order, index pairs that disagree with term order, weight vectors that
/// don't match the vocabulary size) is a fatal load error.
pub fn load_artifacts(dir: &Path) -> Result<LoadedArtifacts> {
    let models: ModelsArtifact = read_json(&dir.join(MODELS_FILE))?;
    let vocab_artifact: VocabularyArtifact = read_json(&dir.join(VOCABULARY_FILE))?;
    let corpus: CorpusArtifact = read_json(&dir.join(CORPUS_FILE))?;

    for (i, (term, index)) in vocab_artifact.term_index.iter().enumerate() {
        if *index != i || vocab_artifact.terms.get(i) != Some(term) {
            return Err(Error::artifact(format!(
                "vocabulary index pair ({term}, {index}) disagrees with term order at {i}"
            )));
        }
    }
    let vocabulary = Vocabulary::from_terms(vocab_artifact.terms)?;

    if models.models.len() != EmotionLabel::ALL.len() {
        return Err(Error::artifact(format!(
            "models artifact has {} entries, expected {}",
            models.models.len(),
            EmotionLabel::ALL.len()
        )));
    }
    let mut loaded = Vec::with_capacity(models.models.len());
    for (expected, record) in EmotionLabel::ALL.iter().zip(&models.models) {
        if record.label != *expected {
            return Err(Error::artifact(format!(
                "model order mismatch: expected {expected}, found {}",
                record.label
            )));
        }
        if record.weights.len() != vocabulary.len() {
            return Err(Error::artifact(format!(
                "{} model has {} weights but vocabulary has {} terms \
                 (artifacts from different training runs?)",
                record.label,
                record.weights.len(),
                vocabulary.len()
            )));
        }
        loaded.push(LogisticModel::from_parts(record.weights.clone(), record.bias));
    }
    let bank = ClassifierBank::from_models(loaded)?;

    info!(
        dir = %dir.display(),
        vocabulary = vocabulary.len(),
        documents = corpus.documents.len(),
        trained_at = %models.trained_at,
        "artifacts loaded"
    );

    Ok(LoadedArtifacts {
        bank,
        vocabulary,
        params: vocab_artifact.params,
        documents: corpus.documents,
        trained_at: models.trained_at,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), value)?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        Error::artifact(format!("cannot open artifact {}: {e}", path.display()))
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

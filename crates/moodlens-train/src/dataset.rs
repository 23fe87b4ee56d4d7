//! Labeled corpus loading
//!
//! The training dataset is a CSV with one free-text column and one
//! TRUE/FALSE column per emotion (`Answer.f1.<label>.raw`). Schema
//! problems are fatal: the batch run aborts rather than training on a
//! partially understood file.

use moodlens_core::{EmotionLabel, Error, Result};
use std::path::Path;
use tracing::info;

/// Default name of the free-text column.
pub const DEFAULT_TEXT_COLUMN: &str = "Answer";

/// Documents and their per-label binary targets, row-aligned.
pub struct LabeledCorpus {
    pub documents: Vec<String>,
    /// `label_rows[i][j]` is 1.0 when document `i` carries
    /// `EmotionLabel::ALL[j]`.
    pub label_rows: Vec<Vec<f64>>,
}

impl LabeledCorpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Positive-sample count per label, declaration order.
    pub fn positive_counts(&self) -> Vec<usize> {
        (0..EmotionLabel::ALL.len())
            .map(|j| self.label_rows.iter().filter(|row| row[j] == 1.0).count())
            .collect()
    }
}

fn truthy(value: &str) -> f64 {
    match value.trim() {
        "TRUE" | "true" | "True" | "1" => 1.0,
        _ => 0.0,
    }
}

/// Load a labeled corpus from a CSV file.
pub fn load_corpus(path: &Path, text_column: &str) -> Result<LabeledCorpus> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::corpus(format!("cannot open {}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::corpus(format!("cannot read headers: {e}")))?
        .clone();

    let text_idx = headers
        .iter()
        .position(|h| h == text_column)
        .ok_or_else(|| Error::corpus(format!("missing text column {text_column:?}")))?;

    let label_idx: Vec<usize> = EmotionLabel::ALL
        .iter()
        .map(|label| {
            let column = label.dataset_column();
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| Error::corpus(format!("missing label column {column:?}")))
        })
        .collect::<Result<_>>()?;

    let mut documents = Vec::new();
    let mut label_rows = Vec::new();
    for (row_num, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::corpus(format!("bad record at row {row_num}: {e}")))?;

        let text = record.get(text_idx).ok_or_else(|| {
            Error::corpus(format!("row {row_num} is missing the text column"))
        })?;
        let row: Vec<f64> = label_idx
            .iter()
            .map(|&idx| truthy(record.get(idx).unwrap_or("")))
            .collect();

        documents.push(text.to_string());
        label_rows.push(row);
    }

    if documents.is_empty() {
        return Err(Error::corpus(format!(
            "{} contains no data rows",
            path.display()
        )));
    }

    info!(
        path = %path.display(),
        documents = documents.len(),
        "corpus loaded"
    );
    Ok(LabeledCorpus {
        documents,
        label_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn header_row() -> String {
        let mut cols = vec![DEFAULT_TEXT_COLUMN.to_string()];
        cols.extend(EmotionLabel::ALL.iter().map(|l| l.dataset_column()));
        cols.join(",")
    }

    fn label_cells(positive: &[EmotionLabel]) -> String {
        EmotionLabel::ALL
            .iter()
            .map(|l| if positive.contains(l) { "TRUE" } else { "FALSE" })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn write_csv(rows: &[(&str, Vec<EmotionLabel>)]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", header_row()).unwrap();
        for (text, labels) in rows {
            writeln!(file, "{text},{}", label_cells(labels)).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_documents_and_binary_labels() {
        let file = write_csv(&[
            ("feeling sad today", vec![EmotionLabel::Sad]),
            ("what a great day", vec![EmotionLabel::Happy, EmotionLabel::Excited]),
        ]);

        let corpus = load_corpus(file.path(), DEFAULT_TEXT_COLUMN).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.label_rows[0][EmotionLabel::Sad.index()], 1.0);
        assert_eq!(corpus.label_rows[0][EmotionLabel::Happy.index()], 0.0);
        assert_eq!(corpus.label_rows[1][EmotionLabel::Happy.index()], 1.0);
        assert_eq!(corpus.label_rows[1][EmotionLabel::Excited.index()], 1.0);

        let positives = corpus.positive_counts();
        assert_eq!(positives[EmotionLabel::Sad.index()], 1);
        assert_eq!(positives[EmotionLabel::Afraid.index()], 0);
    }

    #[test]
    fn missing_text_column_is_fatal() {
        let file = write_csv(&[("entry", vec![])]);
        assert!(load_corpus(file.path(), "NoSuchColumn").is_err());
    }

    #[test]
    fn missing_label_column_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Answer,Answer.f1.afraid.raw").unwrap();
        writeln!(file, "some text,TRUE").unwrap();
        file.flush().unwrap();
        assert!(load_corpus(file.path(), DEFAULT_TEXT_COLUMN).is_err());
    }

    #[test]
    fn empty_file_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", header_row()).unwrap();
        file.flush().unwrap();
        assert!(load_corpus(file.path(), DEFAULT_TEXT_COLUMN).is_err());
    }
}

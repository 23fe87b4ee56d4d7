//! Per-label feature importance
//!
//! A quick count-based diagnostic printed after training: for one label,
//! how lopsided is each feature's document frequency between positive and
//! negative samples? Score = |pos - neg| / (pos + neg), so 1.0 means the
//! feature only ever appears on one side.

use moodlens_core::EmotionLabel;
use moodlens_text::extract_features;
use std::collections::{HashMap, HashSet};

/// A feature with its importance score for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    pub feature: String,
    pub score: f64,
    pub positive_docs: usize,
    pub negative_docs: usize,
}

/// Compute importance scores for one emotion label over the training set,
/// sorted descending by score, then by total document count.
pub fn feature_importance(
    documents: &[String],
    label_rows: &[Vec<f64>],
    label: EmotionLabel,
) -> Vec<FeatureImportance> {
    let column = label.index();
    let mut positive: HashMap<String, usize> = HashMap::new();
    let mut negative: HashMap<String, usize> = HashMap::new();

    for (doc, row) in documents.iter().zip(label_rows) {
        let unique: HashSet<String> = extract_features(doc).into_iter().collect();
        let target = if row.get(column).copied().unwrap_or(0.0) == 1.0 {
            &mut positive
        } else {
            &mut negative
        };
        for feature in unique {
            *target.entry(feature).or_insert(0) += 1;
        }
    }

    let all: HashSet<&String> = positive.keys().chain(negative.keys()).collect();
    let mut scores: Vec<FeatureImportance> = all
        .into_iter()
        .map(|feature| {
            let pos = positive.get(feature).copied().unwrap_or(0);
            let neg = negative.get(feature).copied().unwrap_or(0);
            let total = pos + neg;
            FeatureImportance {
                feature: feature.clone(),
                score: (pos as f64 - neg as f64).abs() / total as f64,
                positive_docs: pos,
                negative_docs: neg,
            }
        })
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                (b.positive_docs + b.negative_docs).cmp(&(a.positive_docs + a.negative_docs))
            })
            .then_with(|| a.feature.cmp(&b.feature))
    });
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sided_features_score_one() {
        let documents = vec![
            "gloomy rainy monday".to_string(),
            "gloomy grey tuesday".to_string(),
            "sunny bright saturday".to_string(),
        ];
        let mut rows = vec![vec![0.0; 18]; 3];
        rows[0][EmotionLabel::Sad.index()] = 1.0;
        rows[1][EmotionLabel::Sad.index()] = 1.0;

        let scores = feature_importance(&documents, &rows, EmotionLabel::Sad);

        let gloomy = scores.iter().find(|s| s.feature == "gloomi").unwrap();
        assert_eq!(gloomy.score, 1.0);
        assert_eq!(gloomy.positive_docs, 2);
        assert_eq!(gloomy.negative_docs, 0);

        let sunny = scores.iter().find(|s| s.feature == "sunni").unwrap();
        assert_eq!(sunny.score, 1.0);
        assert_eq!(sunny.positive_docs, 0);
    }

    #[test]
    fn balanced_features_score_zero() {
        let documents = vec![
            "coffee in the morning".to_string(),
            "coffee in the evening".to_string(),
        ];
        let mut rows = vec![vec![0.0; 18]; 2];
        rows[0][EmotionLabel::Happy.index()] = 1.0;

        let scores = feature_importance(&documents, &rows, EmotionLabel::Happy);
        let coffee = scores.iter().find(|s| s.feature == "coffe").unwrap();
        assert_eq!(coffee.score, 0.0);
    }

    #[test]
    fn sorted_descending_by_score() {
        let documents = vec![
            "alpha beta".to_string(),
            "alpha gamma".to_string(),
        ];
        let mut rows = vec![vec![0.0; 18]; 2];
        rows[0][EmotionLabel::Calm.index()] = 1.0;

        let scores = feature_importance(&documents, &rows, EmotionLabel::Calm);
        for pair in scores.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

//! Tokenization with sentiment-aware filtering and stemming
//!
//! Pipeline: normalize → whitespace split → negation scope tagging →
//! stopword filter (with carve-outs that keep negation and sentiment
//! signal) → Porter stemming. Marked tokens are stemmed under their
//! marker; negation words themselves are never stemmed.

use crate::negation::{self, NEGATION_MARKER};
use crate::normalize::normalize;
use rust_stemmers::{Algorithm, Stemmer};

/// Stopwords dropped during filtering.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "i", "me", "my", "myself", "we",
    "our", "ours", "ourselves", "you", "your", "yours", "yourself", "yourselves",
];

/// Short or common words kept anyway because they carry sentiment.
const SENTIMENT_KEEPLIST: &[&str] = &[
    "good", "bad", "feel", "feeling", "all", "well", "fine", "great", "terrible", "awful", "sad",
    "happy",
];

fn keep_token(token: &str) -> bool {
    if negation::is_marked(token) || negation::is_negation_word(token) {
        return true;
    }
    if SENTIMENT_KEEPLIST.contains(&token) {
        return true;
    }
    token.len() > 2 && !STOP_WORDS.contains(&token)
}

fn stem_token(stemmer: &Stemmer, token: String) -> String {
    if negation::is_marked(&token) {
        let base = negation::strip_marker(&token);
        return format!("{NEGATION_MARKER}{}", stemmer.stem(base));
    }
    if negation::is_negation_word(&token) {
        return token;
    }
    stemmer.stem(&token).into_owned()
}

/// Produce the filtered, stemmed token sequence for a document.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
    let tagged = negation::apply_negation_scope(&tokens);

    let stemmer = Stemmer::create(Algorithm::English);
    tagged
        .into_iter()
        .filter(|t| keep_token(t))
        .map(|t| stem_token(&stemmer, t))
        .collect()
}

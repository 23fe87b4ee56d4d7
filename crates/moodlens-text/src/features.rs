//! Feature extraction
//!
//! A document's features are its unigrams, bigrams, and trigrams plus a
//! catalogue of synthetic pattern features. The catalogue is an ordered
//! table of named rules, each a pure detector over the lowercased raw text
//! and the token sequence, so individual patterns can be tested and
//! extended without touching the statistical pipeline.
//!
//! Feature strings are a wire format: the serialized vocabulary and the
//! trained weights are keyed by these exact names. Do not rename them.

use crate::negation;
use crate::tokenize::tokenize;
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

/// Fixed phrases that signal explicit negative sentiment in the raw text.
const NEGATIVE_PHRASES: &[&str] = &[
    "not feeling good",
    "not good",
    "not well",
    "not fine",
    "not okay",
    "don't feel good",
    "doesn't feel good",
    "not feeling well",
    "not feeling fine",
    "not feeling okay",
    "not feeling great",
];

/// Positive words whose direct negation gets its own feature.
const POSITIVE_WORDS: &[&str] = &["good", "well", "fine", "okay", "great", "happy"];

/// Sentiment words scanned for after a "not feel(ing)" pair.
const FEELING_TARGETS: &[&str] = &["good", "well", "fine", "okay", "great", "bad"];

/// How many tokens past "feel(ing)" the target scan looks.
const FEELING_LOOKAHEAD: usize = 3;

static PHRASE_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(NEGATIVE_PHRASES).expect("phrase matcher builds from fixed literals")
});

/// Inputs every pattern detector sees.
pub struct PatternInput<'a> {
    /// The raw document text, lowercased but otherwise untouched.
    pub raw_lower: &'a str,
    /// The filtered, stemmed token sequence.
    pub tokens: &'a [String],
}

type Detector = fn(&PatternInput<'_>, &[String]) -> Vec<String>;

/// One entry in the pattern catalogue: a named detector that emits zero or
/// more feature strings. Detectors run in table order and see the features
/// emitted by earlier rules.
pub struct PatternRule {
    pub name: &'static str,
    detector: Detector,
}

impl PatternRule {
    pub fn detect(&self, input: &PatternInput<'_>, emitted_so_far: &[String]) -> Vec<String> {
        (self.detector)(input, emitted_so_far)
    }
}

/// The ordered pattern catalogue.
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        name: "explicit-negative-phrases",
        detector: detect_explicit_phrases,
    },
    PatternRule {
        name: "not-good",
        detector: detect_not_good,
    },
    PatternRule {
        name: "negation-intensifier",
        detector: detect_negation_intensifier,
    },
    PatternRule {
        name: "negated-adjacency",
        detector: detect_negated_adjacency,
    },
    PatternRule {
        name: "strong-negative-context",
        detector: detect_strong_context,
    },
];

fn phrase_feature_name(phrase: &str) -> String {
    format!("PHRASE_{}", phrase.replace(' ', "_").replace('\'', ""))
}

fn detect_explicit_phrases(input: &PatternInput<'_>, _emitted: &[String]) -> Vec<String> {
    let mut hit = [false; NEGATIVE_PHRASES.len()];
    // Overlapping search: "not good" must still register inside a longer
    // phrase hit.
    for m in PHRASE_MATCHER.find_overlapping_iter(input.raw_lower) {
        hit[m.pattern().as_usize()] = true;
    }

    let mut out = Vec::new();
    for (i, phrase) in NEGATIVE_PHRASES.iter().enumerate() {
        if hit[i] {
            out.push(phrase_feature_name(phrase));
            out.push("EXPLICIT_NEGATIVE_SENTIMENT".to_string());
        }
    }
    out
}

fn detect_not_good(input: &PatternInput<'_>, _emitted: &[String]) -> Vec<String> {
    if input.raw_lower.contains("not") && input.raw_lower.contains("good") {
        vec![
            "NOT_GOOD_PATTERN".to_string(),
            "NEGATIVE_SENTIMENT_STRONG".to_string(),
        ]
    } else {
        Vec::new()
    }
}

fn detect_negation_intensifier(input: &PatternInput<'_>, _emitted: &[String]) -> Vec<String> {
    let negated = input.raw_lower.contains("not") || input.raw_lower.contains("no");
    if negated && input.raw_lower.contains("at all") {
        vec![
            "NEGATION_INTENSIFIER".to_string(),
            "VERY_NEGATIVE".to_string(),
        ]
    } else {
        Vec::new()
    }
}

fn detect_negated_adjacency(input: &PatternInput<'_>, _emitted: &[String]) -> Vec<String> {
    let tokens = input.tokens;
    let mut out = Vec::new();

    for i in 0..tokens.len().saturating_sub(1) {
        let current = tokens[i].as_str();
        let next = tokens[i + 1].as_str();
        if !negation::is_negation_word(current) {
            continue;
        }

        out.push(format!("NEG_{next}"));

        // "feeling" normally stems to "feel" upstream; both forms are
        // checked so the rule does not depend on the stemmer's choices.
        if next == "feel" || next == "feeling" {
            out.push("NOT_FEELING_PATTERN".to_string());
            let end = (i + 2 + FEELING_LOOKAHEAD).min(tokens.len());
            for target in &tokens[i + 2..end] {
                if FEELING_TARGETS.contains(&target.as_str()) {
                    out.push(format!("NOT_FEELING_{}", target.to_uppercase()));
                }
            }
        }

        if POSITIVE_WORDS.contains(&next) {
            out.push("DIRECT_POSITIVE_NEGATION".to_string());
            out.push(format!("ANTI_{}", next.to_uppercase()));
        }
    }

    out
}

/// When any strong-negation feature fired, append two override features so
/// the classifiers can down-weight co-occurring positive unigrams.
fn detect_strong_context(_input: &PatternInput<'_>, emitted: &[String]) -> Vec<String> {
    let strong = emitted.iter().any(|f| {
        f.contains("EXPLICIT_NEGATIVE")
            || f.contains("NOT_GOOD_PATTERN")
            || f.contains("NEGATION_INTENSIFIER")
            || f.contains("NOT_FEELING_GOOD")
    });

    if strong {
        vec![
            "OVERRIDE_POSITIVE".to_string(),
            "STRONG_NEGATIVE_CONTEXT".to_string(),
        ]
    } else {
        Vec::new()
    }
}

/// Contiguous n-grams, underscore-joined.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.join("_")).collect()
}

/// Extract the full ordered feature sequence for a document. Duplicates
/// are kept; frequency matters to TF-IDF downstream.
pub fn extract_features(text: &str) -> Vec<String> {
    let tokens = tokenize(text);

    let mut features = tokens.clone();
    features.extend(ngrams(&tokens, 2));
    features.extend(ngrams(&tokens, 3));

    let raw_lower = text.to_lowercase();
    let input = PatternInput {
        raw_lower: &raw_lower,
        tokens: &tokens,
    };

    let mut synthetic = Vec::new();
    for rule in PATTERN_RULES {
        let emitted = rule.detect(&input, &synthetic);
        synthetic.extend(emitted);
    }
    features.extend(synthetic);

    features
}

/// Whether a feature counts as negation signal for vocabulary-capping
/// purposes. These outrank ordinary features when the vocabulary is full.
pub fn is_negation_feature(feature: &str) -> bool {
    feature.starts_with("NOT_")
        || feature.starts_with("NEG_")
        || feature.starts_with("NEGATIVE_")
        || feature.contains("NEGATION_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(raw_lower: &'a str, tokens: &'a [String]) -> PatternInput<'a> {
        PatternInput { raw_lower, tokens }
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn ngrams_join_with_underscores() {
        let tokens = toks(&["not", "NOT_feel", "NOT_good"]);
        assert_eq!(ngrams(&tokens, 2), vec!["not_NOT_feel", "NOT_feel_NOT_good"]);
        assert_eq!(ngrams(&tokens, 3), vec!["not_NOT_feel_NOT_good"]);
        assert!(ngrams(&tokens, 4).is_empty());
    }

    #[test]
    fn explicit_phrase_rule_emits_specific_and_shared_feature() {
        let tokens = Vec::new();
        let out = detect_explicit_phrases(&input("i am not feeling good today", &tokens), &[]);
        assert!(out.contains(&"PHRASE_not_feeling_good".to_string()));
        // "not good" is not a contiguous substring here, but the inner
        // "not feeling good" hit carries the shared marker.
        assert!(out.contains(&"EXPLICIT_NEGATIVE_SENTIMENT".to_string()));
    }

    #[test]
    fn apostrophe_phrases_match_raw_text() {
        let tokens = Vec::new();
        let out = detect_explicit_phrases(&input("i don't feel good", &tokens), &[]);
        assert!(out.contains(&"PHRASE_dont_feel_good".to_string()));
    }

    #[test]
    fn not_good_rule_matches_disjoint_substrings() {
        let tokens = Vec::new();
        let out = detect_not_good(&input("not everything is good", &tokens), &[]);
        assert_eq!(out, vec!["NOT_GOOD_PATTERN", "NEGATIVE_SENTIMENT_STRONG"]);

        assert!(detect_not_good(&input("all good here", &tokens), &[]).is_empty());
    }

    #[test]
    fn intensifier_rule_needs_both_parts() {
        let tokens = Vec::new();
        let out = detect_negation_intensifier(&input("not happy at all", &tokens), &[]);
        assert_eq!(out, vec!["NEGATION_INTENSIFIER", "VERY_NEGATIVE"]);

        assert!(detect_negation_intensifier(&input("happy at all times", &tokens), &[]).is_empty());
        assert!(detect_negation_intensifier(&input("not happy", &tokens), &[]).is_empty());
    }

    #[test]
    fn adjacency_rule_emits_neg_and_feeling_features() {
        let tokens = toks(&["not", "feel", "good", "today"]);
        let out = detect_negated_adjacency(&input("", &tokens), &[]);
        assert!(out.contains(&"NEG_feel".to_string()));
        assert!(out.contains(&"NOT_FEELING_PATTERN".to_string()));
        assert!(out.contains(&"NOT_FEELING_GOOD".to_string()));
    }

    #[test]
    fn adjacency_rule_flags_direct_positive_negation() {
        let tokens = toks(&["not", "happy"]);
        let out = detect_negated_adjacency(&input("", &tokens), &[]);
        assert!(out.contains(&"NEG_happy".to_string()));
        assert!(out.contains(&"DIRECT_POSITIVE_NEGATION".to_string()));
        assert!(out.contains(&"ANTI_HAPPY".to_string()));
    }

    #[test]
    fn feeling_lookahead_is_bounded() {
        let tokens = toks(&["not", "feel", "x", "y", "z", "good"]);
        let out = detect_negated_adjacency(&input("", &tokens), &[]);
        // "good" sits four tokens past "feel", outside the window.
        assert!(!out.contains(&"NOT_FEELING_GOOD".to_string()));
    }

    #[test]
    fn strong_context_rule_reads_earlier_output() {
        let tokens = Vec::new();
        let emitted = vec!["NEGATION_INTENSIFIER".to_string()];
        let out = detect_strong_context(&input("", &tokens), &emitted);
        assert_eq!(out, vec!["OVERRIDE_POSITIVE", "STRONG_NEGATIVE_CONTEXT"]);

        assert!(detect_strong_context(&input("", &tokens), &[]).is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "I'm not feeling good at all, but work was fine.";
        assert_eq!(extract_features(text), extract_features(text));
    }

    #[test]
    fn end_to_end_negative_text_carries_pattern_markers() {
        let features = extract_features("I am not feeling good at all");
        assert!(features.iter().any(|f| f.contains("NOT_FEELING")));
        assert!(features.iter().any(|f| f.contains("NEGATION_INTENSIFIER")));
        assert!(features.contains(&"STRONG_NEGATIVE_CONTEXT".to_string()));
    }

    #[test]
    fn negation_feature_predicate() {
        assert!(is_negation_feature("NOT_good"));
        assert!(is_negation_feature("NEG_happy"));
        assert!(is_negation_feature("NEGATIVE_SENTIMENT_STRONG"));
        assert!(is_negation_feature("NEGATION_INTENSIFIER"));
        assert!(!is_negation_feature("happy"));
        assert!(!is_negation_feature("ANTI_HAPPY"));
    }
}

//! Negation scope tagging
//!
//! A small state machine walks the token stream and prefixes every token
//! within four words of a negation word with [`NEGATION_MARKER`], until an
//! ender word closes the scope. The ender list is the shipped heuristic,
//! kept verbatim: it includes ordinary prepositions ("in", "of") that can
//! terminate a scope early. The serialized vocabulary depends on this
//! behavior, so it stays.

/// Prefix applied to tokens inside a negation scope.
pub const NEGATION_MARKER: &str = "NOT_";

/// Scope length in tokens after a negation word.
const MAX_SCOPE: usize = 4;

/// Words that open a negation scope. Contraction forms are already gone by
/// the time this runs: normalization rewrote `n't` to " not".
const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nowhere", "cannot", "cant",
    "barely", "hardly", "rarely", "seldom", "scarcely", "without",
];

/// Words that close a negation scope.
const NEGATION_ENDERS: &[&str] = &[
    "but",
    "however",
    "nevertheless",
    "nonetheless",
    "although",
    "though",
    "yet",
    "except",
    "besides",
    "despite",
    "in",
    "spite",
    "of",
];

pub fn is_negation_word(token: &str) -> bool {
    NEGATION_WORDS.contains(&token)
}

pub fn is_negation_ender(token: &str) -> bool {
    NEGATION_ENDERS.contains(&token)
}

/// Whether a token carries the negation marker.
pub fn is_marked(token: &str) -> bool {
    token.starts_with(NEGATION_MARKER)
}

/// The token without its negation marker.
pub fn strip_marker(token: &str) -> &str {
    token.strip_prefix(NEGATION_MARKER).unwrap_or(token)
}

/// Rewrite tokens inside negation scopes with the marker prefix. Output
/// length equals input length; only token contents change.
pub fn apply_negation_scope(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut in_negation = false;
    let mut distance = 0usize;

    for token in tokens {
        if is_negation_word(token) {
            in_negation = true;
            distance = 0;
            out.push(token.clone());
        } else if is_negation_ender(token) {
            in_negation = false;
            distance = 0;
            out.push(token.clone());
        } else if in_negation && distance < MAX_SCOPE {
            out.push(format!("{NEGATION_MARKER}{token}"));
            distance += 1;
        } else {
            // Scope expired after MAX_SCOPE words.
            in_negation = false;
            out.push(token.clone());
        }
    }

    out
}

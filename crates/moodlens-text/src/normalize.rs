//! Text normalization
//!
//! Order matters here: the specific contraction rewrites run before the
//! generic `n't` rule (several specific forms also end in `n't`), and both
//! run before punctuation stripping, because the apostrophes are what the
//! contraction rules match on.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pronoun contractions expanded before the generic `n't` rule.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'm", "i am"),
    ("you're", "you are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("we're", "we are"),
    ("they're", "they are"),
];

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize raw journal text: lowercase, expand contractions, strip
/// punctuation and digits, collapse whitespace. Empty input yields empty
/// output. Idempotent on its own output.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut t = text.to_lowercase();
    for (from, to) in CONTRACTIONS {
        t = t.replace(from, to);
    }
    // don't -> do not, isn't -> is not; also can't -> ca not, which the
    // downstream negation-word list covers via "cant"/"cannot".
    t = t.replace("n't", " not");

    let t = NON_WORD.replace_all(&t, " ");
    let t = DIGIT_RUN.replace_all(&t, " ");
    let t = WHITESPACE_RUN.replace_all(&t, " ");
    t.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!! 123"), "");
    }

    #[test]
    fn expands_pronoun_contractions() {
        assert_eq!(normalize("I'm tired"), "i am tired");
        assert_eq!(normalize("They're okay, it's fine"), "they are okay it is fine");
    }

    #[test]
    fn rewrites_generic_nt_suffix() {
        assert_eq!(normalize("I don't like this"), "i do not like this");
        assert_eq!(normalize("It isn't working"), "it is not working");
    }

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(normalize("woke up at 7:30... again?!"), "woke up at again");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("so   much \t space\n here"), "so much space here");
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let texts = [
            "I'm not feeling good at all today!!",
            "She's upset... we're not talking.",
            "plain words only",
        ];
        for text in texts {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }
}

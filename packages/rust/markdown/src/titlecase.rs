//! Display-name normalization.
//!
//! Names pulled from asset metadata come in every casing imaginable
//! (`max-audio-classifier`, `AI Fairness 360`, `tensorflow model`). They are
//! naively title-cased, then corrected against a fixed rule table of brand
//! spellings, acronyms, and prepositions.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Brand spellings that naive title-casing gets wrong.
const LITERAL_CORRECTIONS: &[(&str, &str)] = &[
    ("Codenet", "CodeNet"),
    ("Kfp Tekton", "KFP-Tekton"),
    ("Publaynet", "PubLayNet"),
    ("Pubtabnet", "PubTabNet"),
    ("Tensorflow", "TensorFlow"),
];

/// Rendered fully uppercase.
const ACRONYMS: &[&str] = &[
    "AI", "AIF360", "ART", "IBM", "JFK", "KFP", "MLM", "NOAA", "WML", "ML",
];

/// Rendered fully lowercase.
const PREPOSITIONS: &[&str] = &["on", "in", "of", "and", "or", "with"];

/// Title-cased word or phrase -> corrected form.
///
/// Sources are merged in order, so an acronym or preposition overrides a
/// literal correction with the same key.
static RULES: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut rules: BTreeMap<String, String> = LITERAL_CORRECTIONS
        .iter()
        .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
        .collect();

    rules.extend(
        ACRONYMS
            .iter()
            .map(|word| (title_case(word), word.to_uppercase())),
    );
    rules.extend(
        PREPOSITIONS
            .iter()
            .map(|word| (title_case(word), word.to_lowercase())),
    );

    rules
});

/// Uppercase the first character of every whitespace-delimited token and
/// lowercase the rest. Whitespace is preserved as-is.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_token_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_token_start = true;
        } else if at_token_start {
            out.extend(c.to_uppercase());
            at_token_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Normalize an asset name for display.
///
/// Rules are applied in descending key order so that a longer acronym is
/// settled before a shorter one it starts with (`Mlm` before `Ml`), and only
/// to whole space-delimited tokens so `Ai` never matches inside `Airport`.
pub fn normalize(raw: &str) -> String {
    let titled = title_case(raw);

    if !RULES.keys().any(|key| titled.contains(key.as_str())) {
        return titled;
    }

    let mut tokens: Vec<String> = titled.split(' ').map(str::to_string).collect();

    for (key, replacement) in RULES.iter().rev() {
        replace_whole_tokens(&mut tokens, key, replacement);
    }

    tokens.join(" ")
}

/// Replace every token equal to `key`. A key containing a space can never
/// equal a single token, so multi-word keys never fire.
fn replace_whole_tokens(tokens: &mut [String], key: &str, replacement: &str) {
    for token in tokens.iter_mut().filter(|token| token.as_str() == key) {
        *token = replacement.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_lowercases_tails() {
        assert_eq!(title_case("max AUDIO classifier"), "Max Audio Classifier");
        assert_eq!(title_case("aif360"), "Aif360");
        assert_eq!(title_case("  two  spaces "), "  Two  Spaces ");
        assert_eq!(title_case("kfp-tekton"), "Kfp-tekton");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn no_rule_match_is_plain_title_case() {
        for raw in ["max audio classifier", "Flower Classification", "x"] {
            assert_eq!(normalize(raw), title_case(raw));
        }
    }

    #[test]
    fn literal_corrections() {
        assert_eq!(normalize("tensorflow model"), "TensorFlow Model");
        assert_eq!(normalize("project codenet"), "Project CodeNet");
        assert_eq!(normalize("PUBLAYNET dataset"), "PubLayNet Dataset");
    }

    #[test]
    fn prepositions_are_lowercased() {
        assert_eq!(
            normalize("detect and classify images"),
            "Detect and Classify Images"
        );
        assert_eq!(
            normalize("training with data in ibm cloud"),
            "Training with Data in IBM Cloud"
        );
    }

    #[test]
    fn leading_preposition_is_lowercased_too() {
        assert_eq!(normalize("on device ml"), "on Device ML");
    }

    #[test]
    fn overlapping_acronyms_resolve_independently() {
        assert_eq!(normalize("ai art toolkit"), "AI ART Toolkit");
        assert_eq!(normalize("aif360 bias detector"), "AIF360 Bias Detector");
        assert_eq!(normalize("mlm classifier"), "MLM Classifier");
        assert_eq!(normalize("ml model with mlm"), "ML Model with MLM");
    }

    #[test]
    fn only_whole_tokens_are_replaced() {
        assert_eq!(normalize("ai airport"), "AI Airport");
        assert_eq!(normalize("orchestration"), "Orchestration");
        assert_eq!(normalize("artwork"), "Artwork");
    }

    #[test]
    fn multi_word_keys_never_match_single_tokens() {
        assert_eq!(normalize("kfp tekton compiler"), "KFP Tekton Compiler");
        assert_eq!(normalize("kfp compiler"), "KFP Compiler");
        assert_eq!(normalize("kfp  tekton"), "KFP  Tekton");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["ai art toolkit", "noaa weather data", "Watson ML on WML"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input: {raw}");
        }
    }

    #[test]
    fn rule_table_contents() {
        assert_eq!(RULES.get("Mlm").map(String::as_str), Some("MLM"));
        assert_eq!(RULES.get("With").map(String::as_str), Some("with"));
        assert_eq!(RULES.get("Pubtabnet").map(String::as_str), Some("PubTabNet"));
        assert_eq!(
            RULES.len(),
            LITERAL_CORRECTIONS.len() + ACRONYMS.len() + PREPOSITIONS.len()
        );
    }
}

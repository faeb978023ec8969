use once_cell::sync::Lazy;
use regex::Regex;

static HANGUL_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[가-힣]+").expect("valid Hangul syllable regex"));

/// Keep only runs of precomposed Hangul syllables, joined by single spaces.
///
/// Digits, units, punctuation and non-Korean script are dropped entirely, so
/// an ingredient written in Latin letters does not survive this step.
pub fn extract_korean(text: &str) -> String {
    HANGUL_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

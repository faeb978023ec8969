use super::morphology::{classify, WordKind, MIN_PART_CHARS};
use super::{NounAnalyzer, NounSet};
use crate::error::Result;
use crate::tables::NounLexicon;
use std::sync::Arc;

/// Head-first analyzer: strips postpositions and reads words from the end.
///
/// Korean compounds put the head noun last, so inside a longer word the
/// longest entry ending the word is taken first and the scan continues
/// leftwards. Unknown stems are accepted unless they end like a conjugated
/// verb or adjective.
pub struct SuffixAnalyzer {
    lexicon: Arc<NounLexicon>,
}

impl SuffixAnalyzer {
    pub fn new(lexicon: Arc<NounLexicon>) -> Self {
        Self { lexicon }
    }
}

impl NounAnalyzer for SuffixAnalyzer {
    fn name(&self) -> &str {
        "suffix"
    }

    fn nouns(&self, text: &str) -> Result<NounSet> {
        let mut nouns = NounSet::new();

        for word in text.split_whitespace() {
            match classify(word, &self.lexicon) {
                WordKind::Known(stem) | WordKind::Unknown(stem) => {
                    nouns.insert(stem.to_string());
                }
                WordKind::Mixed(chars) => {
                    let mut end = chars.len();
                    while end > 0 {
                        match self.lexicon.longest_suffix(&chars[..end], MIN_PART_CHARS) {
                            Some(len) => {
                                nouns.insert(chars[end - len..end].iter().collect());
                                end -= len;
                            }
                            None => end -= 1,
                        }
                    }
                }
                WordKind::Rejected => {}
            }
        }

        Ok(nouns)
    }
}

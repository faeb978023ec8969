use super::morphology::{classify, WordKind, MIN_PART_CHARS};
use super::{NounAnalyzer, NounSet};
use crate::error::Result;
use crate::tables::NounLexicon;
use std::sync::Arc;

/// Forward longest-match segmentation against the noun lexicon.
///
/// Inside a longer word every lexicon entry found scanning left to right is
/// reported, so compounds come out as their known parts. Syllables that start
/// no entry are skipped.
pub struct DictionaryAnalyzer {
    lexicon: Arc<NounLexicon>,
}

impl DictionaryAnalyzer {
    pub fn new(lexicon: Arc<NounLexicon>) -> Self {
        Self { lexicon }
    }
}

impl NounAnalyzer for DictionaryAnalyzer {
    fn name(&self) -> &str {
        "dictionary"
    }

    fn nouns(&self, text: &str) -> Result<NounSet> {
        let mut nouns = NounSet::new();

        for word in text.split_whitespace() {
            let chars = match classify(word, &self.lexicon) {
                WordKind::Known(stem) | WordKind::Unknown(stem) => {
                    nouns.insert(stem.to_string());
                    continue;
                }
                WordKind::Mixed(chars) => chars,
                WordKind::Rejected => continue,
            };

            let mut i = 0;
            while i < chars.len() {
                match self.lexicon.longest_prefix(&chars[i..], MIN_PART_CHARS) {
                    Some(len) => {
                        nouns.insert(chars[i..i + len].iter().collect());
                        i += len;
                    }
                    None => i += 1,
                }
            }
        }

        Ok(nouns)
    }
}

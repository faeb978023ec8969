use super::morphology::{classify, cover, WordKind};
use super::{NounAnalyzer, NounSet};
use crate::error::Result;
use crate::tables::NounLexicon;
use std::sync::Arc;

/// Reports known nouns together with the best lexicon cover of compounds.
///
/// A stem in the lexicon is reported as-is. A longer stem is tiled with
/// lexicon entries leaving as few syllables uncovered as possible, using as
/// few entries as possible, so `새우두부` yields `새우` and `두부` while
/// `감자전분` stays whole.
pub struct CompoundAnalyzer {
    lexicon: Arc<NounLexicon>,
}

impl CompoundAnalyzer {
    pub fn new(lexicon: Arc<NounLexicon>) -> Self {
        Self { lexicon }
    }
}

impl NounAnalyzer for CompoundAnalyzer {
    fn name(&self) -> &str {
        "compound"
    }

    fn nouns(&self, text: &str) -> Result<NounSet> {
        let mut nouns = NounSet::new();

        for word in text.split_whitespace() {
            match classify(word, &self.lexicon) {
                WordKind::Known(stem) | WordKind::Unknown(stem) => {
                    nouns.insert(stem.to_string());
                }
                WordKind::Mixed(chars) => nouns.extend(cover(&chars, &self.lexicon)),
                WordKind::Rejected => {}
            }
        }

        Ok(nouns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> CompoundAnalyzer {
        let lexicon = NounLexicon::from_words([
            "양파", "당근", "마늘", "개", "큰술", "새우", "두부", "감자", "전분", "감자전분",
        ]);
        CompoundAnalyzer::new(Arc::new(lexicon))
    }

    fn set(words: &[&str]) -> NounSet {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compound_nouns() {
        let nouns = analyzer().nouns("양파 개 당근 반개 다진 마늘 큰술").unwrap();
        assert_eq!(nouns, set(&["양파", "개", "당근", "마늘", "큰술"]));
    }

    #[test]
    fn test_compound_decomposition() {
        let nouns = analyzer().nouns("새우두부를 새우두부찜").unwrap();
        assert_eq!(nouns, set(&["새우", "두부"]));
        assert_eq!(analyzer().nouns("감자전분").unwrap(), set(&["감자전분"]));
    }

    #[test]
    fn test_compound_with_unknown_prefix() {
        assert_eq!(analyzer().nouns("다진마늘").unwrap(), set(&["마늘"]));
        assert_eq!(analyzer().nouns("햇감자전분").unwrap(), set(&["감자전분"]));
    }

    #[test]
    fn test_compound_keeps_unknown_nouns() {
        assert_eq!(analyzer().nouns("청국장 연근").unwrap(), set(&["청국장", "연근"]));
    }
}

use crate::analyzers::{AnalyzerFactory, NounAnalyzer, NounSet};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::model::IngredientSet;
use crate::normalize::extract_korean;
use crate::tables::{NounLexicon, StopwordSet, SynonymMap};
use log::{debug, trace};
use std::sync::Arc;

/// Turns a raw ingredient description into a set of ingredient names.
///
/// The text is reduced to its Korean words, every analyzer is run over it and
/// only nouns that all analyzers agree on are kept. Stopwords are removed and
/// the survivors are mapped once through the synonym table.
pub struct IngredientExtractor {
    analyzers: Vec<Box<dyn NounAnalyzer>>,
    stopwords: StopwordSet,
    synonyms: SynonymMap,
}

impl IngredientExtractor {
    pub fn new(
        analyzers: Vec<Box<dyn NounAnalyzer>>,
        stopwords: StopwordSet,
        synonyms: SynonymMap,
    ) -> Result<Self> {
        if analyzers.is_empty() {
            return Err(PipelineError::AnalyzerError {
                analyzer: "-".to_string(),
                message: "at least one analyzer is required".to_string(),
            });
        }

        Ok(Self {
            analyzers,
            stopwords,
            synonyms,
        })
    }

    /// Build an extractor from configuration, loading table overrides if set
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let tables = &config.tables;

        let stopwords = match &tables.stopwords_path {
            Some(path) => StopwordSet::from_path(path)?,
            None => StopwordSet::embedded()?,
        };
        let synonyms = match &tables.synonyms_path {
            Some(path) => SynonymMap::from_path(path)?,
            None => SynonymMap::embedded()?,
        };
        let lexicon = match &tables.lexicon_path {
            Some(path) => NounLexicon::from_path(path)?,
            None => NounLexicon::embedded()?,
        };
        debug!(
            "Loaded {} stopwords, {} synonyms, {} lexicon entries",
            stopwords.len(),
            synonyms.len(),
            lexicon.len()
        );

        let analyzers = AnalyzerFactory::from_config(&config.analyzers, Arc::new(lexicon))?;
        Self::new(analyzers, stopwords, synonyms)
    }

    pub fn analyzer_names(&self) -> Vec<&str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Nouns reported by every analyzer for already-normalized `text`
    pub fn common_nouns(&self, text: &str) -> Result<NounSet> {
        let mut common: Option<NounSet> = None;

        for analyzer in &self.analyzers {
            let nouns = analyzer.nouns(text)?;
            trace!("{}: {:?}", analyzer.name(), nouns);
            common = Some(match common {
                None => nouns,
                Some(mut acc) => {
                    acc.retain(|noun| nouns.contains(noun));
                    acc
                }
            });
        }

        Ok(common.unwrap_or_default())
    }

    /// Extract the ingredient set of one recipe's raw description
    ///
    /// Text without Korean syllables yields an empty set, not an error.
    pub fn extract(&self, raw: &str) -> Result<IngredientSet> {
        let korean = extract_korean(raw);
        if korean.is_empty() {
            debug!("No Korean text in ingredient description");
            return Ok(IngredientSet::new());
        }

        let common = self.common_nouns(&korean)?;

        // Mapped values are not filtered or mapped again.
        let ingredients = common
            .iter()
            .filter(|noun| !noun.is_empty() && !self.stopwords.contains(noun.as_str()))
            .map(|noun| self.synonyms.canonical(noun.as_str()).to_string())
            .collect();

        Ok(ingredients)
    }
}

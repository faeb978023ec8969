use super::{CompoundAnalyzer, DictionaryAnalyzer, NounAnalyzer, SuffixAnalyzer};
use crate::config::AnalyzersConfig;
use crate::error::{PipelineError, Result};
use crate::tables::NounLexicon;
use std::sync::Arc;

pub struct AnalyzerFactory;

impl AnalyzerFactory {
    /// Create an analyzer instance by name
    pub fn create(name: &str, lexicon: Arc<NounLexicon>) -> Result<Box<dyn NounAnalyzer>> {
        if lexicon.is_empty() {
            return Err(PipelineError::AnalyzerError {
                analyzer: name.to_string(),
                message: "noun lexicon is empty".to_string(),
            });
        }

        match name {
            "dictionary" => Ok(Box::new(DictionaryAnalyzer::new(lexicon))),
            "suffix" => Ok(Box::new(SuffixAnalyzer::new(lexicon))),
            "compound" => Ok(Box::new(CompoundAnalyzer::new(lexicon))),
            _ => Err(PipelineError::AnalyzerError {
                analyzer: name.to_string(),
                message: format!(
                    "unknown analyzer, expected one of: {}",
                    Self::available_analyzers().join(", ")
                ),
            }),
        }
    }

    /// Create every analyzer enabled in configuration, in order
    pub fn from_config(
        config: &AnalyzersConfig,
        lexicon: Arc<NounLexicon>,
    ) -> Result<Vec<Box<dyn NounAnalyzer>>> {
        if config.enabled.is_empty() {
            return Err(PipelineError::AnalyzerError {
                analyzer: "-".to_string(),
                message: "no analyzers enabled".to_string(),
            });
        }

        config
            .enabled
            .iter()
            .map(|name| Self::create(name, Arc::clone(&lexicon)))
            .collect()
    }

    /// List all available analyzer names
    pub fn available_analyzers() -> Vec<&'static str> {
        vec!["dictionary", "suffix", "compound"]
    }
}

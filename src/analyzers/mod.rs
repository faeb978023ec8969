mod compound;
mod dictionary;
mod factory;
mod morphology;
mod suffix;

pub use compound::CompoundAnalyzer;
pub use dictionary::DictionaryAnalyzer;
pub use factory::AnalyzerFactory;
pub use suffix::SuffixAnalyzer;

use crate::error::Result;
use std::collections::BTreeSet;

/// Nouns reported by one analyzer for one piece of text
pub type NounSet = BTreeSet<String>;

/// Unified trait for Korean morphological analyzers
///
/// Implementations must be deterministic: the same text always yields the
/// same set. A returned error aborts the whole batch.
pub trait NounAnalyzer: Send + Sync {
    /// Get the analyzer name (e.g., "dictionary", "suffix")
    fn name(&self) -> &str;

    /// Extract the set of nouns found in `text`
    fn nouns(&self, text: &str) -> Result<NounSet>;
}

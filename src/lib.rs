//! Ingredient extraction for Korean recipe corpora.
//!
//! Raw ingredient descriptions are reduced to their Korean words, run through
//! several noun analyzers whose answers are intersected, filtered against a
//! stopword table and normalized through a synonym table. The resulting
//! tables can be translated and uploaded to a document store.

pub mod analyzers;
pub mod batch;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extractor;
pub mod model;
pub mod normalize;
pub mod pipelines;
pub mod store;
pub mod table;
pub mod tables;
pub mod translate;

pub use batch::UniqueIngredients;
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use extractor::IngredientExtractor;
pub use model::{
    IngredientSet, QuestionSection, RecipeIngredients, RecipeRecord, TranslatedIngredient,
};

/// Extract the ingredients of one description with the default tables and analyzers
///
/// Builds a fresh extractor on every call; use [`IngredientExtractor`] directly
/// when processing many descriptions.
///
/// # Example
/// ```
/// let ingredients = recipe_ingredients::extract_ingredients("양파 1개, 당근 반개, 다진 마늘 1큰술")?;
/// assert_eq!(ingredients.len(), 3);
/// assert!(ingredients.contains("마늘"));
/// # Ok::<(), recipe_ingredients::PipelineError>(())
/// ```
pub fn extract_ingredients(text: &str) -> Result<IngredientSet> {
    IngredientExtractor::from_config(&PipelineConfig::default())?.extract(text)
}

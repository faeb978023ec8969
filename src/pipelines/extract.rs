use crate::batch::{self, UniqueIngredients};
use crate::config::PipelineConfig;
use crate::corpus;
use crate::error::Result;
use crate::extractor::IngredientExtractor;
use crate::model::RecipeIngredients;
use crate::table;

/// Everything produced by one extraction run
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutput {
    pub recipes: Vec<RecipeIngredients>,
    pub unique: UniqueIngredients,
}

/// Run the extraction batch over the configured corpus
///
/// This pipeline:
/// 1. Loads the corpus and the static tables
/// 2. Extracts each recipe's ingredients, accumulating the unique set
/// 3. Writes the per-recipe table and the unique-ingredient table
pub fn process(config: &PipelineConfig) -> Result<ExtractionOutput> {
    let records = corpus::load_corpus(&config.corpus)?;
    let extractor = IngredientExtractor::from_config(config)?;

    let mut unique = UniqueIngredients::new();
    let recipes = batch::run(&records, &extractor, &mut unique)?;

    let output = &config.output;
    table::write_recipe_table(&output.recipes_path, &recipes, output.write_bom)?;
    table::write_unique_table(&output.unique_path, unique.iter(), output.write_bom)?;

    Ok(ExtractionOutput { recipes, unique })
}

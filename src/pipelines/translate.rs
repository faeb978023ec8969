use crate::config::PipelineConfig;
use crate::error::Result;
use crate::model::TranslatedIngredient;
use crate::table;
use crate::translate::{translate_all, GoogleTranslator, Translator};
use log::info;
use std::time::Duration;

/// Translate the unique-ingredient table with the configured service
pub async fn process(config: &PipelineConfig) -> Result<Vec<TranslatedIngredient>> {
    let translator = GoogleTranslator::new(&config.translation)?;
    process_with(&translator, config).await
}

/// Translate the unique-ingredient table with any translator
///
/// Reads `output.unique_path` and writes `output.translated_path`.
pub async fn process_with(
    translator: &dyn Translator,
    config: &PipelineConfig,
) -> Result<Vec<TranslatedIngredient>> {
    let ingredients = table::read_unique_table(&config.output.unique_path)?;
    info!(
        "Translating {} ingredients from {}",
        ingredients.len(),
        config.output.unique_path.display()
    );

    let delay = Duration::from_millis(config.translation.delay_ms);
    let translated = translate_all(translator, &ingredients, delay).await?;

    table::write_translated_table(
        &config.output.translated_path,
        &translated,
        config.output.write_bom,
    )?;
    Ok(translated)
}

mod google;

pub use google::GoogleTranslator;

use crate::error::Result;
use crate::model::TranslatedIngredient;
use async_trait::async_trait;
use log::{debug, info};
use std::time::Duration;
use tokio::time::sleep;

const PROGRESS_EVERY: usize = 100;

/// Unified trait for translation services
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get the translator name (e.g., "google")
    fn translator_name(&self) -> &str;

    /// Translate a single piece of text from the configured source language
    async fn translate(&self, text: &str) -> Result<String>;
}

/// Translate every ingredient in order, pausing `delay` between requests.
///
/// Requests are sent one at a time. The first failure aborts the run.
pub async fn translate_all(
    translator: &dyn Translator,
    ingredients: &[String],
    delay: Duration,
) -> Result<Vec<TranslatedIngredient>> {
    let mut translated = Vec::with_capacity(ingredients.len());

    for (index, ingredient) in ingredients.iter().enumerate() {
        let english = translator.translate(ingredient).await?;
        debug!("{} -> {}", ingredient, english);
        translated.push(TranslatedIngredient {
            korean: ingredient.clone(),
            english,
        });

        let done = index + 1;
        if done % PROGRESS_EVERY == 0 {
            info!("Translated {}/{} ingredients", done, ingredients.len());
        }
        if done < ingredients.len() && !delay.is_zero() {
            sleep(delay).await;
        }
    }

    info!(
        "Translated {} ingredients using {}",
        translated.len(),
        translator.translator_name()
    );
    Ok(translated)
}

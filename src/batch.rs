use crate::error::Result;
use crate::extractor::IngredientExtractor;
use crate::model::{IngredientSet, RecipeIngredients, RecipeRecord};
use log::{debug, info};

const PROGRESS_EVERY: usize = 100;

/// Corpus-wide set of distinct ingredient tokens.
///
/// Owned by the caller of [`run`] and filled as recipes are processed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniqueIngredients {
    tokens: IngredientSet,
}

impl UniqueIngredients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every whitespace-separated token of a recipe's joined result
    pub fn ingest(&mut self, joined: &str) {
        self.tokens
            .extend(joined.split_whitespace().map(str::to_string));
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        self.tokens.into_iter().collect()
    }
}

#[derive(Debug, Default)]
struct BatchStats {
    recipes: usize,
    /// Recipes for which nothing was extracted
    empty: usize,
}

/// Extract ingredients for every record, in order.
///
/// Returns one row per record and adds each row's tokens to `unique`. The
/// first analyzer error stops the batch and is returned as-is.
pub fn run(
    records: &[RecipeRecord],
    extractor: &IngredientExtractor,
    unique: &mut UniqueIngredients,
) -> Result<Vec<RecipeIngredients>> {
    let mut rows = Vec::with_capacity(records.len());
    let mut stats = BatchStats::default();

    for record in records {
        let ingredients = extractor.extract(&record.parts)?;
        debug!("{} -> {:?}", record.name, ingredients);

        let row = RecipeIngredients {
            name: record.name.clone(),
            ingredients,
        };
        unique.ingest(&row.joined());

        stats.recipes += 1;
        if row.ingredients.is_empty() {
            stats.empty += 1;
        }
        if stats.recipes % PROGRESS_EVERY == 0 {
            info!("Processed {}/{} recipes", stats.recipes, records.len());
        }

        rows.push(row);
    }

    info!(
        "Extracted ingredients for {} recipes ({} empty), {} unique ingredients",
        stats.recipes,
        stats.empty,
        unique.len()
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use serde_json::Map;

    fn record(name: &str, parts: &str) -> RecipeRecord {
        RecipeRecord {
            id: name.to_string(),
            name: name.to_string(),
            parts: parts.to_string(),
            raw: Map::new(),
        }
    }

    #[test]
    fn test_ingest_splits_on_whitespace() {
        let mut unique = UniqueIngredients::new();
        unique.ingest("양파 당근");
        unique.ingest("  당근\t마늘 ");
        unique.ingest("");
        assert_eq!(unique.into_sorted_vec(), vec!["당근", "마늘", "양파"]);
    }

    #[test]
    fn test_run_accumulates_union() {
        let extractor = IngredientExtractor::from_config(&PipelineConfig::default()).unwrap();
        let records = vec![
            record("볶음밥", "양파 1개, 당근 반개, 다진 마늘 1큰술"),
            record("감자조림", "감자 2개, 양파 1/2개, 간장 2큰술"),
            record("빈 레시피", "200g"),
        ];

        let mut unique = UniqueIngredients::new();
        let rows = run(&records, &extractor, &mut unique).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "볶음밥");
        assert_eq!(rows[0].joined(), "당근 마늘 양파");
        assert!(rows[2].ingredients.is_empty());

        for row in &rows {
            for token in &row.ingredients {
                assert!(unique.contains(token));
            }
        }
        for token in unique.iter() {
            assert!(rows.iter().any(|r| r.ingredients.contains(token)));
        }
        assert!(unique.contains("감자"));
        assert!(unique.contains("간장"));
    }

    #[test]
    fn test_run_empty_corpus() {
        let extractor = IngredientExtractor::from_config(&PipelineConfig::default()).unwrap();
        let mut unique = UniqueIngredients::new();
        let rows = run(&[], &extractor, &mut unique).unwrap();
        assert!(rows.is_empty());
        assert!(unique.is_empty());
    }
}

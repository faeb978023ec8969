//! CSV tables written and read by the batch commands

use crate::error::{PipelineError, Result};
use crate::model::{RecipeIngredients, TranslatedIngredient};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;

const BOM: &[u8] = b"\xEF\xBB\xBF";

const RECIPE_HEADER: &str = "레시피명";
const INGREDIENTS_HEADER: &str = "전처리된 식재료";
const INGREDIENT_HEADER: &str = "식재료";
const ENGLISH_HEADER: &str = "English";

#[derive(Debug, Serialize)]
struct RecipeRow<'a> {
    name: &'a str,
    ingredients: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct IngredientRow {
    #[serde(rename = "식재료")]
    ingredient: String,
}

/// Create a CSV file and write its header row, even if no records follow
fn create(path: &Path, headers: &[&str], write_bom: bool) -> Result<csv::Writer<File>> {
    let mut file = File::create(path)?;
    if write_bom {
        file.write_all(BOM)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(headers)?;
    Ok(writer)
}

/// Open a CSV file for reading, skipping a leading byte order mark
fn open(path: &Path) -> Result<csv::Reader<Cursor<Vec<u8>>>> {
    let mut content = std::fs::read(path)?;
    if content.starts_with(BOM) {
        content.drain(..BOM.len());
    }
    Ok(csv::Reader::from_reader(Cursor::new(content)))
}

/// Write one row per recipe: its name and its space-joined ingredients
pub fn write_recipe_table(path: &Path, rows: &[RecipeIngredients], write_bom: bool) -> Result<()> {
    let mut writer = create(path, &[RECIPE_HEADER, INGREDIENTS_HEADER], write_bom)?;
    for row in rows {
        writer.serialize(RecipeRow {
            name: &row.name,
            ingredients: row.joined(),
        })?;
    }
    writer.flush()?;
    info!("Wrote {} recipes to {}", rows.len(), path.display());
    Ok(())
}

/// Write one row per unique ingredient
pub fn write_unique_table<'a, I>(path: &Path, tokens: I, write_bom: bool) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut writer = create(path, &[INGREDIENT_HEADER], write_bom)?;
    let mut count = 0;
    for token in tokens {
        writer.serialize(IngredientRow {
            ingredient: token.to_string(),
        })?;
        count += 1;
    }
    writer.flush()?;
    info!("Wrote {} unique ingredients to {}", count, path.display());
    Ok(count)
}

pub fn read_unique_table(path: &Path) -> Result<Vec<String>> {
    let mut reader = open(path)?;
    reader
        .deserialize::<IngredientRow>()
        .map(|row| row.map(|r| r.ingredient).map_err(PipelineError::from))
        .collect()
}

pub fn write_translated_table(
    path: &Path,
    rows: &[TranslatedIngredient],
    write_bom: bool,
) -> Result<()> {
    let mut writer = create(path, &[INGREDIENT_HEADER, ENGLISH_HEADER], write_bom)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {} translations to {}", rows.len(), path.display());
    Ok(())
}

pub fn read_translated_table(path: &Path) -> Result<Vec<TranslatedIngredient>> {
    let mut reader = open(path)?;
    reader
        .deserialize::<TranslatedIngredient>()
        .map(|row| row.map_err(PipelineError::from))
        .collect()
}

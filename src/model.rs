use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Normalized ingredient tokens of one recipe, iterated in sorted order
pub type IngredientSet = BTreeSet<String>;

/// One recipe as loaded from the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRecord {
    /// Sequence id, used as the document id when uploading
    pub id: String,
    pub name: String,
    /// Free-text ingredient description
    pub parts: String,
    /// The full source object, kept for uploading unchanged
    pub raw: Map<String, Value>,
}

/// Extraction result for one recipe
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeIngredients {
    pub name: String,
    pub ingredients: IngredientSet,
}

impl RecipeIngredients {
    /// Tokens joined by single spaces, as written to the per-recipe table
    pub fn joined(&self) -> String {
        self.ingredients
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A unique ingredient with its English translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedIngredient {
    #[serde(rename = "식재료")]
    pub korean: String,
    #[serde(rename = "English")]
    pub english: String,
}

/// One section of the survey questions file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSection {
    pub category: String,
    /// Questions as written in the file, uploaded unchanged
    pub questions: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined() {
        let recipe = RecipeIngredients {
            name: "새우 두부 계란찜".to_string(),
            ingredients: ["두부", "새우", "계란"].iter().map(|s| s.to_string()).collect(),
        };
        assert_eq!(recipe.joined(), "계란 두부 새우");
        assert_eq!(RecipeIngredients::default().joined(), "");
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main pipeline configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Where the recipe corpus lives and how its records are shaped
    pub corpus: CorpusConfig,
    /// Output table locations
    pub output: OutputConfig,
    /// Optional overrides for the embedded stopword, synonym and lexicon tables
    pub tables: TablesConfig,
    /// Analyzers whose noun sets are intersected, by name
    pub analyzers: AnalyzersConfig,
    /// Translation service settings
    pub translation: TranslationConfig,
    /// Document store settings
    pub store: StoreConfig,
}

/// Configuration for the recipe corpus file
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path of the JSON corpus
    pub path: PathBuf,
    /// JSON pointer to the array of recipe records
    pub records_pointer: String,
    /// Field holding the recipe sequence id
    pub id_field: String,
    /// Field holding the recipe name
    pub name_field: String,
    /// Field holding the free-text ingredient description
    pub parts_field: String,
    /// JSON array of survey question sections, uploaded with `upload questions`
    pub questions_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("recipes.json"),
            records_pointer: "/COOKRCP01/row".to_string(),
            id_field: "RCP_SEQ".to_string(),
            name_field: "RCP_NM".to_string(),
            parts_field: "RCP_PARTS_DTLS".to_string(),
            questions_path: PathBuf::from("questions.json"),
        }
    }
}

/// Configuration for output tables
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// Per-recipe table (recipe name, normalized ingredients)
    pub recipes_path: PathBuf,
    /// Globally unique ingredient table
    pub unique_path: PathBuf,
    /// Unique ingredients with their English translation
    pub translated_path: PathBuf,
    /// Prefix written tables with a UTF-8 byte order mark
    pub write_bom: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            recipes_path: PathBuf::from("recipes_ingredients.csv"),
            unique_path: PathBuf::from("ingredients.csv"),
            translated_path: PathBuf::from("mapped_ingredients_translated.csv"),
            write_bom: true,
        }
    }
}

/// File overrides for the static tables; embedded tables are used when unset
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TablesConfig {
    pub stopwords_path: Option<PathBuf>,
    pub synonyms_path: Option<PathBuf>,
    pub lexicon_path: Option<PathBuf>,
}

/// Configuration for the noun analyzers
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnalyzersConfig {
    /// Analyzer names, all of which must agree on a noun
    pub enabled: Vec<String>,
}

impl Default for AnalyzersConfig {
    fn default() -> Self {
        Self {
            enabled: default_analyzers(),
        }
    }
}

/// Configuration for the translation service
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TranslationConfig {
    /// API key (can also be set via GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    pub base_url: Option<String>,
    pub source_lang: String,
    pub target_lang: String,
    /// Pause after each request in milliseconds
    pub delay_ms: u64,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            source_lang: "ko".to_string(),
            target_lang: "en".to_string(),
            delay_ms: 500,
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the document store
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Cloud project id
    pub project_id: Option<String>,
    /// Database id within the project
    pub database: String,
    /// OAuth bearer token (can also be set via FIRESTORE_TOKEN)
    pub access_token: Option<String>,
    /// Base URL for the API endpoint (for emulators and tests)
    pub base_url: Option<String>,
    /// Documents requested per listing page
    pub page_size: u32,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            database: "(default)".to_string(),
            access_token: None,
            base_url: None,
            page_size: 300,
            timeout: default_timeout(),
        }
    }
}

fn default_analyzers() -> Vec<String> {
    vec![
        "dictionary".to_string(),
        "suffix".to_string(),
        "compound".to_string(),
    ]
}

fn default_timeout() -> u64 {
    30
}

impl PipelineConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_INGREDIENTS__ prefix
    /// 2. recipe-ingredients.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration from an explicit file (or `recipe-ingredients.toml`) and
/// environment variables
///
/// Environment variable format: RECIPE_INGREDIENTS__STORE__PROJECT_ID
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-ingredients").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_INGREDIENTS")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("analyzers.enabled")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.corpus.path, PathBuf::from("recipes.json"));
        assert_eq!(config.corpus.records_pointer, "/COOKRCP01/row");
        assert_eq!(config.corpus.name_field, "RCP_NM");
        assert_eq!(config.corpus.parts_field, "RCP_PARTS_DTLS");
        assert_eq!(config.corpus.questions_path, PathBuf::from("questions.json"));
        assert_eq!(config.analyzers.enabled.len(), 3);
        assert_eq!(config.translation.delay_ms, 500);
        assert_eq!(config.store.database, "(default)");
        assert!(config.output.write_bom);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[corpus]
path = "data/recipes.json"

[analyzers]
enabled = ["dictionary", "suffix"]

[store]
project_id = "cook-it"
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.corpus.path, PathBuf::from("data/recipes.json"));
        // Unset fields keep their defaults
        assert_eq!(config.corpus.id_field, "RCP_SEQ");
        assert_eq!(config.analyzers.enabled, vec!["dictionary", "suffix"]);
        assert_eq!(config.store.project_id.as_deref(), Some("cook-it"));
        assert_eq!(config.store.page_size, 300);
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let result = load_config(Some(Path::new("/nonexistent/recipe-ingredients.toml")));
        assert!(result.is_err());
    }
}

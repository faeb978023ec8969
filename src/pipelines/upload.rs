use crate::config::PipelineConfig;
use crate::corpus;
use crate::error::Result;
use crate::store::{self, CopyReport, DocumentStore, FirestoreStore};
use crate::table;

fn open_store(config: &PipelineConfig) -> Result<FirestoreStore> {
    FirestoreStore::new(&config.store)
}

/// Upload the translated ingredient table to `collection`
pub async fn ingredients(config: &PipelineConfig, collection: &str) -> Result<usize> {
    let store = open_store(config)?;
    ingredients_with(&store, config, collection).await
}

pub async fn ingredients_with(
    store: &dyn DocumentStore,
    config: &PipelineConfig,
    collection: &str,
) -> Result<usize> {
    let rows = table::read_translated_table(&config.output.translated_path)?;
    store::upload_ingredients(store, collection, &rows).await
}

/// Upload the raw recipe corpus to `collection`
pub async fn recipes(config: &PipelineConfig, collection: &str) -> Result<usize> {
    let store = open_store(config)?;
    recipes_with(&store, config, collection).await
}

pub async fn recipes_with(
    store: &dyn DocumentStore,
    config: &PipelineConfig,
    collection: &str,
) -> Result<usize> {
    let records = corpus::load_corpus(&config.corpus)?;
    store::upload_recipes(store, collection, &records).await
}

/// Upload the survey question sections to `collection`
pub async fn questions(config: &PipelineConfig, collection: &str) -> Result<usize> {
    let store = open_store(config)?;
    questions_with(&store, config, collection).await
}

pub async fn questions_with(
    store: &dyn DocumentStore,
    config: &PipelineConfig,
    collection: &str,
) -> Result<usize> {
    let sections = corpus::load_questions(&config.corpus.questions_path)?;
    store::upload_questions(store, collection, &sections).await
}

/// Copy one collection to another, optionally deleting the source
pub async fn copy(
    config: &PipelineConfig,
    from: &str,
    to: &str,
    delete_source: bool,
) -> Result<CopyReport> {
    let store = open_store(config)?;
    store::copy_collection(&store, from, to, delete_source).await
}

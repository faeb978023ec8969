mod firestore;
mod value;

pub use firestore::FirestoreStore;

use crate::error::Result;
use crate::model::{QuestionSection, RecipeRecord, TranslatedIngredient};
use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Map, Value};

const PROGRESS_EVERY: usize = 100;

/// A stored document: its id within a collection and its fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

/// Unified trait for document databases
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Get the store name (e.g., "firestore")
    fn store_name(&self) -> &str;

    /// Create or fully replace a document
    async fn set_document(&self, collection: &str, id: &str, fields: &Map<String, Value>)
        -> Result<()>;

    /// Every document currently in `collection`
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>>;

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()>;
}

/// Upload translated ingredients as documents numbered from 1
pub async fn upload_ingredients(
    store: &dyn DocumentStore,
    collection: &str,
    rows: &[TranslatedIngredient],
) -> Result<usize> {
    for (index, row) in rows.iter().enumerate() {
        let mut fields = Map::new();
        fields.insert("식재료".to_string(), Value::String(row.korean.clone()));
        fields.insert("english".to_string(), Value::String(row.english.clone()));

        store
            .set_document(collection, &(index + 1).to_string(), &fields)
            .await?;
        log_progress("Uploaded", index + 1, rows.len());
    }

    info!(
        "Uploaded {} ingredients to '{}' ({})",
        rows.len(),
        collection,
        store.store_name()
    );
    Ok(rows.len())
}

/// Upload full recipe records, keyed by their sequence id
pub async fn upload_recipes(
    store: &dyn DocumentStore,
    collection: &str,
    records: &[RecipeRecord],
) -> Result<usize> {
    for (index, record) in records.iter().enumerate() {
        store.set_document(collection, &record.id, &record.raw).await?;
        log_progress("Uploaded", index + 1, records.len());
    }

    info!(
        "Uploaded {} recipes to '{}' ({})",
        records.len(),
        collection,
        store.store_name()
    );
    Ok(records.len())
}

/// Upload survey question sections as documents numbered from 1
pub async fn upload_questions(
    store: &dyn DocumentStore,
    collection: &str,
    sections: &[QuestionSection],
) -> Result<usize> {
    for (index, section) in sections.iter().enumerate() {
        let mut fields = Map::new();
        fields.insert(
            "category".to_string(),
            Value::String(section.category.clone()),
        );
        fields.insert("questions".to_string(), section.questions.clone());

        store
            .set_document(collection, &(index + 1).to_string(), &fields)
            .await?;
        debug!("Uploaded question section {}: {}", index + 1, section.category);
    }

    info!(
        "Uploaded {} question sections to '{}' ({})",
        sections.len(),
        collection,
        store.store_name()
    );
    Ok(sections.len())
}

/// Outcome of [`copy_collection`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
    pub deleted: usize,
}

/// Copy every document of `from` into `to` under the same id.
///
/// With `delete_source`, the copied documents are then removed from `from`,
/// which amounts to renaming the collection. Nothing is deleted unless every
/// copy succeeded.
pub async fn copy_collection(
    store: &dyn DocumentStore,
    from: &str,
    to: &str,
    delete_source: bool,
) -> Result<CopyReport> {
    let documents = store.list_documents(from).await?;
    let mut report = CopyReport::default();

    for document in &documents {
        store.set_document(to, &document.id, &document.fields).await?;
        report.copied += 1;
        log_progress("Copied", report.copied, documents.len());
    }
    info!("Copied {} documents from '{}' to '{}'", report.copied, from, to);

    if delete_source {
        for document in &documents {
            store.delete_document(from, &document.id).await?;
            report.deleted += 1;
            log_progress("Deleted", report.deleted, documents.len());
        }
        info!("Deleted {} documents from '{}'", report.deleted, from);
    }

    Ok(report)
}

fn log_progress(action: &str, done: usize, total: usize) {
    if done % PROGRESS_EVERY == 0 {
        info!("{} {}/{} documents", action, done, total);
    }
}

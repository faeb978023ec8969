use super::value::{decode_fields, encode_fields};
use super::{Document, DocumentStore};
use crate::config::StoreConfig;
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, Url};
use serde_json::{json, Map, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Cloud Firestore over its REST v1 API
pub struct FirestoreStore {
    client: Client,
    base_url: String,
    project_id: String,
    database: String,
    access_token: String,
    page_size: u32,
}

impl FirestoreStore {
    /// Create a new Firestore store from configuration
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let project_id = config.project_id.clone().ok_or_else(|| {
            PipelineError::MissingCredential("store.project_id is not configured".to_string())
        })?;

        // Try config first, then fall back to environment variable
        let access_token = config
            .access_token
            .clone()
            .or_else(|| std::env::var("FIRESTORE_TOKEN").ok())
            .ok_or_else(|| {
                PipelineError::MissingCredential(
                    "FIRESTORE_TOKEN not found in config or environment".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(FirestoreStore {
            client,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            project_id,
            database: config.database.clone(),
            access_token,
            page_size: config.page_size,
        })
    }

    /// URL of `documents/<segments...>` in the configured database
    fn documents_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PipelineError::StoreError(format!("invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| PipelineError::StoreError("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.project_id.as_str(),
                "databases",
                self.database.as_str(),
                "documents",
            ])
            .extend(segments);

        Ok(url)
    }

    async fn check(response: Response, action: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await?;
        Err(PipelineError::StoreError(format!(
            "{} failed ({}): {}",
            action, status, error_text
        )))
    }
}

/// Last path segment of a full document name
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn store_name(&self) -> &str {
        "firestore"
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<()> {
        let url = self.documents_url(&[collection, id])?;
        debug!("PATCH {}", url);

        // Without an update mask the whole document is replaced
        let response = self
            .client
            .patch(url)
            .bearer_auth(&self.access_token)
            .json(&json!({ "fields": encode_fields(fields) }))
            .send()
            .await?;

        Self::check(response, &format!("write of {}/{}", collection, id)).await?;
        Ok(())
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.documents_url(&[collection])?;
            url.query_pairs_mut()
                .append_pair("pageSize", &self.page_size.to_string());
            if let Some(token) = &page_token {
                url.query_pairs_mut().append_pair("pageToken", token);
            }
            debug!("GET {}", url);

            let response = self
                .client
                .get(url)
                .bearer_auth(&self.access_token)
                .send()
                .await?;
            let body: Value = Self::check(response, &format!("listing of {}", collection))
                .await?
                .json()
                .await?;

            if let Some(items) = body["documents"].as_array() {
                for item in items {
                    let name = item["name"].as_str().ok_or_else(|| {
                        PipelineError::StoreError("document without a name".to_string())
                    })?;
                    documents.push(Document {
                        id: document_id(name).to_string(),
                        fields: decode_fields(&item["fields"])?,
                    });
                }
            }

            match body["nextPageToken"].as_str() {
                Some(token) if !token.is_empty() => page_token = Some(token.to_string()),
                _ => break,
            }
        }

        debug!("Listed {} documents in '{}'", documents.len(), collection);
        Ok(documents)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        let url = self.documents_url(&[collection, id])?;
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        Self::check(response, &format!("delete of {}/{}", collection, id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn config(base_url: String) -> StoreConfig {
        StoreConfig {
            project_id: Some("cook-it".to_string()),
            access_token: Some("test-token".to_string()),
            base_url: Some(base_url),
            page_size: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_project_id() {
        let config = StoreConfig {
            access_token: Some("test-token".to_string()),
            ..Default::default()
        };
        let result = FirestoreStore::new(&config);
        assert!(matches!(result, Err(PipelineError::MissingCredential(_))));
    }

    #[test]
    fn test_documents_url() {
        let store = FirestoreStore::new(&config("http://localhost:8080/".to_string())).unwrap();
        let url = store.documents_url(&["ingredients", "1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/projects/cook-it/databases/(default)/documents/ingredients/1"
        );
    }

    #[test]
    fn test_document_id() {
        assert_eq!(
            document_id("projects/p/databases/(default)/documents/recipes/28"),
            "28"
        );
    }

    #[tokio::test]
    async fn test_set_document() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "PATCH",
                "/v1/projects/cook-it/databases/(default)/documents/ingredients/1",
            )
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::Json(json!({
                "fields": {
                    "식재료": {"stringValue": "양파"},
                    "english": {"stringValue": "onion"}
                }
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let store = FirestoreStore::new(&config(server.url())).unwrap();
        let fields = json!({"식재료": "양파", "english": "onion"});
        store
            .set_document("ingredients", "1", fields.as_object().unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_document_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PATCH", Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"status": "PERMISSION_DENIED"}}"#)
            .create_async()
            .await;

        let store = FirestoreStore::new(&config(server.url())).unwrap();
        let result = store.set_document("recipes", "28", &Map::new()).await;

        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("PERMISSION_DENIED"));
        }
    }

    #[tokio::test]
    async fn test_list_documents_follows_pages() {
        let mut server = mockito::Server::new_async().await;
        let path = "/v1/projects/cook-it/databases/(default)/documents/recipes";

        let first = server
            .mock("GET", path)
            .match_query(Matcher::Regex("^pageSize=2$".into()))
            .with_status(200)
            .with_body(
                json!({
                    "documents": [
                        {"name": "projects/cook-it/databases/(default)/documents/recipes/1",
                         "fields": {"RCP_NM": {"stringValue": "칼국수"}}},
                        {"name": "projects/cook-it/databases/(default)/documents/recipes/2",
                         "fields": {"RCP_NM": {"stringValue": "비빔국수"}}}
                    ],
                    "nextPageToken": "page-2"
                })
                .to_string(),
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", path)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("pageSize".into(), "2".into()),
                Matcher::UrlEncoded("pageToken".into(), "page-2".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "documents": [
                        {"name": "projects/cook-it/databases/(default)/documents/recipes/3",
                         "fields": {"RCP_NM": {"stringValue": "잔치국수"}}}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let store = FirestoreStore::new(&config(server.url())).unwrap();
        let documents = store.list_documents("recipes").await.unwrap();

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].id, "1");
        assert_eq!(documents[2].fields["RCP_NM"], "잔치국수");
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let store = FirestoreStore::new(&config(server.url())).unwrap();
        assert!(store.list_documents("empty").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_document() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "DELETE",
                "/v1/projects/cook-it/databases/(default)/documents/recipes/28",
            )
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let store = FirestoreStore::new(&config(server.url())).unwrap();
        store.delete_document("recipes", "28").await.unwrap();
        mock.assert_async().await;
    }
}

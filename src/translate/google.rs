use super::Translator;
use crate::config::TranslationConfig;
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com";

/// Google Cloud Translation (v2 basic) client
pub struct GoogleTranslator {
    client: Client,
    api_key: String,
    base_url: String,
    source: String,
    target: String,
}

impl GoogleTranslator {
    /// Create a new Google translator from configuration
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                PipelineError::MissingCredential(
                    "GOOGLE_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleTranslator {
            client,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            source: config.source_lang.clone(),
            target: config.target_lang.clone(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn translator_name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str) -> Result<String> {
        let url = format!("{}/language/translate/v2", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&json!({
                "q": text,
                "source": self.source,
                "target": self.target,
                "format": "text"
            }))
            .send()
            .await?;

        // Check for HTTP errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(PipelineError::TranslationError(format!(
                "Google Translation API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let translated = response_body["data"]["translations"][0]["translatedText"]
            .as_str()
            .ok_or_else(|| {
                PipelineError::TranslationError(
                    "Failed to extract translatedText from response".to_string(),
                )
            })?
            .to_string();

        Ok(translated)
    }
}

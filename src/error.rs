use thiserror::Error;

/// Errors that can occur while extracting, translating or uploading ingredients
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Failed to read or write a local file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed JSON in the corpus or a resource table
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read or write a CSV table
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// HTTP request to an external service failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The corpus file does not have the expected shape
    #[error("Invalid corpus: {0}")]
    CorpusError(String),

    /// A morphological analyzer could not process its input
    #[error("Analyzer '{analyzer}' failed: {message}")]
    AnalyzerError { analyzer: String, message: String },

    /// The translation service returned an unusable response
    #[error("Translation failed: {0}")]
    TranslationError(String),

    /// The document store rejected a request
    #[error("Document store error: {0}")]
    StoreError(String),

    /// A required credential is missing from config and environment
    #[error("Missing credential: {0}")]
    MissingCredential(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

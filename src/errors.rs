use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("BSON: {0}")]
    Bson(#[from] bson::error::Error),

    #[error("Expected a document, found {0}")]
    NotADocument(String),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

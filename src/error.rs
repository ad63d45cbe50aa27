use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    #[error("Failed to serialize analysis: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<regex::Error> for PromptError {
    fn from(err: regex::Error) -> Self {
        PromptError::InvalidPattern(err.to_string())
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        PromptError::Serialize(err.to_string())
    }
}

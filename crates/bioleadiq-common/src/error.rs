use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input error in {source_name}: {reason}")]
    Input { source_name: String, reason: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Security error: {0}")]
    Security(String),
}

impl LeadError {
    pub fn input(source_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        LeadError::Input {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoloniexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Poloniex API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),
}

pub type Result<T> = std::result::Result<T, PoloniexError>;

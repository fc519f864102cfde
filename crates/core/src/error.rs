use thiserror::Error;

pub type Result<T> = std::result::Result<T, OmniexError>;

#[derive(Error, Debug)]
pub enum OmniexError {
    #[error("Method not implemented")]
    NotImplemented,

    #[error("Method not supported by this exchange")]
    NotSupported,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Exchange error: {0}")]
    Exchange(String),

    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

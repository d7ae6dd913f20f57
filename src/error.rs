use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GriddleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Response body already consumed")]
    BodyConsumed,
}

pub type Result<T> = std::result::Result<T, GriddleError>;

impl From<serde_json::Error> for GriddleError {
    fn from(e: serde_json::Error) -> Self {
        GriddleError::Json(e.to_string())
    }
}

impl From<url::ParseError> for GriddleError {
    fn from(e: url::ParseError) -> Self {
        GriddleError::Url(e.to_string())
    }
}

impl From<reqwest::Error> for GriddleError {
    fn from(e: reqwest::Error) -> Self {
        GriddleError::Transport(e.to_string())
    }
}

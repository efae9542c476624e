pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Collection endpoint rejected the submission with status {0}")]
    Rejected(reqwest::StatusCode),
}

impl Error {
    /// Whether the failure happened on the way to, or at, the remote endpoint.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Reqwest(_) | Error::Rejected(_))
    }
}

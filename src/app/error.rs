use thiserror::Error;

#[derive(Error, Debug)]
pub enum HisnError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Corpus parsing error: {0}")]
    CorpusParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Unknown entity id: {0}")]
    UnknownEntity(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HisnError>;

use thiserror::Error;

/// Main error type for selkie
#[derive(Error, Debug)]
pub enum SelkieError {
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Unauthorized directory: {0}")]
    UnauthorizedDirectory(String),

    #[error("Load error: {0}")]
    LoadError(String),

    #[error("Dump error: {0}")]
    DumpError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SelkieError>;

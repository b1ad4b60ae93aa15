use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON")]
    Syntax(#[source] serde_json::Error),

    #[error("An error occurred decoding role policy: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("{0}")]
    Type(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unable to read policy file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

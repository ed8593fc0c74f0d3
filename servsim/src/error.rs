use std::{io, path::PathBuf, sync};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to import payloads, only JSON files are accepted. Given file: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to import payloads, given file '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to import payloads from {}. Got error: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Got error while reading payloads, error {0}")]
    Read(#[from] io::Error),
    #[error("Failed to fetch given URL {url}, error {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Got error while reading payloads from the remote source, error {0}")]
    ReadBody(#[source] reqwest::Error),
    #[error("Got error while parsing payloads, error {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Bad request. Nothing to import!")]
    EmptyBatch,
    #[error("Invalid base64 body: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("Failed to encode payload: {0}")]
    Encode(String),
    #[error("Failed to save payload: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("The lock was poisoned")]
    PoisonedLock,
}

impl Error {
    /// Whether the error happened while locating, reading or decoding the
    /// source, before any record was looked at.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFormat(_)
                | Error::NotFound(_)
                | Error::Stat { .. }
                | Error::Read(_)
                | Error::Fetch { .. }
                | Error::ReadBody(_)
                | Error::Parse(_)
        )
    }
}

impl<T> From<sync::PoisonError<T>> for Error {
    fn from(_: sync::PoisonError<T>) -> Self {
        Error::PoisonedLock
    }
}

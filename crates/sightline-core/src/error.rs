//! Error types for Sightline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Provider returned an empty completion")]
    EmptyCompletion,
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for rankfuse

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid fusion config: {0}")]
    InvalidConfig(String),

    #[error("Malformed chunk: {0}")]
    MalformedChunk(String),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    pub fn malformed_chunk(msg: impl Into<String>) -> Self {
        Error::MalformedChunk(msg.into())
    }
}

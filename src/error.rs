use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediavaultError {
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Config(ConfigError),
    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse config: {0}")]
    Parse(String),
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, MediavaultError>;

impl MediavaultError {
    pub fn message(msg: impl Into<String>) -> Self {
        MediavaultError::Message(msg.into())
    }
}

impl From<ConfigError> for MediavaultError {
    fn from(err: ConfigError) -> Self {
        MediavaultError::Config(err)
    }
}

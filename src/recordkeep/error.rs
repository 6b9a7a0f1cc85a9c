use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordkeepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<confique::Error> for RecordkeepError {
    fn from(err: confique::Error) -> Self {
        RecordkeepError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecordkeepError>;

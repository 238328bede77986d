use crate::{Intensity, Name, Pool};

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("no body parts requested")]
    NoBodyParts,
    #[error("no eligible {0} entries")]
    EmptyPool(Pool),
    #[error("{record} has no entry for intensity {intensity}")]
    MissingIntensity { record: Name, intensity: Intensity },
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl From<StorageError> for GenerateError {
    fn from(value: StorageError) -> Self {
        GenerateError::Read(ReadError::Storage(value))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("malformed {source_name}: {message}")]
    Malformed {
        source_name: String,
        message: String,
    },
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

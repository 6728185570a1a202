use crate::model::PatientId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardError {
    #[error("Patient ID {0} already exists")]
    DuplicateKey(PatientId),

    #[error("Patient ID {0} not found")]
    NotFound(PatientId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WardError>;

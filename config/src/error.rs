use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Failed to load environment file {path}: {message}")]
    EnvFile { path: String, message: String },
}

impl From<JsonError> for ConfigError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

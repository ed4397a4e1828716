use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileInfoError {
    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidConfigValue { key: String, message: String },

    #[error("Unknown output format: '{value}' - expected 'text' or 'json'")]
    InvalidOutputFormat { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FileInfoError>;

impl FileInfoError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigParse { .. } => 2,
            Self::ConfigKeyNotFound { .. } => 3,
            Self::InvalidConfigValue { .. } | Self::InvalidOutputFormat { .. } => 4,
            Self::Io(_) => 5,
            _ => 1,
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NxlcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid fixture {path}: {message}")]
    Fixture { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NxlcError {
    /// Short category name, used in debug logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::UnknownLanguage(_) => "Language",
            Self::Fixture { .. } => "Fixture",
            Self::Json(_) => "JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, NxlcError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

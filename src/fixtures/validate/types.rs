use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    Error,
    Warning,
    Info,
}

impl ValidationLevel {
    pub const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Info];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
    Structure,
    Consistency,
    Completeness,
    Correctness,
    Performance,
}

impl ValidationType {
    pub const ALL: [Self; 5] = [
        Self::Structure,
        Self::Consistency,
        Self::Completeness,
        Self::Correctness,
        Self::Performance,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Consistency => "consistency",
            Self::Completeness => "completeness",
            Self::Correctness => "correctness",
            Self::Performance => "performance",
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    #[serde(rename = "type")]
    pub kind: ValidationType,
    pub path: PathBuf,
    pub message: String,
    pub details: Map<String, Value>,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(
        level: ValidationLevel,
        kind: ValidationType,
        path: &Path,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            kind,
            path: path.to_path_buf(),
            message: message.into(),
            details: Map::new(),
        }
    }

    #[must_use]
    pub fn error(kind: ValidationType, path: &Path, message: impl Into<String>) -> Self {
        Self::new(ValidationLevel::Error, kind, path, message)
    }

    #[must_use]
    pub fn warning(kind: ValidationType, path: &Path, message: impl Into<String>) -> Self {
        Self::new(ValidationLevel::Warning, kind, path, message)
    }

    #[must_use]
    pub fn info(kind: ValidationType, path: &Path, message: impl Into<String>) -> Self {
        Self::new(ValidationLevel::Info, kind, path, message)
    }

    #[must_use]
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.level.label(),
            self.path.display(),
            self.message
        )
    }
}

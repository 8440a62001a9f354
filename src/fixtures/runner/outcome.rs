use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fixtures::model::{Fixture, FixtureKind, LineCount};
use crate::output::display_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Running,
    Passed,
    Failed,
    Skipped,
    Error,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a test ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub os: String,
    pub arch: String,
    pub family: String,
}

impl PlatformInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            family: std::env::consts::FAMILY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    pub fixture: Fixture,
    pub actual: Option<LineCount>,
    pub status: Status,
    pub error: Option<String>,
    pub duration: Duration,
    pub platform: PlatformInfo,
}

impl TestOutcome {
    #[must_use]
    pub const fn new(fixture: Fixture, platform: PlatformInfo) -> Self {
        Self {
            fixture,
            actual: None,
            status: Status::Pending,
            error: None,
            duration: Duration::ZERO,
            platform,
        }
    }

    /// Serializable form, with the file path relative to `root`.
    #[must_use]
    pub fn record(&self, root: &Path) -> OutcomeRecord {
        OutcomeRecord {
            language: self.fixture.language.clone(),
            category: self.fixture.category.clone(),
            fixture_type: self.fixture.kind,
            file: display_path(&self.fixture.path, Some(root)),
            status: self.status,
            expected: self.fixture.expected,
            actual: self.actual,
            error: self.error.clone(),
            execution_time: self.duration.as_secs_f64(),
            platform: self.platform.clone(),
        }
    }
}

/// One result as written to the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub language: String,
    pub category: String,
    pub fixture_type: FixtureKind,
    pub file: String,
    pub status: Status,
    pub expected: LineCount,
    pub actual: Option<LineCount>,
    pub error: Option<String>,
    /// Seconds.
    pub execution_time: f64,
    pub platform: PlatformInfo,
}

#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the nxlc binary, isolated from the
/// caller's `NXLC_*` environment.
#[macro_export]
macro_rules! nxlc {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("nxlc"));
        cmd.env_remove("NXLC_FIXTURE_DIR")
            .env_remove("NXLC_WORKERS")
            .env_remove("NXLC_LOG");
        cmd
    }};
}

/// A temporary project directory for integration tests.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and its parent directories, under the project.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> String {
        self.dir.path().to_string_lossy().to_string()
    }

    /// Writes `.nxlc.toml` at the project root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".nxlc.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// A Rust file with the given numbers of comment, blank and code lines,
    /// in that order.
    pub fn create_rust_file(
        &self,
        relative_path: &str,
        comments: usize,
        blanks: usize,
        code: usize,
    ) {
        let mut content = String::new();
        for i in 0..comments {
            writeln!(content, "// Comment line {i}").ok();
        }
        for _ in 0..blanks {
            content.push('\n');
        }
        for i in 0..code {
            writeln!(content, "let var_{i} = {i};").ok();
        }
        self.create_file(relative_path, &content);
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A small mixed-language project: 2 Rust files, 1 Python file.
pub fn mixed_project() -> TestProject {
    let project = TestProject::new();
    project.create_rust_file("src/main.rs", 2, 1, 5);
    project.create_rust_file("src/lib.rs", 1, 0, 3);
    project.create_file(
        "scripts/build.py",
        "\"\"\"Build helper.\"\"\"\nimport os\n\nprint(os.getcwd())  # cwd\n",
    );
    project
}

/// Parses stdout of a successful command as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

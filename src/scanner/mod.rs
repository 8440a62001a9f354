mod directory;
mod filter;

pub use directory::{DirectoryScanner, ScanOptions};
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// How many leading bytes are inspected for binary detection.
pub const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory (or a single file) and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the root does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// A file is treated as binary when a NUL byte appears in its first 8 KiB.
#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::{NxlcError, Result};

const GIT_DIR: &str = ".git";

/// Traversal switches for [`DirectoryScanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Honour `.gitignore`, `.ignore` and git exclude files.
    pub gitignore: bool,
    /// Include hidden files and directories.
    pub hidden: bool,
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            gitignore: true,
            hidden: false,
            follow_links: false,
        }
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    options: ScanOptions,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub fn new(filter: F) -> Self {
        Self::with_options(filter, ScanOptions::default())
    }

    #[must_use]
    pub const fn with_options(filter: F, options: ScanOptions) -> Self {
        Self { filter, options }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = if self.options.gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        };
        files.sort();
        files
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        let hidden = self.options.hidden;
        WalkDir::new(root)
            .follow_links(self.options.follow_links)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || keep_entry(e.file_name(), hidden))
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| tracing::warn!("Skipping unreadable entry: {e}"))
                    .ok()
            })
            .filter(|e| e.file_type().is_file() && self.includes(root, e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(!self.options.hidden)
            .parents(false)
            .follow_links(self.options.follow_links)
            .filter_entry(|e| e.file_name() != GIT_DIR)
            .build()
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| tracing::warn!("Skipping unreadable entry: {e}"))
                    .ok()
            })
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.includes(root, e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }

    fn includes(&self, root: &Path, path: &Path) -> bool {
        let relative = path
            .strip_prefix(root)
            .ok()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(path);
        self.filter.should_include(relative)
    }
}

fn keep_entry(name: &std::ffi::OsStr, hidden: bool) -> bool {
    if name == GIT_DIR {
        return false;
    }
    hidden || !name.to_string_lossy().starts_with('.')
}

impl<F: FileFilter + Send + Sync> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(NxlcError::FileRead {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "path does not exist"),
            });
        }
        let files = self.scan_impl(root);
        tracing::debug!(root = %root.display(), files = files.len(), "Scanned");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;

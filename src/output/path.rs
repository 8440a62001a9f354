//! Path display for reports: relative to the project root when possible,
//! always with forward slashes.

use std::path::Path;

/// Format a path for display, relative to `project_root` when it lies under it.
///
/// Returns `"."` when `path` equals the root.
#[must_use]
pub fn display_path(path: &Path, project_root: Option<&Path>) -> String {
    let relative = project_root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = normalize_separators(&relative.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn display_path_with_project_root() {
        let project_root = PathBuf::from("/home/user/project");
        let file_path = PathBuf::from("/home/user/project/src/main.rs");

        assert_eq!(display_path(&file_path, Some(&project_root)), "src/main.rs");
    }

    #[test]
    fn display_path_without_project_root() {
        let file_path = PathBuf::from("/home/user/project/src/main.rs");
        assert!(display_path(&file_path, None).ends_with("src/main.rs"));
    }

    #[test]
    fn display_path_not_child_of_root() {
        let project_root = PathBuf::from("/home/user/project");
        let file_path = PathBuf::from("/home/other/file.rs");

        assert!(display_path(&file_path, Some(&project_root)).ends_with("other/file.rs"));
    }

    #[test]
    fn display_path_same_as_root() {
        let root = PathBuf::from("/home/user/project");
        assert_eq!(display_path(&root, Some(&root)), ".");
    }

    #[test]
    fn normalize_separators_converts_backslashes() {
        assert_eq!(normalize_separators("src\\lib.rs"), "src/lib.rs");
        assert_eq!(normalize_separators("src/lib.rs"), "src/lib.rs");
    }

    #[cfg(windows)]
    #[test]
    fn display_path_windows_paths() {
        let project_root = PathBuf::from(r"C:\Users\user\project");
        let file_path = PathBuf::from(r"C:\Users\user\project\src\main.rs");

        assert_eq!(display_path(&file_path, Some(&project_root)), "src/main.rs");
    }
}

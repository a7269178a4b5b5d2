//! Path normalization utilities
//!
//! Ensures all emitted paths use '/' as separator and are relative to root.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Bare file name of a path, lossily decoded
pub fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Check if a name is hidden (starts with '.')
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Extension of a bare name including the leading dot.
///
/// A leading dot does not start an extension, so `.env` has none while
/// `types.d.ts` has `.ts`.
pub fn extension_of(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) if idx + 1 == name.len() => None,
        Some(idx) => Some(&name[idx..]),
    }
}

/// Directory holding the running executable
pub fn tool_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}

/// File name of the running executable
pub fn tool_file_name() -> Option<String> {
    std::env::current_exe().ok().and_then(|exe| file_name(&exe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.rs");
        assert_eq!(normalize_path(path), "src/main.rs");
    }

    #[test]
    fn test_normalize_path_nested() {
        let path = Path::new("a/b/c/d.ts");
        assert_eq!(normalize_path(path), "a/b/c/d.ts");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/lib/stores.ts");
        assert_eq!(
            make_relative(path, root),
            Some("src/lib/stores.ts".to_string())
        );
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.ts");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_is_hidden_name() {
        assert!(is_hidden_name(".git"));
        assert!(is_hidden_name(".env"));
        assert!(!is_hidden_name("src"));
        assert!(!is_hidden_name("main.ts"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.ts"), Some(".ts"));
        assert_eq!(extension_of("types.d.ts"), Some(".ts"));
        assert_eq!(extension_of("prod.env"), Some(".env"));
        assert_eq!(extension_of(".env"), None);
        assert_eq!(extension_of("Dockerfile"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name(Path::new("/project/vite.config.ts")),
            Some("vite.config.ts".to_string())
        );
        assert_eq!(file_name(Path::new("/")), None);
    }

    #[test]
    fn test_tool_dir_contains_executable() {
        let dir = tool_dir().unwrap();
        let name = tool_file_name().unwrap();
        assert!(dir.join(name).exists());
    }
}

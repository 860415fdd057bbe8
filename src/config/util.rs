//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/icons/res/drawable/  ← start
/// /home/user/icons/vecta.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    // An absolute path is used as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Expand `~` and resolve a relative directory against `root`.
pub fn resolve_dir(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("res/drawable");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("vecta.toml"), "").unwrap();

        let found = find_config_file(Path::new("vecta.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("vecta.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file(Path::new("no-such-config-7f3a.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file(&path, Path::new("/")).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_resolve_dir() {
        let root = Path::new("/project");
        assert_eq!(resolve_dir(Path::new("out"), root), PathBuf::from("/project/out"));
        assert_eq!(resolve_dir(Path::new("/abs"), root), PathBuf::from("/abs"));

        let home = resolve_dir(Path::new("~/icons"), root);
        assert!(!home.to_string_lossy().starts_with('~'));
        assert!(home.ends_with("icons"));
    }
}

//! Path resolution for `file:line` parameters.

use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

/// Resolve `path` to an absolute, normalised form against the current
/// working directory. The file does not need to exist.
///
/// If the working directory cannot be determined the path is returned as
/// given.
pub fn resolve(path: &str) -> PathBuf {
    let raw = Path::new(path);
    match raw.absolutize() {
        Ok(abs) => abs.into_owned(),
        Err(e) => {
            tracing::warn!("failed to resolve path {}: {}", raw.display(), e);
            raw.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_is_normalised() {
        assert_eq!(resolve("/tmp/x.php"), PathBuf::from("/tmp/x.php"));
        assert_eq!(resolve("/tmp/a/../x.php"), PathBuf::from("/tmp/x.php"));
        assert_eq!(resolve("/tmp/./x.php"), PathBuf::from("/tmp/x.php"));
    }

    #[test]
    fn test_relative_path_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve("src/x.php"), cwd.join("src").join("x.php"));
    }
}

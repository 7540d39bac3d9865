//! Filesystem helpers shared by the stores.

use std::path::Path;

use crate::error::{ColGitError, ColGitResult};

const FORBIDDEN_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Check that `name` can be used as exactly one path segment on every
/// platform we write to.
pub fn validate_segment(name: &str) -> ColGitResult<&str> {
    let reason = if name.trim().is_empty() {
        Some("must not be empty")
    } else if name == "." || name == ".." {
        Some("must not be a relative directory reference")
    } else if name.chars().any(|c| c.is_control()) {
        Some("must not contain control characters")
    } else if name.contains(FORBIDDEN_CHARS) {
        Some(r#"must not contain any of / \ < > : " | ? *"#)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ColGitError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(name),
    }
}

/// Replace the file at `path` with `content` via a sibling temp file and a
/// rename, so readers never observe a half-written file.
pub fn write_atomic(path: &Path, content: &str) -> ColGitResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| ColGitError::InvalidArgument(format!("{} has no file name", path.display())))?;
    temp_name.push(".tmp");
    let temp = path.with_file_name(temp_name);

    let result = std::fs::write(&temp, content).and_then(|()| std::fs::rename(&temp, path));
    if let Err(e) = result {
        if let Err(cleanup) = std::fs::remove_file(&temp) {
            tracing::debug!(path = %temp.display(), error = %cleanup, "temp file not removed");
        }
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_segment("feature-x").is_ok());
        assert!(validate_segment("2025-03-20").is_ok());
        assert!(validate_segment("notas de día").is_ok());
    }

    #[test]
    fn rejects_traversal_and_separators() {
        for bad in ["", "   ", ".", "..", "../etc", "a/b", "a\\b", "a:b", "tab\there", "nul\0"] {
            assert!(
                matches!(validate_segment(bad), Err(ColGitError::InvalidName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn write_atomic_creates_parent_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("file.json");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("nested").join("file.json.tmp").exists());
    }

    #[test]
    fn write_atomic_removes_temp_when_rename_fails() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory can't be replaced by a file.
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "").unwrap();

        assert!(matches!(write_atomic(&path, "data"), Err(ColGitError::Io(_))));
        assert!(!dir.path().join("occupied.tmp").exists());
        assert!(path.join("keep").exists());
    }
}

use crate::error::{Result, SpecKitError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// An existing file is replaced; readers never observe a half-written file.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let persist_err = |source| SpecKitError::Persist {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(persist_err)?;
    tmp.write_all(data).map_err(persist_err)?;
    tmp.persist(path).map_err(|e| persist_err(e.error))?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("temp_spec.md");
        atomic_write(&path, b"# Spec").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Spec");
    }

    #[test]
    fn atomic_write_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("temp_spec.md");
        std::fs::write(&path, "old contents that are longer").unwrap();
        atomic_write(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn atomic_write_missing_parent_is_persist_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope/temp_spec.md");
        let err = atomic_write(&path, b"x").unwrap_err();
        assert!(matches!(err, SpecKitError::Persist { .. }));
        assert!(err.to_string().contains("temp_spec.md"));
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b");
        ensure_dir(&path).unwrap();
        ensure_dir(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn ensure_dir_fails_when_file_in_the_way() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taken");
        std::fs::write(&path, "file").unwrap();
        assert!(ensure_dir(&path).is_err());
    }
}

//! Atomic write primitives
//!
//! Uses temp→rename so an interrupted save never leaves a half-written
//! catalogue behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{io_error, Result};

/// Sibling temp path for `target`: `books.json` → `books.json.tmp`
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Atomically write bytes to a file, replacing any existing content
///
/// # Errors
///
/// Returns an `Io` error naming the failed step.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| io_error("create_catalogue_dir", parent, e))?;
        }
    }

    let temp_path = temp_path_for(target_path);

    fs::write(&temp_path, content)
        .map_err(|e| io_error("write_catalogue_temp", &temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_catalogue_temp", target_path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("books.json");

        atomic_write(&target, b"hello").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"hello");
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("books.json");

        atomic_write(&target, b"first version, longer").unwrap();
        atomic_write(&target, b"second").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"second");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("shelves").join("books.json");

        atomic_write(&target, b"nested").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"nested");
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("books.json");

        atomic_write(&target, b"clean").unwrap();

        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();

        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("/data/books.json"));
        assert_eq!(temp, PathBuf::from("/data/books.json.tmp"));
    }

    #[test]
    fn test_write_into_directory_path_fails_with_io() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&target).unwrap();

        let err = atomic_write(&target, b"x").unwrap_err();
        assert_eq!(err.kind(), bookshelf_core::ExErrorKind::Io);
    }
}

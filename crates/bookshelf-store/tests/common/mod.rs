use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir so tests never touch the originals
#[allow(dead_code)]
pub fn copy_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let target = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &target).expect("Failed to copy fixture");
    (dir, target)
}

/// Write `content` to `name` inside a fresh temp dir
#[allow(dead_code)]
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let target = dir.path().join(name);
    fs::write(&target, content).expect("Failed to write temp file");
    (dir, target)
}

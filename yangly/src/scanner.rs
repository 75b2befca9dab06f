//! Input file discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects files under `dir` whose extension matches `extension`.
///
/// A leading dot on `extension` is ignored. Results are ordered by path so
/// that runs over the same tree are reproducible.
///
/// # Errors
/// Returns the first traversal error, including a missing or unreadable `dir`.
pub fn scan_dir(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, walkdir::Error> {
    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

//! Path canonicalization helpers

use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Resolve the scan root to an absolute, canonical directory path.
///
/// Uses dunce so Windows paths stay in their familiar (non-UNC) form.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, ScanError> {
    let canonical = dunce::canonicalize(path).map_err(|e| ScanError::InvalidRoot {
        path: path.to_path_buf(),
        reason: format!("Failed to canonicalize path: {}", e),
    })?;

    if !canonical.is_dir() {
        return Err(ScanError::InvalidRoot {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    Ok(canonical)
}

/// Physical location of a directory, used to detect symlink loops.
pub fn physical_dir(path: &Path) -> Result<PathBuf, ScanError> {
    dunce::canonicalize(path).map_err(|_| ScanError::UnclassifiedEntry {
        path: path.to_path_buf(),
    })
}

/// True when `path` equals `ancestor` or lies somewhere beneath it.
pub fn is_within(path: &Path, ancestor: &Path) -> bool {
    path.starts_with(ancestor)
}

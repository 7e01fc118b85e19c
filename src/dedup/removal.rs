//! Removal of flagged duplicate folders
//!
//! Detection never touches the filesystem. This module is the only place
//! that does, and it only runs when the caller explicitly asks for it.

use crate::dedup::detector::DuplicateFolder;
use crate::error::ApiError;
use crate::tree::path::is_within;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// How a duplicate folder is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalMode {
    /// Move to the platform trash (recoverable)
    #[default]
    Trash,
    /// Delete permanently
    Delete,
}

impl FromStr for RemovalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trash" => Ok(RemovalMode::Trash),
            "delete" => Ok(RemovalMode::Delete),
            other => Err(format!(
                "Unknown removal mode '{}' (expected trash or delete)",
                other
            )),
        }
    }
}

/// Outcome of a removal pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalSummary {
    pub mode: RemovalMode,
    pub removed: Vec<PathBuf>,
    /// Already gone, or inside a folder removed earlier in the pass
    pub skipped: Vec<PathBuf>,
}

/// Remove every flagged folder.
///
/// Shallow paths go first so a flagged folder nested in another flagged
/// folder is skipped rather than removed twice. A flagged symlink is removed
/// as a link only. A flagged folder is skipped when its original no longer
/// resolves or resolves into the folder itself (the original reached it
/// through a symlink). The first failure aborts.
pub fn remove_duplicates(
    duplicates: &[DuplicateFolder],
    mode: RemovalMode,
) -> Result<RemovalSummary, ApiError> {
    let mut targets: Vec<&DuplicateFolder> = duplicates.iter().collect();
    targets.sort_by_key(|d| d.path.components().count());

    let mut summary = RemovalSummary {
        mode,
        ..RemovalSummary::default()
    };

    for duplicate in targets {
        let target = duplicate.path.as_path();
        let inside_removed = summary
            .removed
            .iter()
            .any(|removed| is_within(target, removed));
        let metadata = match std::fs::symlink_metadata(target) {
            Ok(metadata) if !inside_removed => metadata,
            _ => {
                summary.skipped.push(target.to_path_buf());
                continue;
            }
        };

        if metadata.file_type().is_symlink() {
            remove_link(target, mode)?;
            info!(path = %target.display(), mode = ?mode, "Removed duplicate link");
            summary.removed.push(target.to_path_buf());
            continue;
        }

        if !original_survives(duplicate) {
            warn!(
                path = %target.display(),
                original = %duplicate.original.display(),
                "Original does not survive removal, keeping folder"
            );
            summary.skipped.push(target.to_path_buf());
            continue;
        }

        remove_one(target, mode)?;
        info!(path = %target.display(), mode = ?mode, "Removed duplicate folder");
        summary.removed.push(target.to_path_buf());
    }

    Ok(summary)
}

/// True when the original still resolves somewhere outside the target.
fn original_survives(duplicate: &DuplicateFolder) -> bool {
    match (
        dunce::canonicalize(&duplicate.original),
        dunce::canonicalize(&duplicate.path),
    ) {
        (Ok(original), Ok(target)) => !is_within(&original, &target),
        _ => false,
    }
}

fn remove_link(path: &Path, mode: RemovalMode) -> Result<(), ApiError> {
    match mode {
        // Directory links on Windows need remove_dir
        RemovalMode::Delete => std::fs::remove_file(path)
            .or_else(|_| std::fs::remove_dir(path))
            .map_err(|e| removal_failed(path, e.to_string())),
        RemovalMode::Trash => remove_one(path, mode),
    }
}

fn remove_one(path: &Path, mode: RemovalMode) -> Result<(), ApiError> {
    let result = match mode {
        RemovalMode::Delete => std::fs::remove_dir_all(path).map_err(|e| e.to_string()),
        RemovalMode::Trash => trash::delete(path).map_err(|e| e.to_string()),
    };
    result.map_err(|reason| removal_failed(path, reason))
}

fn removal_failed(path: &Path, reason: String) -> ApiError {
    warn!(path = %path.display(), "Failed to remove duplicate folder: {}", reason);
    ApiError::RemovalFailed {
        path: path.to_path_buf(),
        reason,
    }
}

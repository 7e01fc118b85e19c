//! CLI output: error mapping from domain errors to the stderr diagnostic.

use crate::error::{ApiError, ScanError};

/// Map domain errors to a one-line diagnostic naming the offending path.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Scan(scan) => {
            let hint = match scan {
                ScanError::HashUnavailable { .. } => {
                    "\nhint: install xxhsum or pick an in-process provider with --hash xxh64"
                }
                ScanError::SymlinkLoop { .. } => "\nhint: a symbolic link points back into its own ancestor",
                _ => "",
            };
            format!("error: {} (path: {}){}", scan, scan.path().display(), hint)
        }
        other => format!("error: {}", other),
    }
}

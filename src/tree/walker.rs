//! Filesystem walker: lists the immediate children of one directory

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::trace;
use walkdir::WalkDir;

/// Order in which a folder's children are folded into its fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildOrder {
    /// Whatever order the OS directory listing yields. Fingerprints are then
    /// only comparable between folders listed by the same filesystem.
    #[default]
    Enumeration,
    /// Sorted by file name. Fingerprints depend on content alone.
    Name,
}

impl FromStr for ChildOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enumeration" => Ok(ChildOrder::Enumeration),
            "name" => Ok(ChildOrder::Name),
            other => Err(format!(
                "Unknown child order '{}' (expected enumeration or name)",
                other
            )),
        }
    }
}

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub child_order: ChildOrder,
    /// Exact file names to leave out of every listing (e.g. ".git")
    pub ignore: Vec<String>,
}

/// Source of a folder's immediate children, in fingerprint order.
pub trait ListChildren {
    fn list_children(&self, folder: &Path) -> Result<Vec<PathBuf>, ScanError>;
}

/// Lists directory children. Recursion is driven by the tree builder.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a walker with custom configuration
    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    fn should_ignore(&self, name: &str) -> bool {
        self.config.ignore.iter().any(|pattern| pattern == name)
    }
}

impl ListChildren for Walker {
    /// Immediate children of `folder`, in the configured order.
    fn list_children(&self, folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut walker = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);
        if self.config.child_order == ChildOrder::Name {
            walker = walker.sort_by_file_name();
        }

        let mut children = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let message = e.to_string();
                ScanError::DirectoryUnreadable {
                    path: folder.to_path_buf(),
                    source: e.into_io_error().unwrap_or_else(|| {
                        std::io::Error::new(std::io::ErrorKind::Other, message)
                    }),
                }
            })?;

            if self.should_ignore(entry.file_name().to_string_lossy().as_ref()) {
                trace!(path = %entry.path().display(), "Ignoring entry");
                continue;
            }
            children.push(entry.into_path());
        }

        Ok(children)
    }
}

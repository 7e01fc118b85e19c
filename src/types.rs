//! Core data model: items and their fingerprints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Digest identifying the content of a file or folder.
///
/// The empty fingerprint is a legitimate value: it is what every empty
/// folder hashes to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The fingerprint of a folder with no children.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shortened form for display (first 12 characters).
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(12) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl From<String> for Fingerprint {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Fingerprint {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a filesystem entry. Anything else is an error, not a third kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Folder,
}

/// A fully fingerprinted filesystem entry.
///
/// Folders refer to their children by path; the owning cache holds the
/// child items themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub path: PathBuf,
    pub kind: ItemKind,
    /// Child paths in walker order (empty for files)
    pub children: Vec<PathBuf>,
    pub fingerprint: Fingerprint,
}

impl Item {
    pub fn file(path: PathBuf, fingerprint: Fingerprint) -> Self {
        Self {
            path,
            kind: ItemKind::File,
            children: Vec::new(),
            fingerprint,
        }
    }

    pub fn folder(path: PathBuf, children: Vec<PathBuf>, fingerprint: Fingerprint) -> Self {
        Self {
            path,
            kind: ItemKind::Folder,
            children,
            fingerprint,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

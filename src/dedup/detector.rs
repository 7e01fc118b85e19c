//! First-seen-wins duplicate folder detection

use crate::types::{Fingerprint, Item, ItemKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// A folder whose fingerprint was already taken by an earlier item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateFolder {
    pub path: PathBuf,
    pub fingerprint: Fingerprint,
    /// First item seen with the same fingerprint
    pub original: PathBuf,
}

/// Scan items once, in the order given, flagging duplicate folders.
///
/// The first item carrying a fingerprint, file or folder, is kept. Every
/// later folder with that fingerprint is flagged; later files never are.
/// Empty folders all share the empty fingerprint, so every empty folder after
/// the first is flagged.
pub fn find_duplicates<'a, I>(items: I) -> Vec<DuplicateFolder>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut seen: HashMap<&'a Fingerprint, &'a PathBuf> = HashMap::new();
    let mut duplicates = Vec::new();

    for item in items {
        if let Some(original) = seen.get(&item.fingerprint).copied() {
            if item.kind == ItemKind::Folder {
                debug!(
                    path = %item.path.display(),
                    original = %original.display(),
                    "Duplicate folder"
                );
                duplicates.push(DuplicateFolder {
                    path: item.path.clone(),
                    fingerprint: item.fingerprint.clone(),
                    original: original.clone(),
                });
            }
        } else {
            seen.insert(&item.fingerprint, &item.path);
        }
    }

    duplicates
}

//! Tree builder: classifies, walks and fingerprints a directory tree

use crate::error::ScanError;
use crate::hash::HashProvider;
use crate::tree::cache::ItemCache;
use crate::tree::engine::FingerprintEngine;
use crate::tree::path;
use crate::tree::walker::{ListChildren, Walker};
use crate::types::{Fingerprint, Item, ItemKind};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// A fully fingerprinted tree
#[derive(Debug, Clone)]
pub struct Tree {
    /// Canonical root directory
    pub root: PathBuf,
    /// Every item under (and including) the root, in insertion order
    pub cache: ItemCache,
}

impl Tree {
    pub fn root_item(&self) -> Option<&Item> {
        self.cache.get(&self.root)
    }

    pub fn root_fingerprint(&self) -> Option<&Fingerprint> {
        self.cache.fingerprint_of(&self.root)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.cache.iter()
    }

    pub fn file_count(&self) -> usize {
        self.cache.count_kind(ItemKind::File)
    }

    pub fn folder_count(&self) -> usize {
        self.cache.count_kind(ItemKind::Folder)
    }
}

/// Builds items depth-first, memoizing every completed item.
pub struct TreeBuilder<'p> {
    walker: Box<dyn ListChildren + 'p>,
    engine: FingerprintEngine<'p>,
    cache: ItemCache,
    /// Physical locations of the folders currently being built
    in_progress: Vec<PathBuf>,
}

impl<'p> TreeBuilder<'p> {
    /// Create a builder hashing through `provider`
    pub fn new(provider: &'p dyn HashProvider) -> Self {
        Self {
            walker: Box::new(Walker::new()),
            engine: FingerprintEngine::new(provider),
            cache: ItemCache::new(),
            in_progress: Vec::new(),
        }
    }

    /// Use a custom child listing (child order, ignore list).
    pub fn with_walker<W: ListChildren + 'p>(mut self, walker: W) -> Self {
        self.walker = Box::new(walker);
        self
    }

    pub fn cache(&self) -> &ItemCache {
        &self.cache
    }

    /// Return the completed item for `path`, building it on first request.
    ///
    /// A cached item is returned as is. Otherwise the path is classified,
    /// a folder's children are built first in walker order, the fingerprint
    /// is computed and the finished item is stored.
    pub fn get_item(&mut self, path: &Path) -> Result<&Item, ScanError> {
        if let Some(pos) = self.cache.position(path) {
            return Ok(self.cache.at(pos));
        }

        let metadata = std::fs::metadata(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "Failed to stat entry");
            ScanError::UnclassifiedEntry {
                path: path.to_path_buf(),
            }
        })?;

        let item = if metadata.is_file() {
            let fingerprint = self.engine.file_fingerprint(path)?;
            trace!(path = %path.display(), fingerprint = %fingerprint, "Fingerprinted file");
            Item::file(path.to_path_buf(), fingerprint)
        } else if metadata.is_dir() {
            self.build_folder(path)?
        } else {
            return Err(ScanError::UnclassifiedEntry {
                path: path.to_path_buf(),
            });
        };

        let pos = self.cache.insert(item);
        Ok(self.cache.at(pos))
    }

    fn build_folder(&mut self, path: &Path) -> Result<Item, ScanError> {
        let physical = path::physical_dir(path)?;
        if self.in_progress.contains(&physical) {
            return Err(ScanError::SymlinkLoop {
                path: path.to_path_buf(),
            });
        }

        self.in_progress.push(physical);
        let result = self.build_folder_children(path);
        self.in_progress.pop();

        let (children, child_fingerprints) = result?;
        let fingerprint = self.engine.folder_fingerprint(path, &child_fingerprints)?;
        debug!(
            path = %path.display(),
            children = children.len(),
            fingerprint = %fingerprint,
            "Fingerprinted folder"
        );
        Ok(Item::folder(path.to_path_buf(), children, fingerprint))
    }

    fn build_folder_children(
        &mut self,
        path: &Path,
    ) -> Result<(Vec<PathBuf>, Vec<Fingerprint>), ScanError> {
        let children = self.walker.list_children(path)?;
        let mut fingerprints = Vec::with_capacity(children.len());
        for child in &children {
            fingerprints.push(self.get_item(child)?.fingerprint.clone());
        }
        Ok((children, fingerprints))
    }

    /// Fingerprint the whole tree under `root`.
    ///
    /// The root is canonicalized first, so every cached path is absolute.
    #[instrument(skip(self), fields(root = %root.display(), provider = self.engine.provider_name()))]
    pub fn build(mut self, root: &Path) -> Result<Tree, ScanError> {
        let start = Instant::now();
        info!("Starting tree build");

        let root = path::canonicalize_root(root)?;
        if let Err(e) = self.get_item(&root) {
            error!(path = %e.path().display(), "Tree build failed: {}", e);
            return Err(e);
        }

        let tree = Tree {
            root,
            cache: self.cache,
        };
        info!(
            item_count = tree.cache.len(),
            root_fingerprint = %tree.root_fingerprint().map(Fingerprint::short).unwrap_or(""),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );
        Ok(tree)
    }
}

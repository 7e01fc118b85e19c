//! Scan service: fingerprint a whole tree, then detect duplicate folders.

use crate::dedup::{find_duplicates, DuplicateFolder, RemovalSummary};
use crate::error::ScanError;
use crate::hash::HashProvider;
use crate::tree::builder::{Tree, TreeBuilder};
use crate::tree::walker::{ChildOrder, Walker, WalkerConfig};
use crate::types::Fingerprint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Result of one complete scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub provider: String,
    pub child_order: ChildOrder,
    pub root_fingerprint: Fingerprint,
    pub item_count: usize,
    pub file_count: usize,
    pub folder_count: usize,
    /// Flagged folders, in detection order
    pub duplicates: Vec<DuplicateFolder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removal: Option<RemovalSummary>,
}

impl ScanReport {
    pub fn duplicate_paths(&self) -> Vec<&Path> {
        self.duplicates.iter().map(|d| d.path.as_path()).collect()
    }
}

/// Runs the build and detection passes with one provider and walker setup.
pub struct ScanService<'p> {
    provider: &'p dyn HashProvider,
    walker_config: WalkerConfig,
}

impl<'p> ScanService<'p> {
    pub fn new(provider: &'p dyn HashProvider, walker_config: WalkerConfig) -> Self {
        Self {
            provider,
            walker_config,
        }
    }

    /// Fingerprint the tree under `root`.
    pub fn build_tree(&self, root: &Path) -> Result<Tree, ScanError> {
        TreeBuilder::new(self.provider)
            .with_walker(Walker::with_config(self.walker_config.clone()))
            .build(root)
    }

    /// Fingerprint the tree, then flag duplicate folders.
    ///
    /// Detection only starts once every item is fingerprinted; any error
    /// aborts the scan and no report is produced.
    pub fn run(&self, root: &Path) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let tree = self.build_tree(root)?;
        let duplicates = find_duplicates(tree.items());

        let report = ScanReport {
            root_fingerprint: tree.root_fingerprint().cloned().unwrap_or_default(),
            item_count: tree.cache.len(),
            file_count: tree.file_count(),
            folder_count: tree.folder_count(),
            root: tree.root,
            provider: self.provider.name().to_string(),
            child_order: self.walker_config.child_order,
            duplicates,
            removal: None,
        };

        info!(
            root = %report.root.display(),
            items = report.item_count,
            duplicates = report.duplicates.len(),
            duration_ms = start.elapsed().as_millis(),
            "Scan completed"
        );
        Ok(report)
    }
}

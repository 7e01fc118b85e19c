//! Shared test utilities for integration tests
//!
//! Builds small directory trees and runs scans with an in-process provider,
//! so tests do not depend on an installed `xxhsum`.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use twinfold::hash::Xxh64Provider;
use twinfold::scan::{ScanReport, ScanService};
use twinfold::tree::builder::{Tree, TreeBuilder};
use twinfold::tree::walker::{ChildOrder, Walker, WalkerConfig};

/// One entry of a test tree: `("dir/sub/file.txt", Some("content"))` creates
/// a file, `("dir/empty", None)` creates a directory.
pub type Entry<'a> = (&'a str, Option<&'a str>);

/// Create the entries under a fresh temp dir, in the order given.
pub fn make_tree(entries: &[Entry<'_>]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path(), entries);
    temp_dir
}

pub fn populate(root: &Path, entries: &[Entry<'_>]) {
    for (rel, content) in entries {
        let path = root.join(rel);
        match content {
            Some(content) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).unwrap();
                }
                fs::write(&path, content).unwrap();
            }
            None => fs::create_dir_all(&path).unwrap(),
        }
    }
}

pub fn walker_config(order: ChildOrder) -> WalkerConfig {
    WalkerConfig {
        child_order: order,
        ignore: Vec::new(),
    }
}

/// Build the tree with XXH64 and the given child order.
pub fn build(root: &Path, order: ChildOrder) -> Tree {
    let provider = Xxh64Provider;
    TreeBuilder::new(&provider)
        .with_walker(Walker::with_config(walker_config(order)))
        .build(root)
        .unwrap()
}

/// Full scan with XXH64 and the given child order.
pub fn scan(root: &Path, order: ChildOrder) -> ScanReport {
    let provider = Xxh64Provider;
    ScanService::new(&provider, walker_config(order))
        .run(root)
        .unwrap()
}

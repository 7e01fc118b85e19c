//! Property-based tests for determinism guarantees

use proptest::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use twinfold::dedup::find_duplicates;
use twinfold::hash::{HashProvider, Xxh64Provider};
use twinfold::tree::engine::FingerprintEngine;
use twinfold::types::{Fingerprint, Item};

/// Folder fingerprint is the left fold of `h(acc + child)` from ""
#[test]
fn test_folder_fingerprint_is_chain_fold() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec("[0-9a-f]{0,16}", 0..8), |children| {
            let provider = Xxh64Provider;
            let engine = FingerprintEngine::new(&provider);
            let children: Vec<Fingerprint> =
                children.into_iter().map(Fingerprint::from).collect();

            let fingerprint = engine.folder_fingerprint(Path::new("/f"), &children).unwrap();

            let mut acc = String::new();
            for child in &children {
                acc.push_str(child.as_str());
                acc = provider.hash_bytes(acc.as_bytes()).unwrap().as_str().to_string();
            }
            prop_assert_eq!(fingerprint.as_str(), acc.as_str());
            prop_assert_eq!(fingerprint.is_empty(), children.is_empty());

            // Same inputs, same output
            let again = engine.folder_fingerprint(Path::new("/other"), &children).unwrap();
            prop_assert_eq!(fingerprint, again);
            Ok(())
        })
        .unwrap();
}

fn item_strategy() -> impl Strategy<Value = Vec<(bool, u8)>> {
    // (is_folder, fingerprint drawn from a small alphabet to force collisions)
    prop::collection::vec((any::<bool>(), 0u8..6), 0..40)
}

fn build_items(raw: &[(bool, u8)]) -> Vec<Item> {
    raw.iter()
        .enumerate()
        .map(|(i, (is_folder, fp))| {
            let path = PathBuf::from(format!("/t/{}", i));
            let fingerprint = Fingerprint::from(format!("fp{}", fp));
            if *is_folder {
                Item::folder(path, Vec::new(), fingerprint)
            } else {
                Item::file(path, fingerprint)
            }
        })
        .collect()
}

proptest! {
    /// Only folders are flagged, and only when an earlier item shares the fingerprint
    #[test]
    fn test_detection_is_first_seen_wins(raw in item_strategy()) {
        let items = build_items(&raw);
        let duplicates = find_duplicates(&items);

        let mut seen = HashSet::new();
        let mut expected = Vec::new();
        for item in &items {
            if !seen.insert(item.fingerprint.clone()) && item.is_folder() {
                expected.push(item.path.clone());
            }
        }
        let flagged: Vec<PathBuf> = duplicates.iter().map(|d| d.path.clone()).collect();
        prop_assert_eq!(flagged, expected);

        for dup in &duplicates {
            let original = items.iter().find(|i| i.path == dup.original).unwrap();
            prop_assert_eq!(&original.fingerprint, &dup.fingerprint);
            let first = items.iter().find(|i| i.fingerprint == dup.fingerprint).unwrap();
            prop_assert_eq!(&first.path, &dup.original);
        }
    }

    /// Running detection twice over the same items gives the same result
    #[test]
    fn test_detection_is_idempotent(raw in item_strategy()) {
        let items = build_items(&raw);
        prop_assert_eq!(find_duplicates(&items), find_duplicates(&items));
    }
}

//! Integration tests for duplicate folder detection over real trees

use super::test_utils::{build, make_tree, scan};
use std::path::PathBuf;
use twinfold::dedup::find_duplicates;
use twinfold::tree::walker::ChildOrder;

#[test]
fn test_sibling_copies_flag_the_later_one() {
    let temp_dir = make_tree(&[
        ("a.txt", Some("hello")),
        ("b/x.txt", Some("hello")),
        ("c/x.txt", Some("hello")),
    ]);

    let tree = build(temp_dir.path(), ChildOrder::Enumeration);
    let b = tree.cache.get(&tree.root.join("b")).unwrap();
    let c = tree.cache.get(&tree.root.join("c")).unwrap();
    assert_eq!(b.fingerprint, c.fingerprint);

    let order: Vec<&PathBuf> = tree.items().map(|i| &i.path).collect();
    let b_pos = order.iter().position(|p| **p == b.path).unwrap();
    let c_pos = order.iter().position(|p| **p == c.path).unwrap();
    let (first, second) = if b_pos < c_pos { (b, c) } else { (c, b) };

    let duplicates = find_duplicates(tree.items());
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].path, second.path);
    assert_eq!(duplicates[0].original, first.path);
    assert!(duplicates.iter().all(|d| !d.path.ends_with("a.txt")));
}

#[test]
fn test_two_empty_folders_flag_the_later_one() {
    let temp_dir = make_tree(&[
        ("empty1", None),
        ("nested/empty2", None),
        ("file.txt", Some("data")),
    ]);

    let report = scan(temp_dir.path(), ChildOrder::Name);

    // Name order: empty1 is built before nested/empty2
    assert_eq!(report.duplicate_paths(), vec![report.root.join("nested/empty2").as_path()]);
    assert_eq!(report.duplicates[0].original, report.root.join("empty1"));
    assert!(report.duplicates[0].fingerprint.is_empty());
}

#[test]
fn test_nested_duplicate_subtrees_are_all_flagged() {
    let temp_dir = make_tree(&[
        ("orig/docs/readme.md", Some("read me")),
        ("orig/src/main.rs", Some("fn main() {}")),
        ("copy/docs/readme.md", Some("read me")),
        ("copy/src/main.rs", Some("fn main() {}")),
    ]);

    let report = scan(temp_dir.path(), ChildOrder::Name);
    let root = &report.root;

    // Bottom-up insertion: nested copies are flagged before their parent
    assert_eq!(
        report.duplicate_paths(),
        vec![
            root.join("orig/docs").as_path(),
            root.join("orig/src").as_path(),
            root.join("orig").as_path(),
        ]
    );
    assert_eq!(report.duplicates[2].original, root.join("copy"));
}

#[test]
fn test_files_with_equal_content_never_flagged() {
    let temp_dir = make_tree(&[
        ("one.txt", Some("same")),
        ("two.txt", Some("same")),
        ("dir/three.txt", Some("same")),
    ]);

    let report = scan(temp_dir.path(), ChildOrder::Name);
    assert!(report.duplicates.is_empty());
    assert_eq!(report.file_count, 3);
}

#[test]
fn test_different_order_is_not_a_duplicate() {
    // Name order folds a.txt then b.txt in "p", but "q" holds the swapped contents
    let temp_dir = make_tree(&[
        ("p/a.txt", Some("first")),
        ("p/b.txt", Some("second")),
        ("q/a.txt", Some("second")),
        ("q/b.txt", Some("first")),
    ]);

    let report = scan(temp_dir.path(), ChildOrder::Name);
    assert!(report.duplicates.is_empty());
}

#[test]
fn test_idempotent_reports() {
    let temp_dir = make_tree(&[
        ("a/x.txt", Some("1")),
        ("b/x.txt", Some("1")),
        ("c/y.txt", Some("2")),
        ("d", None),
        ("e", None),
    ]);

    let first = scan(temp_dir.path(), ChildOrder::Enumeration);
    let second = scan(temp_dir.path(), ChildOrder::Enumeration);
    assert_eq!(first, second);
    assert_eq!(first.duplicates.len(), 2);
}

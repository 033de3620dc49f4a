//! Integration tests for `PathService` over the host filesystem.
//!
//! Tests that change the process current directory are marked with
//! `#[serial]`: the directory is process-global, so concurrent changes would
//! race. Everything else runs in parallel inside its own temporary tree.

mod common;

use common::{same_directory, TempTree};
use serial_test::serial;
use spath::{Error, OsFilesystem, PathService, PathValue};
use std::panic::{self, AssertUnwindSafe};

fn service() -> PathService<OsFilesystem> {
    PathService::new(OsFilesystem::new())
}

fn sorted(mut paths: Vec<PathValue>) -> Vec<PathValue> {
    paths.sort();
    paths
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_write_read_move_delete_round() {
    let tree = TempTree::new();
    let service = service();
    let draft = tree.path("draft.txt");
    let final_copy = tree.path("final.txt");

    service.write_text(&draft, "first").unwrap();
    assert!(service.exists(&draft));
    assert_eq!(service.read_text(&draft).unwrap(), "first");

    service.move_item(&draft, &final_copy).unwrap();
    assert!(!service.exists(&draft));
    assert_eq!(service.read(&final_copy).unwrap(), b"first");

    service.delete(&final_copy).unwrap();
    assert!(!service.exists(&final_copy));
}

#[test]
fn test_failures_are_values_not_panics() {
    let tree = TempTree::new();
    let service = service();
    let missing = tree.path("missing");

    assert!(!service.exists(&missing));
    assert!(!service.is_directory(&missing));
    assert!(service.read(&missing).unwrap_err().is_not_found());
    assert!(service.delete(&missing).unwrap_err().is_not_found());
    assert!(service.move_item(&missing, &tree.path("x")).is_err());
    assert!(service.write(&tree.path("no/such/dir/file"), b"x").is_err());
}

#[test]
fn test_delete_directory_recursively() {
    let tree = TempTree::new();
    tree.mkdir("a/b");
    tree.file("a/b/c.txt", "c");
    let service = service();

    service.delete(&tree.path("a")).unwrap();
    assert!(!service.exists(&tree.path("a")));
}

// =============================================================================
// Children
// =============================================================================

#[test]
fn test_children_lists_joined_paths() {
    let tree = TempTree::new();
    tree.mkdir("dir");
    tree.file("one.txt", "1");
    tree.file("two.txt", "2");
    let service = service();

    assert_eq!(
        sorted(service.children(&tree.root(), true)),
        vec![tree.path("dir"), tree.path("one.txt"), tree.path("two.txt")]
    );
    assert_eq!(
        sorted(service.children(&tree.root(), false)),
        vec![tree.path("one.txt"), tree.path("two.txt")]
    );
}

#[test]
fn test_children_of_root_with_trailing_separator() {
    let tree = TempTree::new();
    tree.file("only.txt", "");
    let service = service();

    let with_slash = PathValue::new(format!("{}/", tree.root()));
    assert_eq!(
        service.children(&with_slash, true),
        vec![tree.path("only.txt")]
    );
}

#[test]
fn test_children_empty_directory_and_nonexistent() {
    let tree = TempTree::new();
    let empty = tree.mkdir("empty");
    let file = tree.file("file.txt", "x");
    let service = service();

    assert!(service.children(&empty, true).is_empty());
    assert!(service.children(&tree.path("nonexistent"), true).is_empty());
    assert!(service.children(&file, true).is_empty());

    assert!(service.try_children(&empty, true).unwrap().is_empty());
    assert!(service
        .try_children(&tree.path("nonexistent"), true)
        .unwrap_err()
        .is_not_found());
    assert!(matches!(
        service.try_children(&file, true),
        Err(Error::NotADirectory { .. })
    ));
}

// =============================================================================
// Current directory
// =============================================================================

#[test]
fn test_absolute_of_absolute_is_normalize() {
    let service = service();
    let path = PathValue::new("/usr/./lib/../share//doc/");
    assert_eq!(service.absolute(&path).unwrap(), path.normalize());
}

#[test]
#[serial]
fn test_absolute_uses_current_directory() {
    let tree = TempTree::new();
    let service = service();

    service
        .scoped_change_directory(&tree.root(), || {
            let cwd = service.current_directory().unwrap();
            let resolved = service.absolute(&PathValue::new("docs/./file.txt")).unwrap();
            assert_eq!(resolved, cwd.join("docs/file.txt").normalize());
        })
        .unwrap();
}

#[test]
#[serial]
fn test_scoped_change_enters_and_restores() {
    let tree = TempTree::new();
    let service = service();
    let before = service.current_directory().unwrap();

    let inside = service
        .scoped_change_directory(&tree.root(), || service.current_directory().unwrap())
        .unwrap();

    assert!(same_directory(&inside, &tree.root()));
    assert_eq!(service.current_directory().unwrap(), before);
}

#[test]
#[serial]
fn test_scoped_change_restores_after_error() {
    let tree = TempTree::new();
    let service = service();
    let before = service.current_directory().unwrap();

    let outcome = service
        .scoped_change_directory(&tree.root(), || service.read(&PathValue::new("missing")))
        .unwrap();

    assert!(outcome.unwrap_err().is_not_found());
    assert_eq!(service.current_directory().unwrap(), before);
}

#[test]
#[serial]
fn test_scoped_change_restores_after_panic() {
    let tree = TempTree::new();
    let service = service();
    let before = service.current_directory().unwrap();

    let caught = panic::catch_unwind(AssertUnwindSafe(|| {
        service.scoped_change_directory(&tree.root(), || panic!("abort inside scope"))
    }));

    assert!(caught.is_err());
    assert_eq!(service.current_directory().unwrap(), before);
}

#[test]
#[serial]
fn test_scoped_change_into_missing_directory() {
    let tree = TempTree::new();
    let service = service();
    let before = service.current_directory().unwrap();

    let result = service.scoped_change_directory(&tree.path("missing"), || ());
    assert!(result.unwrap_err().is_not_found());
    assert_eq!(service.current_directory().unwrap(), before);
}

#[test]
#[serial]
fn test_relative_queries_inside_scope() {
    let tree = TempTree::new();
    tree.file("local.txt", "here");
    let service = service();

    let contents = service
        .scoped_change_directory(&tree.root(), || {
            service.read_text(&PathValue::new("local.txt"))
        })
        .unwrap()
        .unwrap();
    assert_eq!(contents, "here");
}

//! Integration tests for the move engine.

use folderhub_core::error::FolderError;

use super::helpers::{TestStore, assert_prefix_invariant, paths};

#[test]
fn move_bravo_under_delta() {
    let mut store = TestStore::new();

    let got = store
        .driver
        .move_folder("bravo", "delta")
        .expect("valid move");
    assert_eq!(
        paths(&got),
        [
            "alpha",
            "alpha.delta.bravo",
            "alpha.delta.bravo.charlie",
            "alpha.delta",
            "alpha.delta.echo",
            "foxtrot",
            "golf",
        ]
    );
    assert_prefix_invariant(&got);
}

#[test]
fn move_bravo_under_golf() {
    let mut store = TestStore::new();

    let got = store
        .driver
        .move_folder("bravo", "golf")
        .expect("valid move");
    assert_eq!(
        paths(&got),
        [
            "alpha",
            "golf.bravo",
            "golf.bravo.charlie",
            "alpha.delta",
            "alpha.delta.echo",
            "foxtrot",
            "golf",
        ]
    );
    assert_prefix_invariant(&got);
}

#[test]
fn move_preserves_relative_suffixes_and_unrelated_paths() {
    let mut store = TestStore::new();
    let before = store.driver.folders().to_vec();

    let got = store
        .driver
        .move_folder("alpha", "golf")
        .expect("valid move");

    for (old, new) in before.iter().zip(got.iter()) {
        if old.path == "alpha" || old.is_descendant_of("alpha") {
            // Moved subtree: new path is the new root plus the unchanged
            // relative suffix.
            let suffix = &old.path["alpha".len()..];
            assert_eq!(new.path, format!("golf.alpha{suffix}"));
        } else {
            // Unrelated folders are byte-for-byte unchanged.
            assert_eq!(old.path, new.path);
        }
    }
    assert_prefix_invariant(&got);
}

#[test]
fn subsequent_queries_observe_the_move() {
    let mut store = TestStore::new();

    store
        .driver
        .move_folder("bravo", "golf")
        .expect("valid move");

    let children = store
        .driver
        .get_all_child_folders(store.org1, "golf")
        .expect("golf exists in org1");
    assert_eq!(paths(&children), ["golf.bravo", "golf.bravo.charlie"]);

    let children = store
        .driver
        .get_all_child_folders(store.org1, "alpha")
        .expect("alpha exists in org1");
    assert_eq!(paths(&children), ["alpha.delta", "alpha.delta.echo"]);
}

#[test]
fn move_to_itself_is_rejected() {
    let mut store = TestStore::new();

    let err = store.driver.move_folder("bravo", "bravo").unwrap_err();
    assert_eq!(err, FolderError::CannotMoveToSelf);
}

#[test]
fn move_to_own_descendant_is_rejected() {
    let mut store = TestStore::new();

    let err = store.driver.move_folder("bravo", "charlie").unwrap_err();
    assert_eq!(err, FolderError::CannotMoveToChild);
}

#[test]
fn move_across_orgs_is_rejected_and_store_unmodified() {
    let mut store = TestStore::new();
    let before = store.driver.folders().to_vec();

    let err = store.driver.move_folder("bravo", "foxtrot").unwrap_err();
    assert_eq!(err, FolderError::CannotMoveBetweenOrgs);
    assert_eq!(store.driver.folders(), before.as_slice());
}

#[test]
fn move_with_missing_source_or_destination() {
    let mut store = TestStore::new();

    let err = store
        .driver
        .move_folder("nonexistent", "delta")
        .unwrap_err();
    assert_eq!(err, FolderError::SourceFolderNotFound);

    let err = store
        .driver
        .move_folder("bravo", "nonexistent")
        .unwrap_err();
    assert_eq!(err, FolderError::DestinationFolderNotFound);
}

#[test]
fn chained_moves_keep_the_hierarchy_consistent() {
    let mut store = TestStore::new();

    store
        .driver
        .move_folder("bravo", "delta")
        .expect("valid move");
    store
        .driver
        .move_folder("delta", "golf")
        .expect("valid move");

    let got = store.driver.folders().to_vec();
    assert_eq!(
        paths(&got),
        [
            "alpha",
            "golf.delta.bravo",
            "golf.delta.bravo.charlie",
            "golf.delta",
            "golf.delta.echo",
            "foxtrot",
            "golf",
        ]
    );
    assert_prefix_invariant(&got);
}

//! Integration tests for the query operations.

use folderhub_core::error::FolderError;
use folderhub_core::types::OrgId;

use super::helpers::{TestStore, names, paths};

#[test]
fn get_folders_by_org_id_returns_org_subset_in_order() {
    let store = TestStore::new();

    let got = store.driver.get_folders_by_org_id(store.org1);
    assert_eq!(
        names(&got),
        ["alpha", "bravo", "charlie", "delta", "echo", "golf"]
    );

    let got = store.driver.get_folders_by_org_id(store.org2);
    assert_eq!(names(&got), ["foxtrot"]);
}

#[test]
fn get_folders_by_org_id_unknown_org_returns_empty() {
    let store = TestStore::new();
    let got = store.driver.get_folders_by_org_id(OrgId::new());
    assert!(got.is_empty());
}

#[test]
fn get_all_child_folders_returns_strict_descendants() {
    let store = TestStore::new();

    let got = store
        .driver
        .get_all_child_folders(store.org1, "alpha")
        .expect("alpha exists in org1");
    assert_eq!(
        paths(&got),
        [
            "alpha.bravo",
            "alpha.bravo.charlie",
            "alpha.delta",
            "alpha.delta.echo",
        ]
    );
}

#[test]
fn get_all_child_folders_of_leaf_returns_empty_not_error() {
    let store = TestStore::new();

    let got = store
        .driver
        .get_all_child_folders(store.org1, "echo")
        .expect("echo exists in org1");
    assert!(got.is_empty());
}

#[test]
fn get_all_child_folders_unknown_name() {
    let store = TestStore::new();

    let err = store
        .driver
        .get_all_child_folders(store.org1, "invalid_folder")
        .unwrap_err();
    assert_eq!(err, FolderError::FolderNotFound);
}

#[test]
fn get_all_child_folders_name_in_other_org() {
    let store = TestStore::new();

    let err = store
        .driver
        .get_all_child_folders(store.org1, "foxtrot")
        .unwrap_err();
    assert_eq!(err, FolderError::FolderNotInOrg);
}

#[test]
fn queries_do_not_mutate_the_store() {
    let store = TestStore::new();
    let before = store.driver.folders().to_vec();

    let _ = store.driver.get_folders_by_org_id(store.org1);
    let _ = store.driver.get_all_child_folders(store.org1, "alpha");
    let _ = store.driver.get_all_child_folders(store.org2, "alpha");

    assert_eq!(store.driver.folders(), before.as_slice());
}

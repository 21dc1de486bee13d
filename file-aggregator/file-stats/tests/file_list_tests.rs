// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use file_aggregator_file_stats::{read_file_list, SetupError};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_liveness_read_paths_in_order_skipping_blanks() {
    let dir = TempDir::new().unwrap();
    let list_path = dir.path().join("filelist.txt");
    fs::write(&list_path, "b.txt\n\n  a.txt  \n\t\nsub/c.txt\n").unwrap();

    let list = read_file_list(&list_path).await.unwrap();

    assert_eq!(list.paths, vec!["b.txt", "a.txt", "sub/c.txt"]);
    assert_eq!(list.base_dir, dir.path());
    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn test_liveness_empty_list_is_valid() {
    let dir = TempDir::new().unwrap();
    let list_path = dir.path().join("filelist.txt");
    fs::write(&list_path, "\n\n").unwrap();

    let list = read_file_list(&list_path).await.unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_safety_missing_list_is_a_setup_error() {
    let dir = TempDir::new().unwrap();
    let list_path = dir.path().join("nope.txt");

    let result = read_file_list(&list_path).await;

    match result {
        Err(SetupError::ListUnreadable { path, .. }) => assert_eq!(path, list_path),
        other => panic!("Expected ListUnreadable, got {:?}", other),
    }
}

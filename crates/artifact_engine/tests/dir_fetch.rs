use std::fs;

use artifact_engine::{DirFetcher, FailureKind, Fetcher};
use tempfile::TempDir;

const MAX_BYTES: u64 = 1024;

#[tokio::test]
async fn reads_existing_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("last_execution_result.json"), r#"{"ok":true}"#).unwrap();

    let fetcher = DirFetcher::new(temp.path(), MAX_BYTES);
    let response = fetcher.read("/last_execution_result.json").await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"ok":true}"#);
}

#[tokio::test]
async fn reads_nested_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("runs")).unwrap();
    fs::write(temp.path().join("runs").join("log.txt"), "line one\n").unwrap();

    let fetcher = DirFetcher::new(temp.path(), MAX_BYTES);
    let response = fetcher.read("/runs/./log.txt").await.unwrap();

    assert_eq!(response.body, "line one\n");
}

#[tokio::test]
async fn missing_file_is_404() {
    let temp = TempDir::new().unwrap();
    let fetcher = DirFetcher::new(temp.path(), MAX_BYTES);

    let response = fetcher.read("/nope.json").await.unwrap();
    assert_eq!(response.status, 404);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn directory_is_404() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    let fetcher = DirFetcher::new(temp.path(), MAX_BYTES);

    assert_eq!(fetcher.read("/sub").await.unwrap().status, 404);
}

#[tokio::test]
async fn parent_components_are_rejected() {
    let temp = TempDir::new().unwrap();
    let fetcher = DirFetcher::new(temp.path().join("public"), MAX_BYTES);

    let err = fetcher.read("/../secret.json").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidPath);
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("big.txt"), "x".repeat(32)).unwrap();
    let fetcher = DirFetcher::new(temp.path(), 16);

    let err = fetcher.read("/big.txt").await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 16,
            actual: Some(32)
        }
    );
}

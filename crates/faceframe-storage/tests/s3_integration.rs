//! S3 integration tests.
//!
//! These tests require real bucket credentials to be available.
//! Run with: `cargo test --test s3_integration -- --ignored`

use faceframe_storage::{BlobStore, S3BlobStore};

/// Test S3 connection and bucket access.
#[tokio::test]
#[ignore = "requires S3 credentials"]
async fn test_s3_connection() {
    dotenvy::dotenv().ok();

    let store = S3BlobStore::from_env("UNPROCESSED_BUCKET")
        .await
        .expect("Failed to create S3 store");

    store
        .check_connectivity()
        .await
        .expect("Failed to check S3 connectivity");

    println!("S3 connectivity check passed");
}

/// Test byte upload, existence check, and download cycle.
#[tokio::test]
#[ignore = "requires S3 credentials"]
async fn test_upload_download() {
    dotenvy::dotenv().ok();

    let store = S3BlobStore::from_env("PROCESSED_BUCKET")
        .await
        .expect("Failed to create S3 store");

    let key = "test/integration/roundtrip.bin";
    let payload = b"Integration test content".to_vec();

    store
        .upload_bytes(key, payload.clone(), "application/octet-stream")
        .await
        .expect("Failed to upload bytes");

    assert!(store.exists(key).await.expect("Failed to head object"));

    let downloaded = store
        .download_bytes(key)
        .await
        .expect("Failed to download bytes");

    assert_eq!(downloaded, payload);
    println!("Round-tripped {} bytes", downloaded.len());
}

/// Missing keys surface as NotFound, not a generic failure.
#[tokio::test]
#[ignore = "requires S3 credentials"]
async fn test_missing_key_is_not_found() {
    dotenvy::dotenv().ok();

    let store = S3BlobStore::from_env("UNPROCESSED_BUCKET")
        .await
        .expect("Failed to create S3 store");

    let err = store
        .download_bytes("test/integration/definitely-missing.bin")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        faceframe_storage::StorageError::NotFound(_) | faceframe_storage::StorageError::DownloadFailed(_)
    ));
}

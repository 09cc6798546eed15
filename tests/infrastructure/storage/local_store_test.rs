use bytes::Bytes;
use futures::stream::{self, StreamExt};

use speakwell::application::ports::{StagingStore, StagingStoreError};
use speakwell::domain::{AudioFormat, StoragePath, UploadId};
use speakwell::infrastructure::storage::LocalStagingStore;

fn chunks(parts: &[&'static [u8]]) -> futures::stream::BoxStream<'static, Result<Bytes, std::io::Error>> {
    let items: Vec<Result<Bytes, std::io::Error>> =
        parts.iter().map(|p| Ok(Bytes::from_static(p))).collect();
    stream::iter(items).boxed()
}

#[tokio::test]
async fn given_streamed_chunks_when_storing_then_file_is_written_under_base_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new(&UploadId::new(), AudioFormat::Wav);

    let written = store
        .store(&path, chunks(&[b"RIFF", b"....", b"WAVE"]))
        .await
        .unwrap();

    assert_eq!(written, 12);
    let on_disk = std::fs::read(dir.path().join(path.as_str())).unwrap();
    assert_eq!(on_disk, b"RIFF....WAVE");
}

#[tokio::test]
async fn given_stored_upload_when_fetching_then_same_bytes_are_returned() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new(&UploadId::new(), AudioFormat::M4a);

    store.store(&path, chunks(&[b"ftypM4A "])).await.unwrap();
    let fetched = store.fetch(&path).await.unwrap();

    assert_eq!(fetched.as_ref(), b"ftypM4A ");
}

#[tokio::test]
async fn given_unknown_upload_when_fetching_then_not_found_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new(&UploadId::new(), AudioFormat::Mp3);

    let result = store.fetch(&path).await;

    assert!(matches!(result, Err(StagingStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_failing_stream_when_storing_then_io_error_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new(&UploadId::new(), AudioFormat::Wav);
    let items: Vec<Result<Bytes, std::io::Error>> = vec![
        Ok(Bytes::from_static(b"partial")),
        Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "client went away")),
    ];

    let result = store.store(&path, stream::iter(items).boxed()).await;

    assert!(matches!(result, Err(StagingStoreError::Io(_))));
}

#[tokio::test]
async fn given_missing_directory_when_creating_store_then_it_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join("uploads");

    let store = LocalStagingStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
}

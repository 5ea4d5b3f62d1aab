use bytes::Bytes;

use auralens::application::ports::{AudioStore, AudioStoreError};
use auralens::domain::{AudioKey, DescriptionVariant, Voice, identity_of};
use auralens::infrastructure::storage::{AudioStoreFactory, ObjectAudioStore};
use auralens::presentation::config::{StorageProviderSetting, StorageSettings};

fn create_test_store() -> (tempfile::TempDir, ObjectAudioStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ObjectAudioStore::local(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

fn test_key(voice: Voice) -> AudioKey {
    AudioKey::new(identity_of(b"pixels"), DescriptionVariant::detailed(), voice)
}

#[tokio::test]
async fn given_written_blob_when_reading_then_bytes_match() {
    let (_dir, store) = create_test_store();
    let key = test_key(Voice::Female);

    store
        .write_blob(&key, Bytes::from_static(b"RIFFdata"))
        .await
        .unwrap();

    assert!(store.blob_exists(&key).await.unwrap());
    assert_eq!(store.read_blob(&key).await.unwrap(), &b"RIFFdata"[..]);
}

#[tokio::test]
async fn given_written_blob_then_file_name_matches_key() {
    let (dir, store) = create_test_store();
    let key = test_key(Voice::Male);

    store
        .write_blob(&key, Bytes::from_static(b"RIFF"))
        .await
        .unwrap();

    assert!(dir.path().join(key.file_name()).is_file());
}

#[tokio::test]
async fn given_missing_blob_when_checking_then_not_exists() {
    let (_dir, store) = create_test_store();

    assert!(!store.blob_exists(&test_key(Voice::Female)).await.unwrap());
}

#[tokio::test]
async fn given_missing_blob_when_reading_then_not_found() {
    let (_dir, store) = create_test_store();

    let result = store.read_blob(&test_key(Voice::Female)).await;

    assert!(matches!(result, Err(AudioStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_existing_blob_when_overwriting_then_latest_bytes_win() {
    let store = ObjectAudioStore::in_memory();
    let key = test_key(Voice::Female);

    store.write_blob(&key, Bytes::from_static(b"one")).await.unwrap();
    store.write_blob(&key, Bytes::from_static(b"two")).await.unwrap();

    assert_eq!(store.read_blob(&key).await.unwrap(), &b"two"[..]);
}

#[tokio::test]
async fn given_deleted_blob_when_checking_then_not_exists() {
    let store = ObjectAudioStore::in_memory();
    let key = test_key(Voice::Female);
    store.write_blob(&key, Bytes::from_static(b"x")).await.unwrap();

    store.delete_blob(&key).await.unwrap();
    store.delete_blob(&key).await.unwrap();

    assert!(!store.blob_exists(&key).await.unwrap());
}

#[tokio::test]
async fn given_local_provider_when_creating_from_settings_then_creates_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("audio");
    let settings = StorageSettings {
        provider: StorageProviderSetting::Local,
        local_path: root.to_string_lossy().into_owned(),
        ..StorageSettings::default()
    };

    let store = AudioStoreFactory::create(&settings).unwrap();

    assert!(root.is_dir());
    assert!(!store.blob_exists(&test_key(Voice::Female)).await.unwrap());
}

#[test]
fn given_azure_provider_without_account_when_creating_then_unavailable() {
    let settings = StorageSettings {
        provider: StorageProviderSetting::Azure,
        ..StorageSettings::default()
    };

    let result = AudioStoreFactory::create(&settings);

    assert!(matches!(result, Err(AudioStoreError::Unavailable(_))));
}

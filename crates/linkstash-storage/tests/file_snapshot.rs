use linkstash_core::{Slug, UrlMapping};
use linkstash_storage::{JsonFileSnapshot, SnapshotStore, StorageError};
use tempfile::TempDir;

fn mapping(slug: &str, url: &str) -> UrlMapping {
    UrlMapping::new(Slug::new(slug).unwrap(), url, "https://short.ly")
}

#[tokio::test]
async fn missing_file_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let snapshot = JsonFileSnapshot::new(dir.path());

    assert!(snapshot.load().await.unwrap().is_none());
}

#[tokio::test]
async fn save_creates_directory_and_file() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("state").join("links");
    let snapshot = JsonFileSnapshot::new(&nested);

    snapshot
        .save(&[mapping("abc123", "https://example.com/a")])
        .await
        .unwrap();

    assert!(nested.join("urlList.json").exists());
    assert!(!nested.join("urlList.json.tmp").exists());
}

#[tokio::test]
async fn repeated_saves_replace_the_file_in_place() {
    let dir = TempDir::new().unwrap();
    let snapshot = JsonFileSnapshot::new(dir.path());

    snapshot
        .save(&[mapping("abc123", "https://example.com/a")])
        .await
        .unwrap();
    snapshot
        .save(&[
            mapping("abc123", "https://example.com/a"),
            mapping("def456", "https://example.com/b"),
        ])
        .await
        .unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, ["urlList.json"]);
    assert_eq!(snapshot.load().await.unwrap().unwrap().len(), 2);
}

#[tokio::test]
async fn saved_snapshot_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let mappings = vec![
        mapping("abc123", "https://example.com/a"),
        mapping("def456", "https://example.com/b"),
    ];

    JsonFileSnapshot::new(dir.path())
        .save(&mappings)
        .await
        .unwrap();

    let reopened = JsonFileSnapshot::new(dir.path());
    let loaded = reopened.load().await.unwrap().unwrap();
    assert_eq!(loaded, mappings);
}

#[tokio::test]
async fn file_holds_a_plain_json_array() {
    let dir = TempDir::new().unwrap();
    let snapshot = JsonFileSnapshot::new(dir.path());

    snapshot
        .save(&[mapping("abc123", "https://example.com/a")])
        .await
        .unwrap();

    let raw = std::fs::read_to_string(snapshot.path()).unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"longUrl\":\"https://example.com/a\""));
    assert!(raw.contains("\"shortUrl\":\"https://short.ly/abc123\""));
    assert!(raw.contains("\"slug\":\"abc123\""));
}

#[tokio::test]
async fn reads_snapshot_written_without_created_at() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("urlList.json"),
        r#"[{"longUrl":"https://example.com","shortUrl":"https://short.ly/k3x9qa","slug":"k3x9qa"}]"#,
    )
    .unwrap();

    let loaded = JsonFileSnapshot::new(dir.path())
        .load()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].slug().as_str(), "k3x9qa");
    assert_eq!(loaded[0].created_at(), None);
}

#[tokio::test]
async fn corrupt_file_is_invalid_data() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("urlList.json"), "definitely not json").unwrap();

    let err = JsonFileSnapshot::new(dir.path()).load().await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));
}

#[tokio::test]
async fn keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let first = JsonFileSnapshot::with_key(dir.path(), "first");
    let second = JsonFileSnapshot::with_key(dir.path(), "second");

    first
        .save(&[mapping("abc123", "https://example.com/a")])
        .await
        .unwrap();

    assert!(second.load().await.unwrap().is_none());
    assert_eq!(first.load().await.unwrap().unwrap().len(), 1);
}

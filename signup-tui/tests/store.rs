use signup_tui::store::{FormStore, MemoryBackend, SqliteBackend};

#[tokio::test]
async fn typed_round_trip_for_strings_and_bools() {
    let store = FormStore::new(MemoryBackend::new());

    store.set("fullName", &"Ada".to_string()).await.unwrap();
    store.set("terms", &true).await.unwrap();

    assert_eq!(
        store.get::<String>("fullName").await.unwrap(),
        Some("Ada".to_string())
    );
    assert_eq!(store.get::<bool>("terms").await.unwrap(), Some(true));
    assert_eq!(store.get::<String>("email").await.unwrap(), None);
}

#[tokio::test]
async fn last_write_wins() {
    let store = FormStore::new(MemoryBackend::new());

    store.set("phone", &"0".to_string()).await.unwrap();
    store.set("phone", &"01".to_string()).await.unwrap();
    store.set("phone", &"012".to_string()).await.unwrap();

    assert_eq!(
        store.get::<String>("phone").await.unwrap(),
        Some("012".to_string())
    );
}

#[tokio::test]
async fn delete_removes_the_entry() {
    let store = FormStore::new(MemoryBackend::new());

    store.set("email", &"a@b.c".to_string()).await.unwrap();
    store.delete("email").await.unwrap();
    assert_eq!(store.get::<String>("email").await.unwrap(), None);

    // Deleting a missing key is not an error.
    store.delete("email").await.unwrap();
}

#[tokio::test]
async fn sqlite_backend_persists_across_reopens() {
    let path = std::env::temp_dir().join(format!("signup-store-test-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let store = FormStore::new(SqliteBackend::new(&path).await.unwrap());
        store.set("fullName", &"Ada".to_string()).await.unwrap();
    }

    let store = FormStore::new(SqliteBackend::new(&path).await.unwrap());
    assert_eq!(
        store.get::<String>("fullName").await.unwrap(),
        Some("Ada".to_string())
    );

    let _ = std::fs::remove_file(&path);
}

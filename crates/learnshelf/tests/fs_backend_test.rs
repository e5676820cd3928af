use chrono::Utc;
use learnshelf::draft::ResourceDraft;
use learnshelf::error::ShelfError;
use learnshelf::filter::{filter_resources, FilterSelection};
use learnshelf::model::{Category, Level, Progress, ResourceLink, Status};
use learnshelf::session::Session;
use learnshelf::stats::compute_stats;
use learnshelf::store::backend::StorageBackend;
use learnshelf::store::fs::FileStore;
use learnshelf::store::fs_backend::{FsBackend, CATEGORIES_FILE, RESOURCES_FILE};
use learnshelf::store::DataStore;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

fn assert_no_tmp_files(dir: &std::path::Path) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_missing_files_are_empty_tables() {
    let (_dir, backend) = setup();
    assert!(backend.load_resources().unwrap().is_empty());
    assert!(backend.load_categories().unwrap().is_empty());
}

#[test]
fn test_blank_file_is_empty_table() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    fs::write(backend.root().join(RESOURCES_FILE), "  \n").unwrap();
    assert!(backend.load_resources().unwrap().is_empty());
}

#[test]
fn test_category_table_io() {
    let (_dir, backend) = setup();
    let categories = vec![
        Category::new("Web".into(), None, None),
        Category::new("Systems".into(), Some("Low level".into()), Some("#ef4444".into())),
    ];

    backend.save_categories(&categories).unwrap();
    assert!(backend.root().join(CATEGORIES_FILE).exists());
    assert_no_tmp_files(backend.root());

    assert_eq!(backend.load_categories().unwrap(), categories);
}

#[test]
fn test_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    let mut store = FileStore::new(backend.root().to_path_buf());
    let session = Session::new("ada").unwrap();

    store
        .create_resource(&session, ResourceDraft::new("Atomic"))
        .unwrap();

    let on_disk = fs::read_to_string(backend.root().join(RESOURCES_FILE)).unwrap();
    assert!(on_disk.contains("\"title\": \"Atomic\""));
    assert!(on_disk.contains("\"status\": \"not-started\""));
    assert_no_tmp_files(backend.root());
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("shelf");
    let session = Session::new("ada").unwrap();

    let created = {
        let mut store = FileStore::new(data_dir.clone());
        let web = store.create_category("Web", None, None).unwrap();

        let mut draft = ResourceDraft::new("MDN");
        draft.category_id = Some(web.id);
        draft.level = Level::Intermediate;
        draft.progress = Progress::new(20).unwrap();
        draft.links.push(ResourceLink {
            title: String::new(),
            url: "https://developer.mozilla.org".into(),
        });
        store.create_resource(&session, draft).unwrap()
    };

    let store = FileStore::new(data_dir);
    let loaded = store.get_resource(&session, &created.id).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.links[0].title, "https://developer.mozilla.org");
    assert_eq!(store.load_categories().unwrap()[0].name, "Web");
}

#[test]
fn test_malformed_rows_decode_as_unknown() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    let now = Utc::now().to_rfc3339();
    let raw = format!(
        r#"[
            {{"id": "{a}", "user_id": "ada", "title": "No status", "created_at": "{now}", "updated_at": "{now}"}},
            {{"id": "{b}", "user_id": "ada", "title": "Odd", "status": "paused", "level": "expert", "progress": 140, "created_at": "{now}", "updated_at": "{now}"}},
            {{"id": "{c}", "user_id": "ada", "title": "Fine", "status": "completed", "level": "beginner", "priority": "medium", "progress": 100, "created_at": "{now}", "updated_at": "{now}"}}
        ]"#,
        a = Uuid::new_v4(),
        b = Uuid::new_v4(),
        c = Uuid::new_v4(),
        now = now
    );
    fs::write(backend.root().join(RESOURCES_FILE), raw).unwrap();

    let store = FileStore::new(backend.root().to_path_buf());
    let session = Session::new("ada").unwrap();
    let resources = store.load_resources(&session).unwrap();
    assert_eq!(resources.len(), 3);

    let odd = resources.iter().find(|r| r.title == "Odd").unwrap();
    assert_eq!(odd.status, Status::Unknown);
    assert_eq!(odd.level, Level::Unknown);
    assert_eq!(odd.progress.value(), 100);

    // Unknown rows count towards the total and the average only.
    let stats = compute_stats(&resources);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.not_started, 0);
    assert_eq!(stats.in_progress, 0);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.avg_progress, 200.0 / 3.0);

    let not_started = FilterSelection::new().with_status(Status::NotStarted);
    assert!(filter_resources(resources.clone(), &not_started).is_empty());
    let beginner = FilterSelection::new().with_level(Level::Beginner);
    let titles: Vec<String> = filter_resources(resources, &beginner)
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Fine"]);
}

#[test]
fn test_other_users_rows_survive_a_write_byte_for_byte() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    let bob = json!({
        "id": Uuid::new_v4().to_string(),
        "user_id": "bob",
        "title": "Bob's import",
        "status": "archived",
        "progress": 250,
        "created_at": "2023-05-01T00:00:00Z",
        "updated_at": "2023-05-01T00:00:00Z"
    });
    let before = serde_json::to_string_pretty(&json!([bob])).unwrap();
    fs::write(backend.root().join(RESOURCES_FILE), &before).unwrap();

    let mut store = FileStore::new(backend.root().to_path_buf());
    let alice = Session::new("alice").unwrap();
    let mine = store
        .create_resource(&alice, ResourceDraft::new("Alice's"))
        .unwrap();
    store
        .update_resource(&alice, &mine.id, ResourceDraft::new("Alice's, edited"))
        .unwrap();

    let after = fs::read_to_string(backend.root().join(RESOURCES_FILE)).unwrap();
    let bob_block = before
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim_end();
    assert!(after.contains(bob_block), "bob's row was rewritten:\n{}", after);
    assert!(after.contains("\"status\": \"archived\""));
    assert!(after.contains("\"progress\": 250"));

    let rows: Vec<serde_json::Value> = serde_json::from_str(&after).unwrap();
    assert_eq!(rows[0], bob);
}

#[test]
fn test_failed_write_cleans_up_tmp_file() {
    let (_dir, backend) = setup();
    // A non-empty directory where the table should be makes the rename fail.
    let blocked = backend.root().join(RESOURCES_FILE);
    fs::create_dir_all(&blocked).unwrap();
    fs::write(blocked.join("occupied"), "x").unwrap();

    let result = backend.save_resources(&[json!({"id": "x"})]);
    assert!(matches!(result, Err(ShelfError::Io(_))));
    assert_no_tmp_files(backend.root());
}

#[test]
fn test_corrupt_table_is_an_error() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    fs::write(backend.root().join(RESOURCES_FILE), "{not json").unwrap();
    assert!(backend.load_resources().is_err());
}

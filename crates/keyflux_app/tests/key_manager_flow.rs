use keyflux_app::{
    FETCH_FAILED_MESSAGE, KeyManager, StatusKind, UPDATE_FAILED_MESSAGE, UPDATE_SUCCEEDED_MESSAGE,
};
use keyflux_core::{KeyStore, Value};
use keyflux_test_support::FakeStore;
use serde_json::json;

/// Mount: one whole-tree read folded into a fresh manager.
fn mount(store: &dyn KeyStore) -> KeyManager {
    let mut manager = KeyManager::new();
    manager.finish_load(store.read_all());
    manager
}

/// Press save and apply the write result.
fn save(manager: &mut KeyManager, store: &dyn KeyStore) {
    let request = manager.save().expect("an edit session should be open");
    let result = store.write_value(&request.key, &request.value);
    manager.finish_save(&request, result);
}

fn row_text(manager: &KeyManager) -> Vec<String> {
    manager
        .rows()
        .into_iter()
        .map(|row| format!("{}: {}", row.key, row.display_value))
        .collect()
}

#[test]
fn edit_and_save_updates_row_and_store() {
    let store = FakeStore::new().with_json(json!({"greeting": "hi"}));
    let mut manager = mount(&store);
    assert_eq!(row_text(&manager), vec!["greeting: hi"]);

    manager.begin_edit("greeting");
    manager.update_buffer("hello");
    save(&mut manager, &store);

    assert_eq!(row_text(&manager), vec!["greeting: hello"]);
    let status = manager.status().unwrap();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, UPDATE_SUCCEEDED_MESSAGE);
    assert!(manager.edit_session().is_none());
    assert_eq!(
        store.stats().writes,
        vec![("greeting".to_string(), Value::from("hello"))]
    );
}

#[test]
fn empty_root_renders_no_rows_and_no_banner() {
    let store = FakeStore::new();
    let manager = mount(&store);

    assert!(manager.rows().is_empty());
    assert!(manager.status().is_none());
    assert_eq!(store.stats().read_calls, 1);
}

#[test]
fn failed_read_renders_fetch_error_banner() {
    let store = FakeStore::new().with_read_error("network unreachable");
    let manager = mount(&store);

    assert!(manager.rows().is_empty());
    let status = manager.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, FETCH_FAILED_MESSAGE);
}

#[test]
fn saving_text_over_nested_value_replaces_it() {
    let store = FakeStore::new().with_json(json!({"config": {"nested": true}}));
    let mut manager = mount(&store);
    assert_eq!(row_text(&manager), vec![r#"config: {"nested":true}"#]);

    manager.begin_edit("config");
    manager.update_buffer("x");
    save(&mut manager, &store);

    assert_eq!(manager.tree().get("config"), Some(&Value::from("x")));
    let server = store.tree().unwrap();
    assert_eq!(server.get("config"), Some(&Value::from("x")));
}

#[test]
fn failed_write_keeps_tree_and_closes_session() {
    let store = FakeStore::new()
        .with_json(json!({"greeting": "hi"}))
        .with_write_error("permission denied");
    let mut manager = mount(&store);

    manager.begin_edit("greeting");
    manager.update_buffer("hello");
    save(&mut manager, &store);

    assert_eq!(row_text(&manager), vec!["greeting: hi"]);
    assert_eq!(manager.status().unwrap().text, UPDATE_FAILED_MESSAGE);
    assert!(manager.edit_session().is_none());

    store.set_write_error(None);
    manager.begin_edit("greeting");
    manager.update_buffer("hello");
    save(&mut manager, &store);

    assert_eq!(row_text(&manager), vec!["greeting: hello"]);
}

#[test]
fn rows_list_every_top_level_key_once() {
    let store = FakeStore::new().with_json(json!({
        "a": 1,
        "b": "two",
        "c": false,
        "d": {"deep": [1, 2]},
    }));
    let manager = mount(&store);

    let mut keys: Vec<String> = manager.rows().into_iter().map(|row| row.key).collect();
    let server_keys: Vec<String> = store
        .tree()
        .unwrap()
        .keys()
        .map(str::to_string)
        .collect();
    assert_eq!(keys, server_keys);

    keys.dedup();
    assert_eq!(keys.len(), 4);
}

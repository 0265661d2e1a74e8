//! Behavior every `KeyStore` implementation must share.

use keyflux_core::{KeyStore, Snapshot, Value};

/// Write `key` twice and check each write is visible in a whole-tree read
/// without disturbing the other top-level keys.
pub fn check_key_store(store: &dyn KeyStore, key: &str) {
    store
        .write_value(key, &Value::from("first"))
        .expect("first write should succeed");

    let before = match store.read_all().expect("read after write should succeed") {
        Snapshot::Exists(tree) => tree,
        Snapshot::Empty => panic!("store is empty right after a write"),
    };
    assert_eq!(before.get(key), Some(&Value::from("first")));

    store
        .write_value(key, &Value::from("second"))
        .expect("overwrite should succeed");

    let after = store
        .read_all()
        .expect("read after overwrite should succeed")
        .into_tree()
        .expect("store is empty right after a write");

    assert_eq!(after.get(key), Some(&Value::from("second")));
    assert_eq!(after.len(), before.len());

    for (other_key, other_value) in before.iter().filter(|(k, _)| *k != key) {
        assert_eq!(after.get(other_key), Some(other_value));
    }
}

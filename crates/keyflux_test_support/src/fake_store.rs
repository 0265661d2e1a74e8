use keyflux_core::{KeyStore, Snapshot, StoreError, Tree, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Default)]
pub struct FakeStoreStats {
    pub read_calls: usize,
    pub writes: Vec<(String, Value)>,
}

#[derive(Default)]
struct FakeStoreState {
    tree: RwLock<Option<Tree>>,
    read_error: RwLock<Option<String>>,
    write_error: RwLock<Option<String>>,
    read_calls: AtomicUsize,
    writes: Mutex<Vec<(String, Value)>>,
}

/// In-memory `KeyStore` with scriptable failures.
///
/// Clones share state, so a test can keep one handle for assertions while the
/// code under test owns another.
#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<FakeStoreState>,
}

impl FakeStore {
    /// A store whose root holds no data.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(self, tree: Tree) -> Self {
        *rwlock_write(&self.state.tree) = Some(tree);
        self
    }

    /// Build the tree from a JSON object literal.
    pub fn with_json(self, json: serde_json::Value) -> Self {
        let tree = match json {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (k, Value::from_json(v)))
                .collect(),
            other => panic!("FakeStore::with_json expects an object, got {}", other),
        };
        self.with_tree(tree)
    }

    pub fn with_read_error(self, message: impl Into<String>) -> Self {
        *rwlock_write(&self.state.read_error) = Some(message.into());
        self
    }

    pub fn with_write_error(self, message: impl Into<String>) -> Self {
        self.set_write_error(Some(message.into()));
        self
    }

    pub fn set_write_error(&self, message: Option<String>) {
        *rwlock_write(&self.state.write_error) = message;
    }

    /// Current server-side contents, `None` when the root is empty.
    pub fn tree(&self) -> Option<Tree> {
        rwlock_read(&self.state.tree).clone()
    }

    pub fn stats(&self) -> FakeStoreStats {
        FakeStoreStats {
            read_calls: self.state.read_calls.load(Ordering::Relaxed),
            writes: mutex_lock(&self.state.writes).clone(),
        }
    }

    pub fn as_store_arc(self) -> Arc<dyn KeyStore> {
        Arc::new(self)
    }
}

impl KeyStore for FakeStore {
    fn read_all(&self) -> Result<Snapshot, StoreError> {
        self.state.read_calls.fetch_add(1, Ordering::Relaxed);

        if let Some(message) = rwlock_read(&self.state.read_error).clone() {
            return Err(StoreError::transport(message));
        }

        Ok(match rwlock_read(&self.state.tree).clone() {
            Some(tree) if !tree.is_empty() => Snapshot::Exists(tree),
            _ => Snapshot::Empty,
        })
    }

    fn write_value(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        mutex_lock(&self.state.writes).push((key.to_string(), value.clone()));

        if let Some(message) = rwlock_read(&self.state.write_error).clone() {
            return Err(StoreError::transport(message));
        }

        rwlock_write(&self.state.tree)
            .get_or_insert_with(Tree::new)
            .insert(key, value.clone());
        Ok(())
    }

    fn endpoint(&self) -> String {
        "fake://store".to_string()
    }
}

fn rwlock_read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn rwlock_write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn mutex_lock<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

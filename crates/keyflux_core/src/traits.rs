use crate::{Snapshot, StoreError, Value};

/// Handle to a single remote key/value tree.
///
/// The UI talks to the store exclusively through this trait. Calls block for
/// one network round trip, so callers run them off the UI thread.
/// Implementations must be `Send + Sync` to be shared across background tasks.
pub trait KeyStore: Send + Sync {
    /// Fetch the entire tree.
    ///
    /// Returns `Snapshot::Empty` when the root holds no data. Any failure is a
    /// `StoreError::Transport`; no partial data is ever returned.
    fn read_all(&self) -> Result<Snapshot, StoreError>;

    /// Overwrite the value stored under a single top-level key.
    ///
    /// The value is passed through unchanged; no shape validation happens here.
    fn write_value(&self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// Endpoint identifier, for logs and window titles.
    fn endpoint(&self) -> String;
}

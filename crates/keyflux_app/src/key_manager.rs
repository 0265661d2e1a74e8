use keyflux_core::{Snapshot, StoreError, Tree, Value};
use log::{error, info};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch keys. Please try again.";
pub const UPDATE_SUCCEEDED_MESSAGE: &str = "Key updated successfully!";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update key. Please try again.";

const LOGGED_KEY_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn title(self) -> &'static str {
        match self {
            StatusKind::Success => "Success",
            StatusKind::Error => "Error",
        }
    }
}

/// Banner shown after the most recent fetch failure or save outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// The single key being edited and its scratch buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub key: String,
    pub buffer: String,
}

/// A write captured at the moment the user pressed save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub key: String,
    pub value: Value,
}

/// One rendered line of the key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    pub key: String,
    pub display_value: String,
    pub is_editing: bool,
}

/// Local state behind the key manager view: the fetched tree, the optional
/// edit session and the status banner.
///
/// Store calls happen elsewhere; this type only decides what to request and
/// how to fold results back in. Completions are applied in the order they
/// arrive with no sequencing, so a late save completion closes whatever edit
/// session is open at that time.
#[derive(Debug, Default)]
pub struct KeyManager {
    tree: Tree,
    edit: Option<EditSession>,
    status: Option<StatusMessage>,
}

impl KeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_editing(&self, key: &str) -> bool {
        self.edit.as_ref().is_some_and(|edit| edit.key == key)
    }

    pub fn rows(&self) -> Vec<KeyRow> {
        self.tree
            .iter()
            .map(|(key, value)| KeyRow {
                key: key.to_string(),
                display_value: value.as_display_string(),
                is_editing: self.is_editing(key),
            })
            .collect()
    }

    /// Apply the result of the initial whole-tree read.
    pub fn finish_load(&mut self, result: Result<Snapshot, StoreError>) {
        match result {
            Ok(Snapshot::Exists(tree)) => {
                info!("Loaded {} keys", tree.len());
                self.tree = tree;
            }
            Ok(Snapshot::Empty) => {
                info!("No data available");
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                self.status = Some(StatusMessage::error(FETCH_FAILED_MESSAGE));
            }
        }
    }

    /// Open an edit session on `key`, seeded with its display value.
    ///
    /// Any other open session is dropped without saving. Returns `false` when
    /// the key is not in the tree.
    pub fn begin_edit(&mut self, key: &str) -> bool {
        let Some(value) = self.tree.get(key) else {
            return false;
        };

        self.edit = Some(EditSession {
            key: key.to_string(),
            buffer: value.as_display_string(),
        });
        true
    }

    pub fn update_buffer(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.edit {
            edit.buffer = text.into();
        }
    }

    /// Capture the pending write. The session stays open until `finish_save`.
    pub fn save(&self) -> Option<SaveRequest> {
        self.edit.as_ref().map(|edit| SaveRequest {
            key: edit.key.clone(),
            value: Value::Text(edit.buffer.clone()),
        })
    }

    pub fn finish_save(&mut self, request: &SaveRequest, result: Result<(), StoreError>) {
        match result {
            Ok(()) => {
                info!("Updated key {}", key_for_log(&request.key));
                merge_written_value(&mut self.tree, request);
                self.status = Some(StatusMessage::success(UPDATE_SUCCEEDED_MESSAGE));
            }
            Err(e) => {
                error!("Error updating data: {}", e);
                self.status = Some(StatusMessage::error(UPDATE_FAILED_MESSAGE));
            }
        }

        self.edit = None;
    }
}

/// Optimistic merge: assume the store now holds exactly what was written.
pub fn merge_written_value(tree: &mut Tree, request: &SaveRequest) {
    tree.insert(request.key.clone(), request.value.clone());
}

/// Keys are user data of any length; log lines keep only the first characters.
fn key_for_log(key: &str) -> String {
    match key.char_indices().nth(LOGGED_KEY_CHARS) {
        Some((cut, _)) => format!("{}...", &key[..cut]),
        None => key.to_string(),
    }
}

use std::time::Duration;

use keyflux_core::{FirebaseConfig, KeyStore, Snapshot, StoreError, Tree, Value};
use log::{debug, warn};
use reqwest::blocking::{Client, Response};

const USER_AGENT: &str = concat!("keyflux/", env!("CARGO_PKG_VERSION"));

/// Realtime Database client over the REST API.
///
/// One instance wraps one database URL and a reusable HTTP client. Every call
/// is a single blocking round trip with no retry and no timeout.
pub struct FirebaseStore {
    client: Client,
    database_url: String,
}

impl FirebaseStore {
    pub fn new(config: &FirebaseConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| format_transport_error(&e))?;

        Ok(Self::with_client(client, &config.database_url))
    }

    pub fn with_client(client: Client, database_url: &str) -> Self {
        Self {
            client,
            database_url: normalize_base_url(database_url),
        }
    }
}

impl KeyStore for FirebaseStore {
    fn read_all(&self) -> Result<Snapshot, StoreError> {
        let url = tree_url(&self.database_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| format_transport_error(&e))?;

        let body = checked_body(response)?;
        parse_snapshot(&body)
    }

    fn write_value(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let url = key_url(&self.database_url, key);
        debug!("PUT {}", url);

        // print=silent: the service answers 204 instead of echoing the value.
        let response = self
            .client
            .put(format!("{}?print=silent", url))
            .json(value)
            .send()
            .map_err(|e| format_transport_error(&e))?;

        checked_body(response).map(|_| ())
    }

    fn endpoint(&self) -> String {
        self.database_url.clone()
    }
}

fn checked_body(response: Response) -> Result<String, StoreError> {
    let status = response.status();
    let body = response.text().map_err(|e| format_transport_error(&e))?;

    if status.is_success() {
        return Ok(body);
    }

    let detail = service_error_message(&body).unwrap_or_else(|| body.trim().to_string());
    warn!("Realtime Database responded {}: {}", status, detail);

    Err(StoreError::transport(format!("HTTP {}: {}", status, detail)))
}

fn format_transport_error(error: &reqwest::Error) -> StoreError {
    StoreError::transport(error.to_string())
}

/// The service reports failures as `{"error": "..."}`.
fn service_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("error")?.as_str().map(str::to_string)
}

pub(crate) fn normalize_base_url(database_url: &str) -> String {
    database_url.trim().trim_end_matches('/').to_string()
}

pub(crate) fn tree_url(base: &str) -> String {
    format!("{}/.json", base)
}

pub(crate) fn key_url(base: &str, key: &str) -> String {
    format!("{}/{}.json", base, urlencoding::encode(key))
}

/// Parse a whole-tree response body. `null` means the root holds no data.
///
/// A root whose keys are all small integers comes back as a JSON array, with
/// `null` in the slots of missing keys.
pub(crate) fn parse_snapshot(body: &str) -> Result<Snapshot, StoreError> {
    let root: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| StoreError::transport(format!("Malformed response: {}", e)))?;

    let tree: Tree = match root {
        serde_json::Value::Null => return Ok(Snapshot::Empty),
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, Value::from_json(value)))
            .collect(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_null())
            .map(|(index, value)| (index.to_string(), Value::from_json(value)))
            .collect(),
        other => {
            return Err(StoreError::transport(format!(
                "Malformed response: unexpected root {}",
                other
            )));
        }
    };

    Ok(Snapshot::Exists(tree))
}

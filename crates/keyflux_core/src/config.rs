use crate::ConfigError;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "KEYFLUX_CONFIG";

const CONFIG_FILE_NAME: &str = "firebase.json";

/// Connection settings as exported from the Firebase console.
///
/// Only `databaseURL` is needed to reach the store; the rest is carried along
/// so the console snippet can be pasted as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    #[serde(default = "empty_secret", deserialize_with = "deserialize_secret")]
    pub api_key: SecretString,

    #[serde(default)]
    pub auth_domain: String,

    #[serde(rename = "databaseURL")]
    pub database_url: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub storage_bucket: String,

    #[serde(default)]
    pub messaging_sender_id: String,

    #[serde(default)]
    pub app_id: String,
}

impl FirebaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            api_key: empty_secret(),
            auth_domain: String::new(),
            database_url: database_url.into(),
            project_id: String::new(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

/// Locates and reads the connection config file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at `<config dir>/keyflux/firebase.json`.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Io(std::io::Error::other("Could not find config directory"))
        })?;

        Ok(Self {
            path: config_dir.join("keyflux").join(CONFIG_FILE_NAME),
        })
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Explicit path first, then `$KEYFLUX_CONFIG`, then the default location.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Ok(Self::from_path(path));
        }

        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Ok(Self::from_path(path)),
            _ => Self::new(),
        }
    }

    pub fn load(&self) -> Result<FirebaseConfig, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        FirebaseConfig::from_json(&content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

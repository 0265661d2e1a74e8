mod config;
mod error;
mod traits;
mod tree;
mod value;

pub use config::{CONFIG_ENV_VAR, ConfigStore, FirebaseConfig};
pub use error::{ConfigError, StoreError};
pub use traits::KeyStore;
pub use tree::{Snapshot, Tree};
pub use value::Value;

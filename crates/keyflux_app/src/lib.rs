pub mod key_manager;

pub use key_manager::{
    EditSession, FETCH_FAILED_MESSAGE, KeyManager, KeyRow, SaveRequest, StatusKind,
    StatusMessage, UPDATE_FAILED_MESSAGE, UPDATE_SUCCEEDED_MESSAGE, merge_written_value,
};

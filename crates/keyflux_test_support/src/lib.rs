pub mod contract;
pub mod fake_store;

pub use fake_store::{FakeStore, FakeStoreStats};

use keyflux_core::{FirebaseConfig, KeyStore};
use keyflux_driver_firebase::FirebaseStore;
use keyflux_test_support::contract;

const LIVE_URL_VAR: &str = "KEYFLUX_LIVE_DATABASE_URL";

fn live_store() -> Option<FirebaseStore> {
    let url = std::env::var(LIVE_URL_VAR).ok()?;
    Some(FirebaseStore::new(&FirebaseConfig::new(url)).expect("http client should build"))
}

#[test]
#[ignore = "requires a Realtime Database with open rules"]
fn firebase_live_write_then_read() {
    let Some(store) = live_store() else {
        eprintln!("{} not set, skipping", LIVE_URL_VAR);
        return;
    };

    contract::check_key_store(&store, "keyflux_live_test");
}

#[test]
#[ignore = "requires network access"]
fn firebase_unreachable_host_is_transport_error() {
    let store = FirebaseStore::new(&FirebaseConfig::new("https://keyflux.invalid"))
        .expect("http client should build");

    assert!(store.read_all().is_err());
    assert_eq!(store.endpoint(), "https://keyflux.invalid");
}

mod cli;
mod ui;

use anyhow::Context as _;
use cli::CliAction;
use gpui::{App, Application};
use keyflux_core::{ConfigStore, KeyStore};
use keyflux_driver_firebase::FirebaseStore;
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match cli::parse(&args) {
        Ok(CliAction::Run { config_path }) => config_path,
        Ok(CliAction::Help) => {
            println!("{}", cli::USAGE);
            return;
        }
        Ok(CliAction::Version) => {
            println!("keyflux {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(message) => {
            eprintln!("{}\n\n{}", message, cli::USAGE);
            std::process::exit(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let store = match connect_store(config_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    run_gui(store);
}

/// Build the one store handle shared by every read and write.
fn connect_store(config_path: Option<PathBuf>) -> anyhow::Result<Arc<dyn KeyStore>> {
    let config_store = ConfigStore::resolve(config_path)?;
    let config = config_store
        .load()
        .with_context(|| format!("Failed to load {}", config_store.path().display()))?;

    info!("Using database {}", config.database_url);

    let store = FirebaseStore::new(&config).context("Failed to create database client")?;
    Ok(Arc::new(store))
}

fn run_gui(store: Arc<dyn KeyStore>) {
    Application::new().run(move |cx: &mut App| {
        ui::theme::init(cx);

        if let Err(e) = ui::shell::open_main_window(store, cx) {
            error!("Failed to open main window: {:#}", e);
            cx.quit();
        }
    });
}

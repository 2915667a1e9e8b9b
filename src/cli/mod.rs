//! Interactive menu driver

pub mod console;
pub mod manager;
pub mod menu;

pub use console::Console;
pub use manager::InventoryManager;
pub use menu::MenuChoice;

use anyhow::Result;

use crate::config::Config;
use crate::inventory::{InventoryStore, DEFAULT_REPORT_FILE};

/// Load config, set up logging and run the menu loop on stdin/stdout
pub fn run() -> Result<()> {
    let config = match crate::config::config_path() {
        Ok(path) => crate::config::load_config_or_default(&path),
        Err(_) => Config::default(),
    };
    let _log_guard = crate::logging::init(&config)?;

    tracing::info!(report_path = DEFAULT_REPORT_FILE, "starting inventory session");

    let mut manager =
        InventoryManager::new(InventoryStore::new(), Console::stdio(), DEFAULT_REPORT_FILE);
    manager.run()
}


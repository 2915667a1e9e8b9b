pub mod error;
pub mod record;
pub mod report;
pub mod store;

pub use error::InventoryError;
pub use record::{parse_quantity, ToolRecord, ToolUpdate};
pub use store::{InventoryStore, StoreEvent};

/// Report file name used when the config does not override it
pub const DEFAULT_REPORT_FILE: &str = "inventory_report.csv";

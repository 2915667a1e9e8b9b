use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::error::InventoryError;
use super::record::{ToolRecord, ToolUpdate};
use super::report;

/// Outcome of a successful store operation, rendered as the user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { name: String },
    Removed { serial_number: String },
    Updated { serial_number: String },
    ReportGenerated { path: PathBuf, rows: usize },
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::Added { name } => write!(f, "Added tool: {name}"),
            StoreEvent::Removed { serial_number } => {
                write!(f, "Removed tool with serial number: {serial_number}")
            }
            StoreEvent::Updated { serial_number } => {
                write!(f, "Updated tool with serial number: {serial_number}")
            }
            StoreEvent::ReportGenerated { path, .. } => {
                write!(f, "Report generated: {}", path.display())
            }
        }
    }
}

/// In-memory tool inventory keyed by serial number.
///
/// Iteration order follows the underlying hash map and is not stable.
#[derive(Debug, Default)]
pub struct InventoryStore {
    tools: HashMap<String, ToolRecord>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, silently replacing any record with the same serial number
    pub fn add(&mut self, record: ToolRecord) -> StoreEvent {
        let name = record.name.clone();
        let serial_number = record.serial_number().to_string();
        tracing::debug!(record = %record, "adding tool");

        if self.tools.insert(serial_number.clone(), record).is_some() {
            tracing::warn!(serial_number = %serial_number, "existing tool overwritten by add");
        } else {
            tracing::info!(serial_number = %serial_number, name = %name, "tool added");
        }

        StoreEvent::Added { name }
    }

    /// Remove the record stored under `serial_number`
    pub fn remove(&mut self, serial_number: &str) -> Result<StoreEvent, InventoryError> {
        match self.tools.remove(serial_number) {
            Some(_) => {
                tracing::info!(serial_number = %serial_number, "tool removed");
                Ok(StoreEvent::Removed {
                    serial_number: serial_number.to_string(),
                })
            }
            None => {
                tracing::debug!(serial_number = %serial_number, "remove: tool not found");
                Err(InventoryError::NotFound(serial_number.to_string()))
            }
        }
    }

    /// Apply a partial update to the record stored under `serial_number`
    pub fn update(
        &mut self,
        serial_number: &str,
        update: &ToolUpdate,
    ) -> Result<StoreEvent, InventoryError> {
        let Some(record) = self.tools.get_mut(serial_number) else {
            tracing::debug!(serial_number = %serial_number, "update: tool not found");
            return Err(InventoryError::NotFound(serial_number.to_string()));
        };

        record.apply(update);
        tracing::info!(serial_number = %serial_number, update = ?update, "tool updated");

        Ok(StoreEvent::Updated {
            serial_number: serial_number.to_string(),
        })
    }

    /// Write every record to `path` as CSV, truncating any existing file
    pub fn generate_report(&self, path: impl AsRef<Path>) -> Result<StoreEvent, InventoryError> {
        let path = path.as_ref();
        let report_error = |source: csv::Error| InventoryError::Report {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|e| report_error(e.into()))?;
        let rows = report::write_csv(file, self.tools.values()).map_err(report_error)?;

        tracing::info!(path = %path.display(), rows, "report generated");
        Ok(StoreEvent::ReportGenerated {
            path: path.to_path_buf(),
            rows,
        })
    }

    pub fn get(&self, serial_number: &str) -> Option<&ToolRecord> {
        self.tools.get(serial_number)
    }

    pub fn contains(&self, serial_number: &str) -> bool {
        self.tools.contains_key(serial_number)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All records in store order
    pub fn records(&self) -> impl Iterator<Item = &ToolRecord> {
        self.tools.values()
    }
}

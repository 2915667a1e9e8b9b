use std::path::PathBuf;

/// Inventory operation errors
///
/// Every variant leaves the store untouched, so the interactive loop reports
/// the message and carries on.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Tool with serial number {0} not found.")]
    NotFound(String),

    #[error("Invalid quantity '{0}': expected a non-negative whole number")]
    InvalidQuantity(String),

    #[error("Failed to write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

//! Common test utilities and fixtures for inventory testing
#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;
use tool_inventory::inventory::ToolRecord;

/// Test fixture for file operations
pub struct TestFixture {
    /// Temporary directory that gets cleaned up automatically
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new test fixture with a temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a test file with given content
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let filepath = self.path().join(name);
        std::fs::write(&filepath, content).expect("Failed to write test file");
        filepath
    }

    /// Read file content
    pub fn read_file(&self, name: &str) -> String {
        let filepath = self.path().join(name);
        std::fs::read_to_string(&filepath).expect("Failed to read test file")
    }

    /// Check if file exists
    pub fn file_exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }
}

pub const HEADER: &str = "Name,Quantity,Location,Last Maintenance,Serial Number,Category";

pub fn drill() -> ToolRecord {
    ToolRecord::new("Drill", 3, "A1", "2024-01-01", "S1", "Power")
}

pub fn hammer() -> ToolRecord {
    ToolRecord::new("Hammer", 10, "B2", "2023-11-05", "S2", "Hand")
}

/// Split a report into its header and the set of data rows (row order is unspecified)
pub fn split_report(content: &str) -> (String, HashSet<String>) {
    let mut lines = content.lines();
    let header = lines.next().expect("report has no header").to_string();
    let rows = lines.map(str::to_string).collect();
    (header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creation() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_create_and_read_file() {
        let fixture = TestFixture::new();
        fixture.create_file("test.txt", "hello world");
        assert_eq!(fixture.read_file("test.txt"), "hello world");
    }

    #[test]
    fn test_split_report() {
        let (header, rows) = split_report("h\r\nb\r\na\r\n");
        assert_eq!(header, "h");
        assert_eq!(rows.len(), 2);
        assert!(rows.contains("a") && rows.contains("b"));
    }
}

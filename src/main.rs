use anyhow::Result;

/// Main entry point
fn main() -> Result<()> {
    tool_inventory::cli::run()
}

//! Tool Inventory library
//!
//! This library exports the inventory store, the CSV report writer and the
//! interactive driver for testing and potential reuse.

pub mod cli;
pub mod config;
pub mod inventory;
pub mod logging;

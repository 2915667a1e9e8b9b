use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::console::Console;
use super::menu::{MenuChoice, MENU_TEXT};
use crate::inventory::{
    parse_quantity, InventoryError, InventoryStore, StoreEvent, ToolRecord, ToolUpdate,
};

/// Whether the menu loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over one inventory store
pub struct InventoryManager<R, W> {
    store: InventoryStore,
    console: Console<R, W>,
    report_path: PathBuf,
}

/// Unwrap a prompt answer or leave the loop at end of input
macro_rules! answer_or_exit {
    ($answer:expr) => {
        match $answer {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

impl<R: BufRead, W: Write> InventoryManager<R, W> {
    pub fn new(
        store: InventoryStore,
        console: Console<R, W>,
        report_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            store,
            console,
            report_path: report_path.as_ref().to_path_buf(),
        }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.step().context("Console I/O failed")? == Flow::Exit {
                tracing::info!(tools = self.store.len(), "inventory session ended");
                return Ok(());
            }
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Split the manager back into its store and console
    pub fn into_parts(self) -> (InventoryStore, Console<R, W>) {
        (self.store, self.console)
    }

    fn step(&mut self) -> std::io::Result<Flow> {
        self.console.println(format_args!("\n{MENU_TEXT}"))?;
        let choice = answer_or_exit!(self.console.prompt("Choose an option: ")?);

        match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::AddTool) => self.add_tool(),
            Ok(MenuChoice::RemoveTool) => self.remove_tool(),
            Ok(MenuChoice::UpdateTool) => self.update_tool(),
            Ok(MenuChoice::GenerateReport) => {
                let outcome = self.store.generate_report(&self.report_path);
                self.show_outcome(outcome)?;
                Ok(Flow::Continue)
            }
            Ok(MenuChoice::Exit) => {
                self.console.println("Exiting the program.")?;
                Ok(Flow::Exit)
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected menu input");
                self.console.println("Invalid choice, please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_tool(&mut self) -> std::io::Result<Flow> {
        let name = answer_or_exit!(self.console.prompt("Enter tool name: ")?);
        let quantity = answer_or_exit!(self.console.prompt("Enter quantity: ")?);
        let location = answer_or_exit!(self.console.prompt("Enter location: ")?);
        let last_maintenance = answer_or_exit!(self
            .console
            .prompt("Enter last maintenance date (YYYY-MM-DD): ")?);
        let serial_number = answer_or_exit!(self.console.prompt("Enter serial number: ")?);
        let category = answer_or_exit!(self.console.prompt("Enter category: ")?);

        // Every answer is read first so none of them is mistaken for a menu choice.
        let quantity = match parse_quantity(&quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                tracing::warn!(error = %e, serial_number = %serial_number, "add rejected");
                self.console.println(format_args!("{e}; tool not added."))?;
                return Ok(Flow::Continue);
            }
        };

        let record = ToolRecord::new(
            name,
            quantity,
            location,
            last_maintenance,
            serial_number,
            category,
        );
        let event = self.store.add(record);
        self.console.println(event)?;
        Ok(Flow::Continue)
    }

    fn remove_tool(&mut self) -> std::io::Result<Flow> {
        let serial_number = answer_or_exit!(self
            .console
            .prompt("Enter serial number of the tool to remove: ")?);

        let outcome = self.store.remove(&serial_number);
        self.show_outcome(outcome)?;
        Ok(Flow::Continue)
    }

    fn update_tool(&mut self) -> std::io::Result<Flow> {
        let serial_number = answer_or_exit!(self
            .console
            .prompt("Enter serial number of the tool to update: ")?);

        let mut update = ToolUpdate::new();
        update.name = answer_or_exit!(self
            .console
            .prompt_optional("Enter new name (leave blank for no change): ")?);

        let quantity = answer_or_exit!(self
            .console
            .prompt_optional("Enter new quantity (leave blank for no change): ")?);
        if let Some(raw) = quantity {
            match parse_quantity(&raw) {
                Ok(quantity) => update.quantity = Some(quantity),
                // Unusable quantity means "no change"; the other fields still apply.
                Err(e) => {
                    tracing::warn!(error = %e, serial_number = %serial_number, "quantity ignored");
                    self.console.println(format_args!("{e}; quantity left unchanged."))?;
                }
            }
        }

        update.location = answer_or_exit!(self
            .console
            .prompt_optional("Enter new location (leave blank for no change): ")?);
        update.last_maintenance = answer_or_exit!(self
            .console
            .prompt_optional("Enter new last maintenance date (leave blank for no change): ")?);
        update.category = answer_or_exit!(self
            .console
            .prompt_optional("Enter new category (leave blank for no change): ")?);

        let outcome = self.store.update(&serial_number, &update);
        self.show_outcome(outcome)?;
        Ok(Flow::Continue)
    }

    /// Print an operation outcome, success or failure
    fn show_outcome(&mut self, outcome: Result<StoreEvent, InventoryError>) -> std::io::Result<()> {
        match outcome {
            Ok(event) => self.console.println(event),
            Err(e) => {
                tracing::warn!(error = %e, "inventory operation failed");
                self.console.println(e)
            }
        }
    }
}

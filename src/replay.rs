//! Non-interactive replay of recount and sale commands from CSV.
//!
//! Runs the same inventory and order engine as the terminal, but reads its
//! decisions from a file. Rows the terminal's prompts would never have let
//! through (unknown items, quantities above the current maximum, recounts
//! above capacity) are logged at warn level and skipped.

use crate::error::{Result, TruckError};
use crate::ingredient::Ingredient;
use crate::inventory::InventoryStore;
use crate::menu::MenuItem;
use crate::money::Money;
use crate::order::Order;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Raw command row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// count, sell or checkout
    pub action: String,

    /// Ingredient key for count, item key for sell, empty for checkout
    #[serde(default)]
    pub target: Option<String>,

    /// New level for count, quantity for sell
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// A parsed command ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Manual recount of an ingredient.
    Count(Ingredient, u32),

    /// One line item on the open order.
    Sell(MenuItem, u32),

    /// Close the open order.
    Checkout,
}

impl CommandRecord {
    /// Parses the raw record into a typed command.
    pub fn parse(&self, row: usize) -> Result<Command> {
        let action = self.action.trim().to_lowercase();
        match action.as_str() {
            "count" => {
                let key = self.target(row)?;
                let ingredient = Ingredient::from_key(key)
                    .ok_or_else(|| invalid(row, format!("unknown ingredient '{}'", key)))?;
                Ok(Command::Count(ingredient, self.quantity(row)?))
            }
            "sell" => {
                let key = self.target(row)?;
                let item = MenuItem::from_key(key)
                    .ok_or_else(|| invalid(row, format!("unknown menu item '{}'", key)))?;
                Ok(Command::Sell(item, self.quantity(row)?))
            }
            "checkout" => Ok(Command::Checkout),
            other => Err(invalid(row, format!("unknown action '{}'", other))),
        }
    }

    fn target(&self, row: usize) -> Result<&str> {
        match self.target.as_deref().map(str::trim) {
            Some(target) if !target.is_empty() => Ok(target),
            _ => Err(invalid(row, "missing target".to_string())),
        }
    }

    fn quantity(&self, row: usize) -> Result<u32> {
        self.quantity
            .ok_or_else(|| invalid(row, "missing quantity".to_string()))
    }
}

fn invalid(row: usize, message: String) -> TruckError {
    TruckError::InvalidRecord { row, message }
}

/// A checked-out order as written to the receipts CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub order: u32,
    pub lines: usize,
    pub items: u32,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Replays command rows against a single truck.
pub struct Replay {
    inventory: InventoryStore,

    /// Order opened by the first sell after a checkout.
    open_order: Option<Order>,

    receipts: Vec<Receipt>,
}

impl Replay {
    /// Starts from a fully stocked truck.
    pub fn new() -> Self {
        Self::with_inventory(InventoryStore::new())
    }

    pub fn with_inventory(inventory: InventoryStore) -> Self {
        Replay {
            inventory,
            open_order: None,
            receipts: Vec::new(),
        }
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Whether sales were made after the last checkout.
    pub fn has_open_order(&self) -> bool {
        self.open_order.is_some()
    }

    /// Processes commands from a CSV reader in streaming fashion.
    ///
    /// Invalid or rejected rows are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<CommandRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            let outcome = result
                .map_err(TruckError::from)
                .and_then(|record| record.parse(row))
                .and_then(|command| self.apply(command, row));
            if let Err(e) = outcome {
                warn!("Row {}: {}", row, e);
            }
        }

        if let Some(order) = &self.open_order {
            warn!(
                "Order with {} line(s) left open at end of input, not checked out",
                order.lines().len()
            );
        }

        Ok(())
    }

    /// Runs one command. A rejected command leaves all state unchanged.
    pub fn apply(&mut self, command: Command, row: usize) -> Result<()> {
        match command {
            Command::Count(ingredient, level) => {
                self.inventory.set_inventory(ingredient, level)?;
            }
            Command::Sell(item, quantity) => {
                let mut order = self.open_order.take().unwrap_or_default();
                let outcome = order.sell(&mut self.inventory, item, quantity);
                // A rejected first sale must not open an order.
                if !order.lines().is_empty() {
                    self.open_order = Some(order);
                }
                let warnings = outcome?;
                debug!(
                    "Row {}: sold {} {} ({} low-stock warning(s))",
                    row,
                    quantity,
                    item.plural(),
                    warnings.len()
                );
            }
            Command::Checkout => {
                let order = self.open_order.take().unwrap_or_default();
                let lines = order.lines().len();
                let items = order.item_count();
                let totals = order.checkout();
                let receipt = Receipt {
                    order: self.receipts.len() as u32 + 1,
                    lines,
                    items,
                    subtotal: totals.subtotal,
                    tax: totals.tax,
                    total: totals.total,
                };
                debug!("Row {}: order {} total {}", row, receipt.order, receipt.total);
                self.receipts.push(receipt);
            }
        }
        Ok(())
    }

    /// Writes one CSV row per checked-out order.
    pub fn write_receipts<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for receipt in &self.receipts {
            csv_writer.serialize(receipt)?;
        }
        if self.receipts.is_empty() {
            csv_writer.write_record(["order", "lines", "items", "subtotal", "tax", "total"])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Writes final ingredient levels in inventory-menu order.
    pub fn write_inventory<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["ingredient", "current", "capacity", "low_threshold"])?;

        for (ingredient, level) in self.inventory.snapshot() {
            csv_writer.write_record([
                ingredient.key().to_string(),
                level.to_string(),
                ingredient.capacity().to_string(),
                ingredient.low_threshold().to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new()
    }
}

//! Interactive menu loop.
//!
//! Drives the main, inventory and sell menus over any line-based input and
//! writer, so the whole session can be scripted in tests.

use crate::error::{Result, TruckError};
use crate::ingredient::Ingredient;
use crate::inventory::InventoryStore;
use crate::menu::MenuItem;
use crate::order::{self, Order};
use crate::prompt::{request_integer, ValidationContext};
use crate::table::Table;
use log::debug;
use std::io::{BufRead, Write};

const TITLE: &str = "Rebel Food Truck Inventory Sales Program";

const MAIN_INVENTORY: u32 = 0;
const MAIN_SELL: u32 = 1;
const MAIN_QUIT: u32 = 2;

/// Option number of "Return" in the inventory and sell menus.
const RETURN_OPTION: u32 = 5;

/// An interactive session over an input and output stream.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    inventory: InventoryStore,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a session with a fully stocked truck.
    pub fn new(input: R, output: W) -> Self {
        Self::with_inventory(input, output, InventoryStore::new())
    }

    pub fn with_inventory(input: R, output: W, inventory: InventoryStore) -> Self {
        Terminal {
            input,
            output,
            inventory,
        }
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    /// Runs the main menu until Quit is chosen or the input closes.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", TITLE)?;
        match self.main_menu() {
            Err(TruckError::InputClosed) => {
                debug!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            let mut table = Table::new();
            table.push_row(["#", "Option"]);
            table.push_row(["0", "Inventory"]);
            table.push_row(["1", "Sell"]);
            table.push_row(["2", "Quit"]);
            write!(self.output, "{}", table)?;

            let option = self.ask(
                "Enter option: ",
                MAIN_INVENTORY,
                MAIN_QUIT,
                ValidationContext::Option,
            )?;
            match option {
                MAIN_INVENTORY => self.inventory_menu()?,
                MAIN_SELL => self.sell_menu()?,
                _ => return Ok(()),
            }
        }
    }

    fn inventory_menu(&mut self) -> Result<()> {
        loop {
            let mut table = Table::new();
            table.push_row(["#", "Item/Option", "Current Inventory"]);
            for (idx, (ingredient, level)) in self.inventory.snapshot().into_iter().enumerate() {
                table.push_row([
                    idx.to_string(),
                    ingredient.label().to_string(),
                    ingredient.format_level(level),
                ]);
            }
            table.push_row([RETURN_OPTION.to_string(), "Return".to_string()]);
            write!(self.output, "{}", table)?;

            let option = self.ask(
                "Enter option to update inventory: ",
                0,
                RETURN_OPTION,
                ValidationContext::Option,
            )?;
            let Some(ingredient) = Ingredient::from_option(option) else {
                return Ok(());
            };

            writeln!(self.output)?;
            let level = self.ask(
                &format!("Enter new {} inventory: ", ingredient.name()),
                0,
                ingredient.capacity(),
                ValidationContext::Inventory(ingredient),
            )?;
            self.inventory.set_inventory(ingredient, level)?;
        }
    }

    fn sell_menu(&mut self) -> Result<()> {
        let mut order = Order::new();
        loop {
            let maxima = order::sellable(&self.inventory);
            let mut table = Table::new();
            table.push_row(["#", "Item/Option", "Quantity Available", "Cost Per Item"]);
            for (idx, (item, max)) in maxima.iter().enumerate() {
                table.push_row([
                    idx.to_string(),
                    item.label(),
                    max.to_string(),
                    format!("$ {}", item.price()),
                ]);
            }
            table.push_row([RETURN_OPTION.to_string(), "Return".to_string()]);
            write!(self.output, "{}", table)?;

            let option = self.ask(
                "Enter option for customer order: ",
                0,
                RETURN_OPTION,
                ValidationContext::Option,
            )?;
            if option == RETURN_OPTION {
                let totals = order.checkout();
                writeln!(self.output)?;
                writeln!(self.output, "Order Total: $ {}", totals.total)?;
                return Ok(());
            }

            match order::select(&self.inventory, option) {
                Ok(item) => self.sell_line(&mut order, item)?,
                Err(TruckError::InvalidSelection { option }) => {
                    debug!("Option {} has nothing available", option);
                    writeln!(self.output)?;
                    writeln!(
                        self.output,
                        "Invalid input, please enter an item with quantity available or update inventory."
                    )?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn sell_line(&mut self, order: &mut Order, item: MenuItem) -> Result<()> {
        let max = order::max_sellable(&self.inventory, item);
        writeln!(self.output)?;
        let quantity = self.ask(
            &format!("Enter quantity (max {}): ", max),
            0,
            max,
            ValidationContext::Quantity(item),
        )?;

        for warning in order.sell(&mut self.inventory, item, quantity)? {
            writeln!(self.output, "{}", warning)?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str, min: u32, max: u32, context: ValidationContext) -> Result<u32> {
        request_integer(&mut self.input, &mut self.output, prompt, min, max, context)
    }
}

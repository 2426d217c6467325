//! Error types for the food truck engine.

use crate::ingredient::Ingredient;
use crate::menu::MenuItem;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TruckError>;

/// Errors that can occur while running the truck.
#[derive(Error, Debug)]
pub enum TruckError {
    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Sell option outside the catalog, or an item with nothing left to sell
    #[error("Invalid selection {option}: no quantity available")]
    InvalidSelection { option: u32 },

    /// Requested more of an item than the current stock supports
    #[error("Requested {requested} {}, only {available} available", .item.plural())]
    QuantityUnavailable {
        item: MenuItem,
        requested: u32,
        available: u32,
    },

    /// Recount above the ingredient's storage capacity
    #[error("{} level {level} exceeds capacity {capacity}", .ingredient.name())]
    OverCapacity {
        ingredient: Ingredient,
        level: u32,
        capacity: u32,
    },

    /// Invalid replay record
    #[error("Invalid command at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Interactive input stream reached end of file
    #[error("Input closed")]
    InputClosed,

    /// Missing replay file argument
    #[error("Missing input file argument. Usage: food-truck replay <commands.csv> [--inventory]")]
    MissingArgument,

    /// Unrecognised subcommand
    #[error("Unknown command '{0}'. Usage: food-truck [replay <commands.csv> [--inventory]]")]
    UnknownCommand(String),
}

//! # Food Truck POS
//!
//! Inventory and point-of-sale engine for a food truck selling a fixed menu
//! of hamburgers, chiliburgers, hotdogs, chilidogs and chili from five shared
//! ingredient pools.
//!
//! ## Design Principles
//!
//! - **Derived maxima**: sellable quantities are recomputed from stock before
//!   every line item, and every sale is clamped to them
//! - **Strict invariants**: `0 <= current <= capacity` for every ingredient
//! - **Fixed-point money**: 2 decimal places via `rust_decimal`
//! - **No globals**: the inventory is a value passed by reference to each order
//!
//! ## Example
//!
//! ```
//! use food_truck_pos::{InventoryStore, MenuItem, Order};
//!
//! let mut inventory = InventoryStore::new();
//! let mut order = Order::new();
//! order.sell(&mut inventory, MenuItem::Hamburger, 4).unwrap();
//!
//! let totals = order.checkout();
//! assert_eq!(totals.total.to_string(), "21.00");
//! ```

pub mod error;
pub mod ingredient;
pub mod inventory;
pub mod menu;
pub mod money;
pub mod order;
pub mod prompt;
pub mod replay;
pub mod table;
pub mod terminal;

pub use error::{Result, TruckError};
pub use ingredient::Ingredient;
pub use inventory::{ChiliServings, InventoryStore, LowStockWarning};
pub use menu::{MenuItem, Portion};
pub use money::Money;
pub use order::{max_sellable, sellable, Order, OrderLine, OrderTotals};
pub use prompt::{request_integer, ValidationContext};
pub use replay::{Command, Replay};
pub use table::Table;
pub use terminal::Terminal;

//! Order engine: sellable maxima, line items and checkout totals.
//!
//! An `Order` lives for one sell session. Every line is validated against
//! maxima computed from the inventory as it stands right now, then debited
//! from the shared ingredient pools without any rollback path.

use crate::error::{Result, TruckError};
use crate::inventory::{InventoryStore, LowStockWarning};
use crate::menu::MenuItem;
use crate::money::Money;
use log::{debug, info};
use rust_decimal::Decimal;
use serde::Serialize;

/// Sales tax applied at checkout (5%).
pub fn sales_tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Largest quantity of `item` the inventory can currently supply.
///
/// The binding constraint is whichever recipe ingredient runs out first.
pub fn max_sellable(inventory: &InventoryStore, item: MenuItem) -> u32 {
    item.recipe()
        .iter()
        .map(|p| inventory.servings(p.ingredient, p.units))
        .min()
        .unwrap_or(0)
}

/// Maxima for every item, in sell-menu order.
pub fn sellable(inventory: &InventoryStore) -> Vec<(MenuItem, u32)> {
    MenuItem::ALL
        .into_iter()
        .map(|item| (item, max_sellable(inventory, item)))
        .collect()
}

/// Resolves a sell-menu option to an item that can be sold right now.
pub fn select(inventory: &InventoryStore, option: u32) -> Result<MenuItem> {
    match MenuItem::from_option(option) {
        Some(item) if max_sellable(inventory, item) > 0 => Ok(item),
        _ => Err(TruckError::InvalidSelection { option }),
    }
}

/// One (item, quantity) entry in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: u32,
}

/// Final amounts for a checked-out order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// An open order for a single sell session.
#[derive(Debug, Clone, Default)]
pub struct Order {
    lines: Vec<OrderLine>,
    subtotal: Money,
}

impl Order {
    /// Starts an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sells `quantity` of `item`, debiting every recipe ingredient.
    ///
    /// Fails with `InvalidSelection` if the item is sold out, whatever the
    /// quantity, and with `QuantityUnavailable` if the quantity exceeds what
    /// the inventory supports; either way nothing changes. Returns the
    /// low-stock warnings raised by the debits, in recipe order.
    pub fn sell(
        &mut self,
        inventory: &mut InventoryStore,
        item: MenuItem,
        quantity: u32,
    ) -> Result<Vec<LowStockWarning>> {
        let available = max_sellable(inventory, item);
        if available == 0 {
            return Err(TruckError::InvalidSelection {
                option: item.option(),
            });
        }
        if quantity > available {
            return Err(TruckError::QuantityUnavailable {
                item,
                requested: quantity,
                available,
            });
        }

        let warnings = item
            .recipe()
            .iter()
            .filter_map(|p| inventory.debit(p.ingredient, quantity * p.units))
            .collect();

        let cost = item.price() * quantity;
        self.subtotal += cost;
        self.lines.push(OrderLine { item, quantity });

        debug!(
            "Sold {} x {} for {}, subtotal {}",
            quantity,
            item.key(),
            cost,
            self.subtotal
        );

        Ok(warnings)
    }

    /// Closes the order and computes tax and total.
    pub fn checkout(self) -> OrderTotals {
        let subtotal = self.subtotal;
        let tax = subtotal.percent_of(sales_tax_rate());
        let total = subtotal + tax;

        info!(
            "Checked out {} line(s): subtotal {}, tax {}, total {}",
            self.lines.len(),
            subtotal,
            tax,
            total
        );

        OrderTotals {
            subtotal,
            tax,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::Ingredient;

    #[test]
    fn test_fresh_truck_maxima() {
        let inventory = InventoryStore::new();
        let maxima: Vec<u32> = sellable(&inventory).into_iter().map(|(_, m)| m).collect();
        assert_eq!(maxima, vec![75, 75, 75, 75, 41]);
    }

    #[test]
    fn test_chili_binds_addon_items() {
        let mut inventory = InventoryStore::new();
        inventory.set_inventory(Ingredient::Chili, 30).unwrap();
        assert_eq!(max_sellable(&inventory, MenuItem::Chiliburger), 7);
        assert_eq!(max_sellable(&inventory, MenuItem::Chilidog), 7);
        assert_eq!(max_sellable(&inventory, MenuItem::ChiliSelf), 2);
        assert_eq!(max_sellable(&inventory, MenuItem::Hamburger), 75);
    }

    #[test]
    fn test_sell_debits_recipe_and_accumulates_subtotal() {
        let mut inventory = InventoryStore::new();
        let mut order = Order::new();

        order.sell(&mut inventory, MenuItem::Chiliburger, 2).unwrap();
        order.sell(&mut inventory, MenuItem::Hotdog, 1).unwrap();

        assert_eq!(inventory.availability(Ingredient::HamburgerPatty), 198);
        assert_eq!(inventory.availability(Ingredient::HamburgerBun), 73);
        assert_eq!(inventory.availability(Ingredient::Chili), 492);
        assert_eq!(inventory.availability(Ingredient::Hotdog), 199);
        assert_eq!(inventory.availability(Ingredient::HotdogBun), 74);
        assert_eq!(order.subtotal().to_string(), "19.00");
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.lines().len(), 2);
    }

    #[test]
    fn test_sell_rejects_quantity_above_max() {
        let mut inventory = InventoryStore::new();
        inventory.set_inventory(Ingredient::HotdogBun, 4).unwrap();
        let mut order = Order::new();

        let err = order
            .sell(&mut inventory, MenuItem::Chilidog, 5)
            .unwrap_err();
        assert!(matches!(
            err,
            TruckError::QuantityUnavailable {
                item: MenuItem::Chilidog,
                requested: 5,
                available: 4
            }
        ));
        assert_eq!(inventory.availability(Ingredient::Hotdog), 200);
        assert_eq!(inventory.availability(Ingredient::Chili), 500);
        assert!(order.subtotal().is_zero());
        assert!(order.lines().is_empty());
    }

    #[test]
    fn test_sell_zero_quantity_changes_nothing() {
        let mut inventory = InventoryStore::new();
        let mut order = Order::new();
        let warnings = order.sell(&mut inventory, MenuItem::Hamburger, 0).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(inventory.availability(Ingredient::HamburgerBun), 75);
        assert!(order.subtotal().is_zero());
    }

    #[test]
    fn test_sell_reports_warnings_in_recipe_order() {
        let mut inventory = InventoryStore::new();
        inventory.set_inventory(Ingredient::HamburgerPatty, 41).unwrap();
        inventory.set_inventory(Ingredient::HamburgerBun, 16).unwrap();
        let mut order = Order::new();

        let warnings = order.sell(&mut inventory, MenuItem::Hamburger, 1).unwrap();
        let ingredients: Vec<Ingredient> = warnings.iter().map(|w| w.ingredient).collect();
        assert_eq!(
            ingredients,
            vec![Ingredient::HamburgerPatty, Ingredient::HamburgerBun]
        );
    }

    #[test]
    fn test_sell_rejects_sold_out_item_even_for_zero() {
        let mut inventory = InventoryStore::new();
        inventory.set_inventory(Ingredient::Chili, 0).unwrap();
        let mut order = Order::new();

        let err = order
            .sell(&mut inventory, MenuItem::ChiliSelf, 0)
            .unwrap_err();
        assert!(matches!(err, TruckError::InvalidSelection { option: 4 }));
        assert!(order.lines().is_empty());
        assert!(order.subtotal().is_zero());
        assert_eq!(inventory.availability(Ingredient::Chili), 0);
    }

    #[test]
    fn test_select_rejects_out_of_range_and_sold_out() {
        let mut inventory = InventoryStore::new();
        assert_eq!(select(&inventory, 2).unwrap(), MenuItem::Hotdog);
        assert!(matches!(
            select(&inventory, 7),
            Err(TruckError::InvalidSelection { option: 7 })
        ));

        inventory.set_inventory(Ingredient::HotdogBun, 0).unwrap();
        assert!(select(&inventory, 2).is_err());
        assert!(select(&inventory, 3).is_err());
    }

    #[test]
    fn test_checkout_applies_five_percent_tax() {
        let mut inventory = InventoryStore::new();
        let mut order = Order::new();
        order.sell(&mut inventory, MenuItem::Hamburger, 4).unwrap();

        let totals = order.checkout();
        assert_eq!(totals.subtotal.to_string(), "20.00");
        assert_eq!(totals.tax.to_string(), "1.00");
        assert_eq!(totals.total.to_string(), "21.00");
    }

    #[test]
    fn test_empty_checkout_is_zero() {
        let totals = Order::new().checkout();
        assert!(totals.total.is_zero());
    }
}

//! Scenario and edge case tests for the inventory and order engine.

use food_truck_pos::order::select;
use food_truck_pos::{
    max_sellable, sellable, Ingredient, InventoryStore, MenuItem, Money, Order, TruckError,
};

fn sold_out(inventory: &InventoryStore, item: MenuItem) -> bool {
    max_sellable(inventory, item) == 0
}

// ==================== SELLABLE MAXIMA ====================

#[test]
fn test_seventy_five_hamburgers_empty_the_buns() {
    let mut inventory = InventoryStore::new();
    let mut order = Order::new();

    order.sell(&mut inventory, MenuItem::Hamburger, 75).unwrap();

    assert_eq!(inventory.availability(Ingredient::HamburgerPatty), 125);
    assert_eq!(inventory.availability(Ingredient::HamburgerBun), 0);
    assert!(sold_out(&inventory, MenuItem::Hamburger));
    assert!(sold_out(&inventory, MenuItem::Chiliburger));
    assert_eq!(max_sellable(&inventory, MenuItem::Hotdog), 75);
}

#[test]
fn test_maxima_are_idempotent() {
    let mut inventory = InventoryStore::new();
    inventory.set_inventory(Ingredient::Chili, 37).unwrap();
    inventory.set_inventory(Ingredient::Hotdog, 5).unwrap();

    assert_eq!(sellable(&inventory), sellable(&inventory));
}

#[test]
fn test_empty_chili_blocks_every_chili_item() {
    let mut inventory = InventoryStore::new();
    inventory.set_inventory(Ingredient::Chili, 0).unwrap();

    for item in [MenuItem::ChiliSelf, MenuItem::Chiliburger, MenuItem::Chilidog] {
        assert!(sold_out(&inventory, item), "{:?}", item);
        assert!(matches!(
            select(&inventory, item.option()),
            Err(TruckError::InvalidSelection { .. })
        ));
    }
    assert_eq!(select(&inventory, 0).unwrap(), MenuItem::Hamburger);
}

#[test]
fn test_chili_servings_under_use_shared_stock() {
    // 11 oz: two 4 oz toppings fit but no 12 oz bowl.
    let mut inventory = InventoryStore::new();
    inventory.set_inventory(Ingredient::Chili, 11).unwrap();

    assert_eq!(max_sellable(&inventory, MenuItem::ChiliSelf), 0);
    assert_eq!(max_sellable(&inventory, MenuItem::Chilidog), 2);
}

#[test]
fn test_select_rejects_return_and_beyond() {
    let inventory = InventoryStore::new();
    for option in [5, 6, u32::MAX] {
        assert!(select(&inventory, option).is_err());
    }
}

// ==================== LINE ITEMS ====================

#[test]
fn test_ten_bowls_of_chili() {
    let mut inventory = InventoryStore::new();
    let mut order = Order::new();

    order.sell(&mut inventory, MenuItem::ChiliSelf, 10).unwrap();

    assert_eq!(inventory.availability(Ingredient::Chili), 380);
    assert_eq!(inventory.chili_servings().self_serve, 31);
    assert_eq!(inventory.chili_servings().addon, 95);
}

#[test]
fn test_lines_share_depleting_pools() {
    let mut inventory = InventoryStore::new();
    inventory.set_inventory(Ingredient::HamburgerBun, 10).unwrap();
    let mut order = Order::new();

    order.sell(&mut inventory, MenuItem::Hamburger, 6).unwrap();
    assert_eq!(max_sellable(&inventory, MenuItem::Chiliburger), 4);

    let err = order
        .sell(&mut inventory, MenuItem::Chiliburger, 5)
        .unwrap_err();
    assert!(matches!(err, TruckError::QuantityUnavailable { available: 4, .. }));

    order.sell(&mut inventory, MenuItem::Chiliburger, 4).unwrap();
    assert_eq!(inventory.availability(Ingredient::HamburgerBun), 0);
    assert_eq!(order.subtotal().to_string(), "58.00");
}

#[test]
fn test_selling_every_maximum_never_goes_negative() {
    let mut inventory = InventoryStore::new();
    inventory.set_inventory(Ingredient::Chili, 97).unwrap();
    let mut order = Order::new();

    for item in MenuItem::ALL {
        let max = max_sellable(&inventory, item);
        if max == 0 {
            assert!(matches!(
                order.sell(&mut inventory, item, max),
                Err(TruckError::InvalidSelection { .. })
            ));
            continue;
        }
        order.sell(&mut inventory, item, max).unwrap();
        assert!(inventory.check_invariant());
    }

    for item in MenuItem::ALL {
        assert!(sold_out(&inventory, item), "{:?}", item);
    }
}

// ==================== LOW STOCK ====================

#[test]
fn test_warning_fires_at_threshold_and_repeats() {
    let mut inventory = InventoryStore::new();
    let mut order = Order::new();

    let warnings = order.sell(&mut inventory, MenuItem::Hotdog, 59).unwrap();
    assert!(warnings.is_empty());

    let warnings = order.sell(&mut inventory, MenuItem::Hotdog, 1).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].ingredient, Ingredient::HotdogBun);
    assert_eq!(warnings[0].remaining, 15);

    let warnings = order.sell(&mut inventory, MenuItem::Hotdog, 1).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].remaining, 14);
}

#[test]
fn test_recount_below_threshold_does_not_warn() {
    let mut inventory = InventoryStore::new();
    inventory.set_inventory(Ingredient::Chili, 50).unwrap();
    let mut order = Order::new();

    let warnings = order.sell(&mut inventory, MenuItem::ChiliSelf, 0).unwrap();
    assert!(warnings.is_empty());

    let warnings = order.sell(&mut inventory, MenuItem::ChiliSelf, 1).unwrap();
    assert_eq!(warnings[0].ingredient, Ingredient::Chili);
    assert_eq!(warnings[0].remaining, 38);
}

// ==================== CHECKOUT ====================

#[test]
fn test_twenty_dollar_subtotal_checkout() {
    let mut inventory = InventoryStore::new();
    let mut order = Order::new();
    order.sell(&mut inventory, MenuItem::ChiliSelf, 5).unwrap();
    assert_eq!(order.subtotal(), Money::from_cents(2000));

    let totals = order.checkout();
    assert_eq!(totals.tax, Money::from_cents(100));
    assert_eq!(totals.total, Money::from_cents(2100));
}

#[test]
fn test_mixed_order_totals() {
    let mut inventory = InventoryStore::new();
    let mut order = Order::new();
    order.sell(&mut inventory, MenuItem::Chilidog, 3).unwrap();
    order.sell(&mut inventory, MenuItem::Hotdog, 1).unwrap();

    let totals = order.checkout();
    assert_eq!(totals.subtotal.to_string(), "26.00");
    assert_eq!(totals.tax.to_string(), "1.30");
    assert_eq!(totals.total.to_string(), "27.30");
}

#[test]
fn test_new_order_starts_empty_after_checkout() {
    let mut inventory = InventoryStore::new();
    let mut order = Order::new();
    order.sell(&mut inventory, MenuItem::Hamburger, 2).unwrap();
    order.checkout();

    let next = Order::new();
    assert!(next.subtotal().is_zero());
    assert_eq!(inventory.availability(Ingredient::HamburgerBun), 73);
}

// ==================== INVENTORY BOUNDS ====================

#[test]
fn test_recount_at_capacity_and_zero() {
    let mut inventory = InventoryStore::new();
    for ingredient in Ingredient::ALL {
        inventory.set_inventory(ingredient, 0).unwrap();
        assert_eq!(inventory.availability(ingredient), 0);
        inventory
            .set_inventory(ingredient, ingredient.capacity())
            .unwrap();
        assert!(inventory
            .set_inventory(ingredient, ingredient.capacity() + 1)
            .is_err());
        assert_eq!(inventory.availability(ingredient), ingredient.capacity());
    }
    assert!(inventory.check_invariant());
}

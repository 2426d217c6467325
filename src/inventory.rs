//! Ingredient stock held on the truck.
//!
//! Maintains the invariant `0 <= current <= capacity` for every ingredient,
//! and keeps the derived chili serving counts in step with chili stock.

use crate::error::{Result, TruckError};
use crate::ingredient::{Ingredient, CHILI_ADDON_SERVING, CHILI_SELF_SERVING};
use log::{debug, error, warn};
use std::fmt;

/// Whole chili servings available at the current chili level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChiliServings {
    /// 12 oz bowls.
    pub self_serve: u32,

    /// 4 oz toppings.
    pub addon: u32,
}

impl ChiliServings {
    fn from_ounces(ounces: u32) -> Self {
        ChiliServings {
            self_serve: ounces / CHILI_SELF_SERVING,
            addon: ounces / CHILI_ADDON_SERVING,
        }
    }
}

/// Raised when a debit leaves an ingredient at or below its low-stock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockWarning {
    pub ingredient: Ingredient,
    pub remaining: u32,
}

impl fmt::Display for LowStockWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: {} inventory low. Please restock soon.",
            self.ingredient.warning_name()
        )
    }
}

/// Current stock of every ingredient.
///
/// # Invariants
///
/// - `levels[i] <= ingredient.capacity()` after every operation
/// - `chili` always equals the servings derived from the chili level
#[derive(Debug, Clone)]
pub struct InventoryStore {
    /// Indexed in `Ingredient::ALL` order.
    levels: [u32; 5],

    chili: ChiliServings,
}

impl InventoryStore {
    /// Creates a fully stocked truck.
    pub fn new() -> Self {
        let levels = Ingredient::ALL.map(Ingredient::capacity);
        InventoryStore {
            levels,
            chili: ChiliServings::from_ounces(Ingredient::Chili.capacity()),
        }
    }

    fn slot(ingredient: Ingredient) -> usize {
        match ingredient {
            Ingredient::HamburgerPatty => 0,
            Ingredient::HamburgerBun => 1,
            Ingredient::Hotdog => 2,
            Ingredient::HotdogBun => 3,
            Ingredient::Chili => 4,
        }
    }

    /// Returns the current stock of an ingredient.
    pub fn availability(&self, ingredient: Ingredient) -> u32 {
        self.levels[Self::slot(ingredient)]
    }

    /// Returns the chili servings derived from the current chili level.
    pub fn chili_servings(&self) -> ChiliServings {
        self.chili
    }

    /// Whole portions of `units` each that the ingredient can supply.
    ///
    /// Chili answers from its pre-divided serving counts rather than raw
    /// ounces, matching what the sell menu shows.
    pub fn servings(&self, ingredient: Ingredient, units: u32) -> u32 {
        match (ingredient, units) {
            (_, 0) => u32::MAX,
            (Ingredient::Chili, CHILI_SELF_SERVING) => self.chili.self_serve,
            (Ingredient::Chili, CHILI_ADDON_SERVING) => self.chili.addon,
            _ => self.availability(ingredient) / units,
        }
    }

    /// Replaces the stock of an ingredient with a recounted level.
    ///
    /// This is an absolute overwrite, not an additive restock. Fails with
    /// `OverCapacity` and leaves stock untouched if `level` exceeds capacity.
    pub fn set_inventory(&mut self, ingredient: Ingredient, level: u32) -> Result<()> {
        let capacity = ingredient.capacity();
        if level > capacity {
            return Err(TruckError::OverCapacity {
                ingredient,
                level,
                capacity,
            });
        }

        self.levels[Self::slot(ingredient)] = level;
        self.refresh_servings(ingredient);
        debug!("Recounted {} to {}", ingredient.name(), level);
        Ok(())
    }

    /// Removes `amount` units of an ingredient from stock.
    ///
    /// Callers clamp `amount` to the current level beforehand. Returns a
    /// warning when a non-zero debit leaves the ingredient at or below its
    /// low-stock threshold; the warning repeats on every such debit.
    pub fn debit(&mut self, ingredient: Ingredient, amount: u32) -> Option<LowStockWarning> {
        let slot = Self::slot(ingredient);
        let current = self.levels[slot];
        if amount > current {
            error!(
                "Debit of {} {} exceeds stock of {}, clamping to zero",
                amount,
                ingredient.name(),
                current
            );
        }

        let remaining = current.saturating_sub(amount);
        self.levels[slot] = remaining;
        self.refresh_servings(ingredient);
        debug!("Debited {} {}, {} left", amount, ingredient.name(), remaining);

        if amount > 0 && remaining <= ingredient.low_threshold() {
            warn!("{} inventory low: {} left", ingredient.name(), remaining);
            Some(LowStockWarning {
                ingredient,
                remaining,
            })
        } else {
            None
        }
    }

    /// Ingredient levels in inventory-menu order.
    pub fn snapshot(&self) -> Vec<(Ingredient, u32)> {
        Ingredient::ALL
            .into_iter()
            .map(|ingredient| (ingredient, self.availability(ingredient)))
            .collect()
    }

    fn refresh_servings(&mut self, ingredient: Ingredient) {
        if ingredient == Ingredient::Chili {
            self.chili = ChiliServings::from_ounces(self.availability(Ingredient::Chili));
        }
    }

    /// Verifies capacity bounds and chili serving consistency.
    pub fn check_invariant(&self) -> bool {
        Ingredient::ALL
            .into_iter()
            .all(|i| self.availability(i) <= i.capacity())
            && self.chili == ChiliServings::from_ounces(self.availability(Ingredient::Chili))
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

//! The five raw ingredient pools carried on the truck.

use std::fmt;

/// Ounces of chili in a self-serve bowl.
pub const CHILI_SELF_SERVING: u32 = 12;

/// Ounces of chili added on top of a burger or hotdog.
pub const CHILI_ADDON_SERVING: u32 = 4;

/// Stock at or below this percentage of capacity raises a low-stock warning.
pub const LOW_STOCK_PERCENT: u32 = 20;

/// A raw stock item tracked by count (or ounces, for chili).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ingredient {
    HamburgerPatty,
    HamburgerBun,
    Hotdog,
    HotdogBun,
    Chili,
}

impl Ingredient {
    /// All ingredients in inventory-menu order.
    pub const ALL: [Ingredient; 5] = [
        Ingredient::HamburgerPatty,
        Ingredient::HamburgerBun,
        Ingredient::Hotdog,
        Ingredient::HotdogBun,
        Ingredient::Chili,
    ];

    /// Maximum stock the truck can hold.
    pub fn capacity(self) -> u32 {
        match self {
            Ingredient::HamburgerPatty => 200,
            Ingredient::HamburgerBun => 75,
            Ingredient::Hotdog => 200,
            Ingredient::HotdogBun => 75,
            Ingredient::Chili => 500,
        }
    }

    /// `floor(capacity * 0.2)`.
    pub fn low_threshold(self) -> u32 {
        self.capacity() * LOW_STOCK_PERCENT / 100
    }

    /// Position in the inventory menu.
    pub fn from_option(option: u32) -> Option<Self> {
        Self::ALL.get(option as usize).copied()
    }

    /// Plural label shown in the inventory table.
    pub fn label(self) -> &'static str {
        match self {
            Ingredient::HamburgerPatty => "Hamburger Patties",
            Ingredient::HamburgerBun => "Hamburger Buns",
            Ingredient::Hotdog => "Hotdogs",
            Ingredient::HotdogBun => "Hotdog Buns",
            Ingredient::Chili => "Chili",
        }
    }

    /// Lowercase singular name used in prompts and messages.
    pub fn name(self) -> &'static str {
        match self {
            Ingredient::HamburgerPatty => "hamburger patty",
            Ingredient::HamburgerBun => "hamburger bun",
            Ingredient::Hotdog => "hotdog",
            Ingredient::HotdogBun => "hotdog bun",
            Ingredient::Chili => "chili",
        }
    }

    /// Singular name that opens a low-stock warning.
    pub fn warning_name(self) -> &'static str {
        match self {
            Ingredient::HamburgerPatty => "Hamburger patty",
            Ingredient::HamburgerBun => "Hamburger bun",
            Ingredient::Hotdog => "Hotdog",
            Ingredient::HotdogBun => "Hotdog bun",
            Ingredient::Chili => "Chili",
        }
    }

    /// Key used in replay files.
    pub fn key(self) -> &'static str {
        match self {
            Ingredient::HamburgerPatty => "patty",
            Ingredient::HamburgerBun => "bun",
            Ingredient::Hotdog => "hotdog",
            Ingredient::HotdogBun => "hotdog_bun",
            Ingredient::Chili => "chili",
        }
    }

    /// Looks up an ingredient by its replay key, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|i| i.key() == key)
    }

    /// Formats a stock level with its unit.
    pub fn format_level(self, level: u32) -> String {
        match self {
            Ingredient::Chili => format!("{} oz", level),
            _ => level.to_string(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

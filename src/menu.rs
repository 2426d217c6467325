//! The fixed menu: prices and per-unit consumption recipes.

use crate::ingredient::{Ingredient, CHILI_ADDON_SERVING, CHILI_SELF_SERVING};
use crate::money::Money;
use std::fmt;

/// Price of a hamburger or hotdog, in cents.
const BASE_PRICE_CENTS: i64 = 500;

/// Surcharge for adding chili to a burger or hotdog, in cents.
const CHILI_ADDON_CENTS: i64 = 200;

/// Price of a self-serve bowl of chili, in cents.
const CHILI_SELF_CENTS: i64 = 400;

/// Units of one ingredient consumed by one unit of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portion {
    pub ingredient: Ingredient,
    pub units: u32,
}

const fn portion(ingredient: Ingredient, units: u32) -> Portion {
    Portion { ingredient, units }
}

const HAMBURGER_RECIPE: &[Portion] = &[
    portion(Ingredient::HamburgerPatty, 1),
    portion(Ingredient::HamburgerBun, 1),
];

const CHILIBURGER_RECIPE: &[Portion] = &[
    portion(Ingredient::HamburgerPatty, 1),
    portion(Ingredient::HamburgerBun, 1),
    portion(Ingredient::Chili, CHILI_ADDON_SERVING),
];

const HOTDOG_RECIPE: &[Portion] = &[
    portion(Ingredient::Hotdog, 1),
    portion(Ingredient::HotdogBun, 1),
];

const CHILIDOG_RECIPE: &[Portion] = &[
    portion(Ingredient::Hotdog, 1),
    portion(Ingredient::HotdogBun, 1),
    portion(Ingredient::Chili, CHILI_ADDON_SERVING),
];

const CHILI_SELF_RECIPE: &[Portion] = &[portion(Ingredient::Chili, CHILI_SELF_SERVING)];

/// A sellable product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MenuItem {
    Hamburger,
    Chiliburger,
    Hotdog,
    Chilidog,
    ChiliSelf,
}

impl MenuItem {
    /// All items in sell-menu order.
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Hamburger,
        MenuItem::Chiliburger,
        MenuItem::Hotdog,
        MenuItem::Chilidog,
        MenuItem::ChiliSelf,
    ];

    /// Position in the sell menu.
    pub fn from_option(option: u32) -> Option<Self> {
        Self::ALL.get(option as usize).copied()
    }

    /// Inverse of `from_option`.
    pub fn option(self) -> u32 {
        match self {
            MenuItem::Hamburger => 0,
            MenuItem::Chiliburger => 1,
            MenuItem::Hotdog => 2,
            MenuItem::Chilidog => 3,
            MenuItem::ChiliSelf => 4,
        }
    }

    /// Unit price. Chili-addon items are the base item plus the addon surcharge.
    pub fn price(self) -> Money {
        match self {
            MenuItem::Hamburger | MenuItem::Hotdog => Money::from_cents(BASE_PRICE_CENTS),
            MenuItem::Chiliburger | MenuItem::Chilidog => {
                Money::from_cents(BASE_PRICE_CENTS + CHILI_ADDON_CENTS)
            }
            MenuItem::ChiliSelf => Money::from_cents(CHILI_SELF_CENTS),
        }
    }

    /// Ingredients consumed by one unit of this item.
    pub fn recipe(self) -> &'static [Portion] {
        match self {
            MenuItem::Hamburger => HAMBURGER_RECIPE,
            MenuItem::Chiliburger => CHILIBURGER_RECIPE,
            MenuItem::Hotdog => HOTDOG_RECIPE,
            MenuItem::Chilidog => CHILIDOG_RECIPE,
            MenuItem::ChiliSelf => CHILI_SELF_RECIPE,
        }
    }

    /// Label shown in the sell table.
    pub fn label(self) -> String {
        match self {
            MenuItem::Hamburger => "Hamburger".to_string(),
            MenuItem::Chiliburger => "Chiliburger".to_string(),
            MenuItem::Hotdog => "Hotdog".to_string(),
            MenuItem::Chilidog => "Chilidog".to_string(),
            MenuItem::ChiliSelf => format!("Chili ({} oz)", CHILI_SELF_SERVING),
        }
    }

    /// Lowercase plural used in quantity messages.
    pub fn plural(self) -> &'static str {
        match self {
            MenuItem::Hamburger => "hamburgers",
            MenuItem::Chiliburger => "chiliburgers",
            MenuItem::Hotdog => "hotdogs",
            MenuItem::Chilidog => "chilidogs",
            MenuItem::ChiliSelf => "chili",
        }
    }

    /// Key used in replay files.
    pub fn key(self) -> &'static str {
        match self {
            MenuItem::Hamburger => "hamburger",
            MenuItem::Chiliburger => "chiliburger",
            MenuItem::Hotdog => "hotdog",
            MenuItem::Chilidog => "chilidog",
            MenuItem::ChiliSelf => "chili",
        }
    }

    /// Looks up an item by its replay key, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|item| item.key() == key)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

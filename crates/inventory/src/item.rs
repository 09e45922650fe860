use serde::{Deserialize, Serialize};

use shelflife_core::ValueObject;

/// A stocked item tracked by the engine.
///
/// `name` is the only categorization signal: the selector matches on it to
/// decide which update rule applies. `sell_in` counts days until (or, when
/// negative, since) the sell-by date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// `true` once the sell-by date has passed.
    pub fn is_past_due(&self) -> bool {
        self.sell_in < 0
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Default inventory used by the demo: one item per category plus a couple
/// of plain items.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Wheat Bread", 10, 20),
        Item::new("Aged Cheese", 2, 0),
        Item::new("Canned Beans", 5, 7),
        Item::new("Instant Ramen", 0, 20),
        Item::new("Instant Ramen", -1, 20),
        Item::new("Organic Apple", 3, 6),
        Item::new("Organic Milk", 1, 12),
    ]
}

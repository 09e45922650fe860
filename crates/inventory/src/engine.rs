//! Day-by-day inventory engine.

use shelflife_core::DomainResult;

use crate::config::EngineConfig;
use crate::item::Item;
use crate::selector::StrategySelector;

/// Owns a collection of items and advances them one simulated day at a time.
///
/// Every item handed in is cloned, and every snapshot handed out is a fresh
/// `Vec` of clones, so caller-side edits never reach engine state and engine
/// updates never reach previously returned snapshots.
#[derive(Debug, Clone)]
pub struct InventoryEngine {
    items: Vec<Item>,
    selector: StrategySelector,
    config: EngineConfig,
    day: u32,
}

impl InventoryEngine {
    /// Engine with the standard rule set and default configuration.
    pub fn new(items: &[Item]) -> Self {
        Self {
            items: items.to_vec(),
            selector: StrategySelector::standard(),
            config: EngineConfig::default(),
            day: 0,
        }
    }

    /// Engine with custom rules and configuration.
    pub fn with_config(
        items: &[Item],
        config: EngineConfig,
        selector: StrategySelector,
    ) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            items: items.to_vec(),
            selector,
            config,
            day: 0,
        })
    }

    /// Apply one day of updates to every item, remove expired items, and
    /// return the resulting snapshot.
    pub fn advance_day(&mut self) -> Vec<Item> {
        self.day += 1;
        let before = self.items.len();
        let bounds = self.config.bounds;

        for item in self.items.iter_mut() {
            let strategy = self.selector.resolve(&item.name);
            let (sell_in, quality) = (item.sell_in, item.quality);
            strategy.apply(item, bounds);
            tracing::trace!(
                day = self.day,
                name = %item.name,
                rule = strategy.label(),
                sell_in_before = sell_in,
                sell_in = item.sell_in,
                quality_before = quality,
                quality = item.quality,
                "item updated"
            );
        }

        let config = self.config;
        self.items.retain(|item| {
            let expired = config.is_expired(item.sell_in);
            if expired {
                tracing::debug!(name = %item.name, sell_in = item.sell_in, "item removed");
            }
            !expired
        });

        tracing::debug!(
            day = self.day,
            items_before = before,
            items_after = self.items.len(),
            "day advanced"
        );

        self.items()
    }

    /// Snapshot of the current items.
    pub fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Borrowed read-only view of the current items.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Number of days advanced since construction.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Label of the rule that applies to `name`.
    pub fn strategy_label(&self, name: &str) -> &'static str {
        self.selector.resolve(name).label()
    }
}

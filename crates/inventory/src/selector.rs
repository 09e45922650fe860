//! Name-based rule resolution.
//!
//! Three tiers, checked in order:
//! 1. exact name (case-insensitive, hash lookup)
//! 2. name prefix (case-insensitive, first registered prefix wins)
//! 3. fallback
//!
//! A name that matches nothing is not an error; it gets the fallback rule.

use std::collections::HashMap;
use std::sync::Arc;

use crate::strategy::{Appreciating, FastDegrading, Standard, Unchanging, UpdateStrategy};

/// Names and prefixes registered by [`StrategySelector::standard`].
pub const AGED_CHEESE: &str = "Aged Cheese";
pub const INSTANT_RAMEN: &str = "Instant Ramen";
pub const ORGANIC_PREFIX: &str = "Organic";

#[derive(Debug, Clone)]
struct PrefixRule {
    /// Stored lowercased.
    prefix: String,
    strategy: Arc<dyn UpdateStrategy>,
}

/// Maps an item name to exactly one [`UpdateStrategy`].
///
/// Immutable once built; cloning shares the underlying strategies.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    exact: HashMap<String, Arc<dyn UpdateStrategy>>,
    prefixes: Vec<PrefixRule>,
    fallback: Arc<dyn UpdateStrategy>,
}

impl StrategySelector {
    pub fn builder() -> StrategySelectorBuilder {
        StrategySelectorBuilder::default()
    }

    /// The shop's rule set: aged cheese appreciates, instant ramen never
    /// changes, anything organic degrades fast, everything else is standard.
    pub fn standard() -> Self {
        Self::builder()
            .exact(AGED_CHEESE, Appreciating)
            .exact(INSTANT_RAMEN, Unchanging)
            .prefix(ORGANIC_PREFIX, FastDegrading)
            .build()
    }

    /// Resolve the rule for `name`.
    pub fn resolve(&self, name: &str) -> &dyn UpdateStrategy {
        let key = name.to_lowercase();

        if let Some(strategy) = self.exact.get(&key) {
            return strategy.as_ref();
        }

        self.prefixes
            .iter()
            .find(|rule| key.starts_with(&rule.prefix))
            .map(|rule| rule.strategy.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`StrategySelector`].
///
/// Starts with no exact or prefix rules and [`Standard`] as the fallback.
#[derive(Debug)]
pub struct StrategySelectorBuilder {
    exact: HashMap<String, Arc<dyn UpdateStrategy>>,
    prefixes: Vec<PrefixRule>,
    fallback: Arc<dyn UpdateStrategy>,
}

impl Default for StrategySelectorBuilder {
    fn default() -> Self {
        Self {
            exact: HashMap::new(),
            prefixes: Vec::new(),
            fallback: Arc::new(Standard),
        }
    }
}

impl StrategySelectorBuilder {
    /// Register an exact-name rule. Re-registering a name replaces it.
    pub fn exact(mut self, name: &str, strategy: impl UpdateStrategy + 'static) -> Self {
        self.exact.insert(name.to_lowercase(), Arc::new(strategy));
        self
    }

    /// Append a prefix rule. Earlier prefixes take precedence.
    pub fn prefix(mut self, prefix: &str, strategy: impl UpdateStrategy + 'static) -> Self {
        self.prefixes.push(PrefixRule {
            prefix: prefix.to_lowercase(),
            strategy: Arc::new(strategy),
        });
        self
    }

    pub fn fallback(mut self, strategy: impl UpdateStrategy + 'static) -> Self {
        self.fallback = Arc::new(strategy);
        self
    }

    pub fn build(self) -> StrategySelector {
        StrategySelector {
            exact: self.exact,
            prefixes: self.prefixes,
            fallback: self.fallback,
        }
    }
}

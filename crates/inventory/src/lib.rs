//! Inventory shelf-life module.
//!
//! This crate contains the end-of-day update rules for stocked items,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Callers construct an [`InventoryEngine`], call
//! [`InventoryEngine::advance_day`] once per simulated day, and read back
//! snapshots.

pub mod config;
pub mod engine;
pub mod item;
pub mod selector;
pub mod strategy;

pub use config::{EngineConfig, QualityBounds};
pub use engine::InventoryEngine;
pub use item::{Item, sample_items};
pub use selector::{StrategySelector, StrategySelectorBuilder};
pub use strategy::{
    Appreciating, FastDegrading, Standard, Unchanging, UpdateStrategy, clamp,
};

//! Console demo: runs the shelf-life engine for a number of days and prints
//! the inventory after each one.

mod settings;
mod table;

use anyhow::Result;

use shelflife_inventory::{InventoryEngine, StrategySelector};

use crate::settings::Settings;

fn main() -> Result<()> {
    shelflife_observability::init();

    let settings = Settings::from_env()?;
    let mut engine =
        InventoryEngine::with_config(&settings.items, settings.config, StrategySelector::standard())?;

    tracing::info!(
        items = engine.len(),
        days = settings.days,
        removal_threshold = engine.config().removal_threshold,
        "starting simulation"
    );

    println!("-------- day 0 --------");
    println!("{}", table::render(&engine, &engine.items()));

    for _ in 0..settings.days {
        let snapshot = engine.advance_day();
        println!("-------- day {} --------", engine.day());
        println!("{}", table::render(&engine, &snapshot));
    }

    tracing::info!(remaining = engine.len(), "simulation finished");
    Ok(())
}

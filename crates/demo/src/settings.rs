//! Demo settings, read from the environment.
//!
//! - `SHELFLIFE_DAYS`: number of days to simulate (default 10)
//! - `SHELFLIFE_ITEMS`: path to a JSON array of items (default: built-in sample)
//! - `SHELFLIFE_CONFIG`: path to a JSON engine config (default: built-in defaults)

use std::path::Path;

use anyhow::{Context, Result};

use shelflife_inventory::{EngineConfig, Item, sample_items};

pub const DEFAULT_DAYS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    pub days: u32,
    pub items: Vec<Item>,
    pub config: EngineConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let days = match std::env::var("SHELFLIFE_DAYS") {
            Ok(raw) => parse_days(&raw)?,
            Err(_) => {
                tracing::debug!("SHELFLIFE_DAYS not set; using {DEFAULT_DAYS}");
                DEFAULT_DAYS
            }
        };

        let items = match std::env::var("SHELFLIFE_ITEMS") {
            Ok(path) => load_items(Path::new(&path))?,
            Err(_) => {
                tracing::debug!("SHELFLIFE_ITEMS not set; using sample inventory");
                sample_items()
            }
        };

        let config = match std::env::var("SHELFLIFE_CONFIG") {
            Ok(path) => load_config(Path::new(&path))?,
            Err(_) => EngineConfig::default(),
        };

        Ok(Self {
            days,
            items,
            config,
        })
    }
}

fn parse_days(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .with_context(|| format!("SHELFLIFE_DAYS must be a non-negative integer, got {raw:?}"))
}

fn load_items(path: &Path) -> Result<Vec<Item>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items from {}", path.display()))?;
    parse_items(&text).with_context(|| format!("invalid items file {}", path.display()))
}

fn parse_items(text: &str) -> Result<Vec<Item>> {
    Ok(serde_json::from_str(text)?)
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    EngineConfig::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
}

//! Engine configuration: quality bounds and the removal threshold.

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult};

/// Inclusive range that bounded categories clamp quality into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityBounds {
    pub min: i32,
    pub max: i32,
}

impl QualityBounds {
    pub const DEFAULT_MIN: i32 = 0;
    pub const DEFAULT_MAX: i32 = 25;

    pub fn new(min: i32, max: i32) -> DomainResult<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn contains(&self, quality: i32) -> bool {
        (self.min..=self.max).contains(&quality)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.min > self.max {
            return Err(DomainError::validation(format!(
                "quality bounds inverted (min: {}, max: {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Tunables for [`crate::InventoryEngine`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bounds: QualityBounds,
    /// Items whose `sell_in` is at or below this value are removed.
    pub removal_threshold: i32,
}

impl EngineConfig {
    pub const DEFAULT_REMOVAL_THRESHOLD: i32 = -5;

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> DomainResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| DomainError::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.bounds.validate()
    }

    pub fn is_expired(&self, sell_in: i32) -> bool {
        sell_in <= self.removal_threshold
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bounds: QualityBounds::default(),
            removal_threshold: Self::DEFAULT_REMOVAL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_business_rules() {
        let config = EngineConfig::default();
        assert_eq!(config.bounds, QualityBounds { min: 0, max: 25 });
        assert_eq!(config.removal_threshold, -5);
    }

    #[test]
    fn expiry_is_inclusive_of_threshold() {
        let config = EngineConfig::default();
        assert!(!config.is_expired(-4));
        assert!(config.is_expired(-5));
        assert!(config.is_expired(-9));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = QualityBounds::new(10, 5).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("inverted") => {}
            _ => panic!("Expected validation error for inverted bounds"),
        }
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = EngineConfig::from_json(r#"{"bounds":{"max":50}}"#).unwrap();
        assert_eq!(config.bounds, QualityBounds { min: 0, max: 50 });
        assert_eq!(config.removal_threshold, -5);
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = EngineConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn from_json_validates() {
        let err = EngineConfig::from_json(r#"{"bounds":{"min":30,"max":25}}"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn bounds_contains_is_inclusive() {
        let bounds = QualityBounds::default();
        assert!(bounds.contains(0));
        assert!(bounds.contains(25));
        assert!(!bounds.contains(26));
        assert!(!bounds.contains(-1));
    }
}

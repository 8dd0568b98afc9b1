//! Color configuration.
//!
//! The color set, its weights and its ORDER are configuration. The
//! order feeds seed derivation, so it must stay stable between runs
//! that are meant to reproduce each other.

use crate::{
    error::{SimError, SimResult},
    types::ColorName,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorConfig {
    pub name:     ColorName,
    /// Relative weight for color rolls. Zero means never drawn.
    pub weight:   f64,
    /// Item list file, relative to the data directory.
    /// Defaults to `<name>_orbs.csv`.
    #[serde(default)]
    pub orb_list: Option<String>,
}

impl ColorConfig {
    pub fn new(name: impl Into<ColorName>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            orb_list: None,
        }
    }

    pub fn orb_list_file(&self) -> String {
        self.orb_list
            .clone()
            .unwrap_or_else(|| format!("{}_orbs.csv", self.name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RollerConfig {
    pub colors: Vec<ColorConfig>,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                ColorConfig::new("blue", 1.0),
                ColorConfig::new("red", 1.0),
                ColorConfig::new("purple", 1.0),
                ColorConfig::new("green", 1.0),
            ],
        }
    }
}

impl RollerConfig {
    /// Load a JSON color configuration, e.g.
    /// `{"colors": [{"name": "blue", "weight": 2}]}`.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!(
            "Loaded {} colors from {}",
            config.colors.len(),
            path.display()
        );
        Ok(config)
    }

    /// Reject duplicate color names and weights that are negative or
    /// not finite.
    pub fn validate(&self) -> SimResult<()> {
        let mut seen = HashSet::new();
        for color in &self.colors {
            if !seen.insert(color.name.as_str()) {
                return Err(SimError::Configuration(format!(
                    "color '{}' is declared more than once",
                    color.name
                )));
            }
            if !color.weight.is_finite() || color.weight < 0.0 {
                return Err(SimError::Configuration(format!(
                    "color '{}' has invalid weight {}",
                    color.name, color.weight
                )));
            }
        }
        Ok(())
    }

    /// Color names in declared order.
    pub fn color_names(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|c| c.name.as_str())
    }

    pub fn color(&self, name: &str) -> Option<&ColorConfig> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// The colors of `Catalog::default_test()`, with no orb list files.
    /// Use this in tests instead of `load()`.
    pub fn default_test() -> Self {
        Self {
            colors: ["blue", "red", "purple", "green"]
                .into_iter()
                .map(|name| ColorConfig::new(name, 1.0))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_four_equal_colors_in_order() {
        let config = RollerConfig::default();
        let names: Vec<&str> = config.color_names().collect();
        assert_eq!(names, ["blue", "red", "purple", "green"]);
        assert!(config.colors.iter().all(|c| c.weight == 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_matches_test_catalog() {
        let config = RollerConfig::default_test();
        let catalog = crate::catalog::Catalog::default_test().unwrap();
        assert!(config.validate().is_ok());
        assert!(config.color_names().all(|c| catalog.contains_color(c)));
    }

    #[test]
    fn orb_list_defaults_to_color_name() {
        let mut color = ColorConfig::new("blue", 1.0);
        assert_eq!(color.orb_list_file(), "blue_orbs.csv");
        color.orb_list = Some("lists/azure.csv".into());
        assert_eq!(color.orb_list_file(), "lists/azure.csv");
    }

    #[test]
    fn duplicate_color_is_rejected() {
        let config = RollerConfig {
            colors: vec![ColorConfig::new("blue", 1.0), ColorConfig::new("blue", 2.0)],
        };
        assert!(config.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn negative_weight_is_rejected_but_zero_is_allowed() {
        let zero = RollerConfig {
            colors: vec![ColorConfig::new("blue", 0.0)],
        };
        assert!(zero.validate().is_ok());

        let negative = RollerConfig {
            colors: vec![ColorConfig::new("blue", -0.5)],
        };
        assert!(negative.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn parses_json_with_optional_orb_list() {
        let json = r#"{"colors": [
            {"name": "blue", "weight": 2},
            {"name": "red", "weight": 1, "orb_list": "crimson.csv"}
        ]}"#;
        let config: RollerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.colors[0].orb_list_file(), "blue_orbs.csv");
        assert_eq!(config.colors[1].orb_list_file(), "crimson.csv");
        assert_eq!(config.color("blue").map(|c| c.weight), Some(2.0));
    }
}

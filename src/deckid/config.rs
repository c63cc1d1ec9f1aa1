use crate::error::{DeckIdError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_LABEL_FIELD: &str = "Deck ID";
pub const DEFAULT_FRONT_FIELD: &str = "Front";

/// Configuration for deckid, stored next to the data as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckIdConfig {
    /// Name of the record field holding the `<group>@<index>` label
    #[serde(default = "default_label_field")]
    pub label_field: String,

    /// Name of the field shown next to the label in lists
    #[serde(default = "default_front_field")]
    pub front_field: String,

    /// Run a reconciliation pass whenever a session starts
    #[serde(default = "default_reconcile_on_start")]
    pub reconcile_on_start: bool,
}

fn default_label_field() -> String {
    DEFAULT_LABEL_FIELD.to_string()
}

fn default_front_field() -> String {
    DEFAULT_FRONT_FIELD.to_string()
}

fn default_reconcile_on_start() -> bool {
    true
}

impl Default for DeckIdConfig {
    fn default() -> Self {
        Self {
            label_field: default_label_field(),
            front_field: default_front_field(),
            reconcile_on_start: default_reconcile_on_start(),
        }
    }
}

impl DeckIdConfig {
    pub const KEYS: [&'static str; 3] = ["label-field", "front-field", "reconcile-on-start"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DeckIdError::Io)?;
        let config: DeckIdConfig =
            serde_json::from_str(&content).map_err(DeckIdError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DeckIdError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DeckIdError::Serialization)?;
        fs::write(config_path, content).map_err(DeckIdError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "label-field" => Some(self.label_field.clone()),
            "front-field" => Some(self.front_field.clone()),
            "reconcile-on-start" => Some(self.reconcile_on_start.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "label-field" | "front-field" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(format!("{} cannot be empty", key));
                }
                if key == "label-field" {
                    self.label_field = value.to_string();
                } else {
                    self.front_field = value.to_string();
                }
                Ok(())
            }
            "reconcile-on-start" => {
                self.reconcile_on_start = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    other => return Err(format!("Expected true or false, got '{}'", other)),
                };
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeckIdConfig::default();
        assert_eq!(config.label_field, "Deck ID");
        assert_eq!(config.front_field, "Front");
        assert!(config.reconcile_on_start);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = DeckIdConfig::default();
        config.set("label-field", "Order").unwrap();
        config.set("reconcile-on-start", "off").unwrap();
        assert_eq!(config.get("label-field").as_deref(), Some("Order"));
        assert_eq!(config.get("reconcile-on-start").as_deref(), Some("false"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = DeckIdConfig::default();
        assert!(config.set("label-field", "  ").is_err());
        assert!(config.set("reconcile-on-start", "maybe").is_err());
        assert!(config.set("color", "red").is_err());
        assert_eq!(config, DeckIdConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = DeckIdConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, DeckIdConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = DeckIdConfig::default();
        config.set("front-field", "Question").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = DeckIdConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.front_field, "Question");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let parsed: DeckIdConfig = serde_json::from_str(r#"{"label_field": "Order"}"#).unwrap();
        assert_eq!(parsed.label_field, "Order");
        assert_eq!(parsed.front_field, "Front");
        assert!(parsed.reconcile_on_start);
    }
}

use crate::error::{NotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_PREFIX: &str = "notes";

/// Configuration for the board, stored next to the board slot in
/// `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Filename prefix for exported documents (e.g. "notes" gives
    /// `notes_2026-08-23.txt`)
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
}

fn default_export_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            export_prefix: default_export_prefix(),
        }
    }
}

impl BoardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotzError::Io)?;
        let config: BoardConfig =
            serde_json::from_str(&content).map_err(NotzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotzError::Serialization)?;
        fs::write(config_path, content).map_err(NotzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "export-prefix" => Some(self.export_prefix.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "export-prefix" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("export-prefix cannot be empty".to_string());
                }
                self.export_prefix = value.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.export_prefix, "notes");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = BoardConfig::load(dir.path()).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = BoardConfig::default();
        config.set("export-prefix", "board").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BoardConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.export_prefix, "board");
    }

    #[test]
    fn test_set_rejects_unknown_key_and_empty_value() {
        let mut config = BoardConfig::default();
        assert!(config.set("no-such-key", "x").is_err());
        assert!(config.set("export-prefix", "   ").is_err());
        assert_eq!(config.export_prefix, "notes");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = BoardConfig {
            export_prefix: "scribbles".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}

//! Configuration for a run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FictionError, FictionResult};

/// Configuration for a run, loadable from JSON. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for corruption rolls and question draws.
    pub seed: u64,
    /// The player character's name.
    pub captain_name: String,
    /// Carry limit.
    pub max_weight: u32,
    /// Print the verb list after every turn.
    pub show_help_line: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            captain_name: "Orion Vale".to_string(),
            max_weight: 20,
            show_help_line: true,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> FictionResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| FictionError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| FictionError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the captain's name. Blank names are ignored.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.captain_name = name.trim().to_string();
        }
        self
    }

    /// Set the carry limit.
    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Toggle the per-turn verb list.
    pub fn with_help_line(mut self, show: bool) -> Self {
        self.show_help_line = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.captain_name, "Orion Vale");
        assert_eq!(cfg.max_weight, 20);
        assert!(cfg.show_help_line);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_name("  Nova Reyes ")
            .with_max_weight(30)
            .with_help_line(false);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.captain_name, "Nova Reyes");
        assert_eq!(cfg.max_weight, 30);
        assert!(!cfg.show_help_line);
    }

    #[test]
    fn blank_name_keeps_default() {
        let cfg = GameConfig::default().with_name("   ");
        assert_eq!(cfg.captain_name, "Orion Vale");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("voidgate.json");
        std::fs::write(&path, r#"{ "seed": 9, "captain_name": "Ada" }"#).unwrap();
        let cfg = GameConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.captain_name, "Ada");
        assert_eq!(cfg.max_weight, 20);
    }

    #[test]
    fn missing_and_malformed_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            GameConfig::from_json_file(&missing),
            Err(FictionError::ConfigRead { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ seed: ").unwrap();
        assert!(matches!(
            GameConfig::from_json_file(&bad),
            Err(FictionError::ConfigParse { .. })
        ));
    }
}

//! Application configuration.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file) is a valid configuration.
//!
//! ```toml
//! [generator]
//! max_attempts = 1000
//! mode = "partners-and-opponents"   # or "partners"
//! rounds = 3
//!
//! [store]
//! dir = ".padel-matcher"
//! key = "padelMatches"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MatcherError, Result};
use crate::scheduler::GeneratorConfig;
use crate::store::DEFAULT_SNAPSHOT_KEY;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub generator: GeneratorConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding snapshot files.
    pub dir: PathBuf,
    /// Key the last schedule is stored under.
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".padel-matcher"),
            key: DEFAULT_SNAPSHOT_KEY.to_string(),
        }
    }
}

impl MatcherConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.generator.max_attempts == 0 {
            return Err(MatcherError::ConfigError {
                message: "generator.max_attempts must be at least 1".to_string(),
            });
        }
        let max_rounds = self.generator.mode.max_rounds();
        if !(1..=max_rounds).contains(&self.generator.rounds) {
            return Err(MatcherError::ConfigError {
                message: format!(
                    "generator.rounds must be between 1 and {max_rounds} in {:?} mode",
                    self.generator.mode
                ),
            });
        }
        let key = &self.store.key;
        if key.trim().is_empty() {
            return Err(MatcherError::ConfigError {
                message: "store.key cannot be empty".to_string(),
            });
        }
        if key.contains(['/', '\\']) || key.contains("..") {
            return Err(MatcherError::ConfigError {
                message: format!("store.key '{key}' must be a plain file name"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ConstraintMode;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MatcherConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatcherConfig::default());
        assert_eq!(config.generator.max_attempts, 1000);
        assert_eq!(config.store.key, "padelMatches");
    }

    #[test]
    fn test_partial_config() {
        let config = MatcherConfig::from_toml_str(
            r#"
            [generator]
            mode = "partners"
            max_attempts = 50

            [store]
            dir = "/tmp/padel"
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.mode, ConstraintMode::Partners);
        assert_eq!(config.generator.max_attempts, 50);
        assert_eq!(config.generator.rounds, 3);
        assert_eq!(config.store.dir, PathBuf::from("/tmp/padel"));
        assert_eq!(config.store.key, "padelMatches");
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let err = MatcherConfig::from_toml_str("[generator]\nmax_attempts = 0\n").unwrap_err();
        assert!(matches!(err, MatcherError::ConfigError { .. }));
    }

    #[test]
    fn test_rejects_round_count_out_of_range() {
        assert!(MatcherConfig::from_toml_str("[generator]\nrounds = 0\n").is_err());
        assert!(MatcherConfig::from_toml_str("[generator]\nrounds = 5\n").is_ok());

        let partners = "[generator]\nmode = \"partners\"\n";
        assert!(MatcherConfig::from_toml_str(&format!("{partners}rounds = 11\n")).is_ok());
        assert!(MatcherConfig::from_toml_str(&format!("{partners}rounds = 12\n")).is_err());
    }

    #[test]
    fn test_rejects_unreachable_rounds_in_refined_mode() {
        // Six rounds would need twelve distinct opponents per player.
        let err = MatcherConfig::from_toml_str("[generator]\nrounds = 6\n").unwrap_err();
        assert!(matches!(err, MatcherError::ConfigError { .. }));
        assert!(err.to_string().contains("between 1 and 5"));
    }

    #[test]
    fn test_mode_override_rechecks_rounds() {
        let mut config =
            MatcherConfig::from_toml_str("[generator]\nmode = \"partners\"\nrounds = 8\n").unwrap();
        config.generator.mode = ConstraintMode::PartnersAndOpponents;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_key_escaping_store_dir() {
        for key in ["../outside", "nested/last", "back\\slash", ".."] {
            let toml = format!("[store]\nkey = {key:?}\n");
            let err = MatcherConfig::from_toml_str(&toml).unwrap_err();
            assert!(
                matches!(err, MatcherError::ConfigError { .. }),
                "key {key:?} accepted"
            );
        }
        assert!(MatcherConfig::from_toml_str("[store]\nkey = \"club.v2\"\n").is_ok());
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let err = MatcherConfig::from_toml_str("[generator]\nmode = \"skill\"\n").unwrap_err();
        assert!(matches!(err, MatcherError::ConfigParseError(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padel.toml");
        std::fs::write(&path, "[store]\nkey = \"club\"\n").unwrap();
        let config = MatcherConfig::from_file(&path).unwrap();
        assert_eq!(config.store.key, "club");

        let missing = MatcherConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, MatcherError::IoError(_)));
    }
}

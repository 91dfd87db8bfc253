//! Main application configuration
//!
//! Settings come from a TOML file or environment variables, falling back to
//! defaults for anything not given. Command line flags override both.

use crate::config::RatingConfig;
use crate::ranking::DEFAULT_EXPORT_FILE;
use crate::rating::DEFAULT_DATA_FILE;
use crate::roster::{Roster, DEFAULT_ROSTER};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub storage: StorageSettings,
    pub rating: RatingConfig,
    pub roster: RosterSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name shown in the banner and logs
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where ratings and exports are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// JSON file holding the name -> rating mapping
    pub data_file: PathBuf,
    /// Default destination of the CSV export
    pub export_file: PathBuf,
}

/// Who is being ranked and how pairs are ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// Player names, in the order pairs are generated before shuffling
    pub players: Vec<String>,
    /// Fixed seed for the pair shuffle; random when unset
    pub shuffle_seed: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "qb-ranker".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            players: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            shuffle_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Storage settings
        if let Ok(data_file) = env::var("RANKER_DATA_FILE") {
            config.storage.data_file = PathBuf::from(data_file);
        }
        if let Ok(export_file) = env::var("RANKER_EXPORT_FILE") {
            config.storage.export_file = PathBuf::from(export_file);
        }

        // Rating settings
        if let Ok(k_factor) = env::var("RANKER_K_FACTOR") {
            config.rating.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid RANKER_K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(default_rating) = env::var("RANKER_DEFAULT_RATING") {
            config.rating.default_rating = default_rating.parse().map_err(|_| {
                anyhow!("Invalid RANKER_DEFAULT_RATING value: {}", default_rating)
            })?;
        }

        // Roster settings
        if let Ok(roster) = env::var("RANKER_ROSTER") {
            config.roster.players = parse_roster_list(&roster);
        }
        if let Ok(seed) = env::var("RANKER_SHUFFLE_SEED") {
            config.roster.shuffle_seed = Some(
                seed.parse()
                    .map_err(|_| anyhow!("Invalid RANKER_SHUFFLE_SEED value: {}", seed))?,
            );
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Build the validated roster
    pub fn roster(&self) -> Result<Roster> {
        Roster::new(self.roster.players.iter().cloned())
    }
}

/// Split a comma separated list of names, dropping empty entries
pub fn parse_roster_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate storage paths
    if config.storage.data_file.as_os_str().is_empty() {
        return Err(anyhow!("Data file path cannot be empty"));
    }
    if config.storage.export_file.as_os_str().is_empty() {
        return Err(anyhow!("Export file path cannot be empty"));
    }

    config.rating.validate()?;
    config.roster()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.roster.players.len(), 32);
        assert_eq!(config.storage.data_file, PathBuf::from("nfl_qb_rankings.json"));
        assert_eq!(config.storage.export_file, PathBuf::from("qb_rankings.csv"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_duplicate_roster_rejected() {
        let mut config = AppConfig::default();
        config.roster.players = vec!["A".to_string(), "A".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_roster_list() {
        assert_eq!(
            parse_roster_list(" Bo Nix, Cam Ward ,,Geno Smith"),
            vec!["Bo Nix", "Cam Ward", "Geno Smith"]
        );
    }

    #[test]
    fn test_from_file_partial() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ranker.toml");
        std::fs::write(
            &path,
            r#"
[rating]
k_factor = 24.0

[roster]
players = ["A", "B", "C"]
shuffle_seed = 9
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.rating.k_factor, 24.0);
        assert_eq!(config.rating.default_rating, 1500.0);
        assert_eq!(config.roster.players, vec!["A", "B", "C"]);
        assert_eq!(config.roster.shuffle_seed, Some(9));
        assert_eq!(config.service.log_level, "warn");
    }

    #[test]
    fn test_from_file_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ranker.toml");
        std::fs::write(&path, "[rating]\nk_factor = -1.0\n").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::from_file(&temp.path().join("absent.toml")).is_err());
    }
}

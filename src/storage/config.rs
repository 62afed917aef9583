//! Configuration handling for the cafe record-keeper
//!
//! Configuration is stored in `cafe.toml` inside the data directory. Every
//! field has a default, so a partial (or absent) file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::table::MissingTable;

/// Name of the configuration file inside the data directory
pub const CONFIG_FILE: &str = "cafe.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// The single account allowed into the interactive shell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "test".to_string(),
        }
    }
}

impl Credentials {
    /// Username ignores case; password must match exactly
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.knows_user(username) && password == self.password
    }

    /// Returns true if `username` names the configured account
    pub fn knows_user(&self, username: &str) -> bool {
        username.trim().to_lowercase() == self.username.to_lowercase()
    }
}

/// Settings for one data directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Product table, relative to the data directory
    pub products_file: PathBuf,

    /// Supplier table, relative to the data directory
    pub suppliers_file: PathBuf,

    /// How to treat a table file that does not exist
    pub missing_table: MissingTable,

    /// Default threshold for low-stock reports
    pub low_stock_threshold: u32,

    /// Login attempts before the shell gives up
    pub max_login_attempts: u32,

    /// Symbol printed in front of prices
    pub currency: String,

    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_file: PathBuf::from("products.csv"),
            suppliers_file: PathBuf::from("suppliers.csv"),
            missing_table: MissingTable::Fail,
            low_stock_threshold: 10,
            max_login_attempts: 3,
            currency: "£".to_string(),
            credentials: Credentials::default(),
        }
    }
}

impl Config {
    /// Loads `cafe.toml` from a data directory, or defaults if it is absent
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        Self::parse(&content).context("Failed to parse config")
    }

    /// Parses and checks configuration text
    pub fn parse(content: &str) -> std::result::Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> std::result::Result<(), ConfigError> {
        if self.max_login_attempts == 0 {
            return Err(ConfigError::Invalid(
                "max_login_attempts must be at least 1".to_string(),
            ));
        }
        if self.credentials.username.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "credentials.username must not be empty".to_string(),
            ));
        }
        if self.products_file == self.suppliers_file {
            return Err(ConfigError::Invalid(
                "products_file and suppliers_file must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the product table path against the data directory
    pub fn products_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.products_file)
    }

    /// Resolves the supplier table path against the data directory
    pub fn suppliers_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.suppliers_file)
    }

    /// Formats a price with the configured currency symbol
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.max_login_attempts, 3);
        assert_eq!(config.missing_table, MissingTable::Fail);
        assert_eq!(config.credentials.username, "admin");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
low_stock_threshold = 20
missing_table = "empty"

[credentials]
password = "espresso"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.low_stock_threshold, 20);
        assert_eq!(config.missing_table, MissingTable::Empty);
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.credentials.password, "espresso");
        assert_eq!(config.products_file, PathBuf::from("products.csv"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Config::parse("low_stock_threshold = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_zero_login_attempts() {
        assert!(matches!(
            Config::parse("max_login_attempts = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn parse_rejects_shared_table_file() {
        let toml = r#"
products_file = "data.csv"
suppliers_file = "data.csv"
"#;
        assert!(matches!(Config::parse(toml), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.currency, "£");
    }

    #[test]
    fn table_paths_resolve_against_data_dir() {
        let config = Config::default();
        let dir = Path::new("/srv/cafe");

        assert_eq!(config.products_path(dir), PathBuf::from("/srv/cafe/products.csv"));
        assert_eq!(config.suppliers_path(dir), PathBuf::from("/srv/cafe/suppliers.csv"));
    }

    #[test]
    fn credentials_ignore_username_case_only() {
        let creds = Credentials::default();

        assert!(creds.matches("admin", "test"));
        assert!(creds.matches("ADMIN", "test"));
        assert!(!creds.matches("admin", "TEST"));
        assert!(!creds.matches("root", "test"));
    }

    #[test]
    fn money_uses_two_decimals() {
        let config = Config::default();
        assert_eq!(config.money(2.5), "£2.50");
    }
}

use super::types::Config;
use crate::debug_println;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound accepted for any single rate, in USD per unit
const MAX_RATE: Decimal = dec!(1000000);

/// Error types for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    FileAccess(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileAccess(e) => write!(f, "Failed to access configuration file: {}", e),
            ConfigError::Parse(e) => write!(f, "Configuration file is malformed: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize configuration: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::FileAccess(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigError::Serialize(error)
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the config, falling back to defaults when it cannot be
    /// read or fails `Config::check`
    pub fn load(path: Option<&Path>) -> Config {
        let result = match path {
            Some(path) => Self::load_from_path(path),
            None => Config::load(),
        }
        .and_then(|config| config.check().map(|()| config));

        result.unwrap_or_else(|e| {
            eprintln!("Warning: {}", e);
            eprintln!("Using default rates and values");
            Config::default()
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug_println!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, ConfigError> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            debug_println!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Config::default());
        }

        ConfigLoader::load_from_path(config_path)
    }

    /// Save configuration to the given location
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::get_config_path())
    }

    /// Get the default config file path (~/.config/cpaas-pricing/config.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("cpaas-pricing").join("config.toml")
        } else {
            PathBuf::from(".cpaas-pricing/config.toml")
        }
    }

    /// Create the default config file if it doesn't exist
    pub fn init() -> Result<(), ConfigError> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            Config::default().save_to(&config_path)?;
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), ConfigError> {
        let negative = self.rates.negative_rates();
        if !negative.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "Negative rates: {}",
                negative.join(", ")
            )));
        }

        for (label, rate, _) in self.rates.entries() {
            if rate > MAX_RATE {
                return Err(ConfigError::Invalid(format!(
                    "Rate for {} exceeds {}",
                    label, MAX_RATE
                )));
            }
        }

        if self.export.strategies.is_empty() {
            return Err(ConfigError::Invalid(
                "No export strategies configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for strategy in &self.export.strategies {
            if !seen.insert(*strategy) {
                return Err(ConfigError::Invalid(format!(
                    "Duplicate export strategy: {}",
                    strategy.as_str()
                )));
            }
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings held by the provider instance. `timeout_ms` and `max_retries`
/// are accepted and stored but not consumed by any operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

const fn default_timeout_ms() -> u64 {
    30_000
}
const fn default_max_retries() -> u32 {
    3
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file at the specified path
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The file cannot be read
    /// - The TOML content cannot be parsed into the Config structure
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load configuration from environment variables on top of defaults
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Environment variables contain invalid values
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `RPCPROVIDER_*` environment variable overrides to this
    /// configuration
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Environment variables contain invalid values
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(verbose) = env::var("RPCPROVIDER_VERBOSE") {
            self.provider.verbose = verbose.parse()?;
        }

        if let Ok(timeout) = env::var("RPCPROVIDER_TIMEOUT_MS") {
            self.provider.timeout_ms = timeout.parse()?;
        }

        if let Ok(retries) = env::var("RPCPROVIDER_MAX_RETRIES") {
            self.provider.max_retries = retries.parse()?;
        }

        if let Ok(level) = env::var("RPCPROVIDER_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(format) = env::var("RPCPROVIDER_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Load configuration from default locations and environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Environment variables contain invalid values
    pub fn load() -> Result<Self> {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        let config_paths = [
            PathBuf::from("rpcprovider.toml"),
            home_dir.join(".config/rpcprovider/config.toml"),
            PathBuf::from("/etc/rpcprovider/config.toml"),
        ];

        // Find the first readable configuration file; a malformed file at a
        // default location is reported and skipped.
        let mut config = None;
        for path in &config_paths {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(file_config) => {
                        config = Some(file_config);
                        break;
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Error loading config from {}: {}",
                            path.display(),
                            e
                        );
                    }
                }
            }
        }

        let mut config = config.unwrap_or_default();

        // Environment values take precedence over file values
        config.apply_env()?;

        Ok(config)
    }

    /// Merge another configuration into this one, with the other
    /// configuration taking precedence where it differs from the defaults
    pub fn merge(&mut self, other: Self) {
        if other.provider.verbose {
            self.provider.verbose = true;
        }
        if other.provider.timeout_ms != default_timeout_ms() {
            self.provider.timeout_ms = other.provider.timeout_ms;
        }
        if other.provider.max_retries != default_max_retries() {
            self.provider.max_retries = other.provider.max_retries;
        }

        if other.logging.level != default_log_level() {
            self.logging.level = other.logging.level;
        }
        if other.logging.format != default_log_format() {
            self.logging.format = other.logging.format;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Field values are invalid
    pub fn validate(&self) -> Result<()> {
        if self.provider.timeout_ms == 0 {
            return Err(anyhow!("timeout_ms must be greater than 0"));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(anyhow!(
                "log format must be either \"text\" or \"json\", got {:?}",
                self.logging.format
            ));
        }

        Ok(())
    }
}

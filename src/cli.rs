use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, LoggingConfig, ProviderSettings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Set log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Set log format
    #[arg(long, default_value = "text")]
    pub log_format: String,
}

impl Cli {
    /// Configuration overrides taken from the command line flags
    #[must_use]
    pub fn overrides(&self) -> Config {
        Config {
            provider: ProviderSettings {
                verbose: self.verbose,
                ..ProviderSettings::default()
            },
            logging: LoggingConfig {
                level: self.log_level.clone(),
                format: self.log_format.clone(),
            },
        }
    }
}

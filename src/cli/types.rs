//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{check::CheckArgs, export::ExportArgs, show::ShowArgs};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "devnet-config")]
#[command(about = "Load and validate forked development network configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Extra YAML configuration merged above .devnet/config.yaml and .devnet/local.yaml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dotenv file to read instead of ./.env
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "DEVNET_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log line format
    #[arg(long, global = true, env = "DEVNET_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Loader configured from the global flags
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_file(path);
        }
        if let Some(path) = &self.env_file {
            loader = loader.with_env_file(path);
        }
        loader
    }

    /// Logging settings from the global flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the configuration and report whether it is valid
    Check(CheckArgs),

    /// Print the resolved configuration with secrets redacted
    Show(ShowArgs),

    /// Print the configuration in the layout the development tool reads
    Export(ExportArgs),
}

//! Implementation of the `devnet-config check` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::DevnetConfig;
use crate::infrastructure::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct CheckArgs {}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub message: String,
    pub default_network: String,
    pub networks: Vec<String>,
    pub compiler_version: String,
}

impl CheckOutput {
    pub fn from_config(config: &DevnetConfig) -> Self {
        Self {
            success: true,
            message: "Configuration is valid".to_string(),
            default_network: config.default_network.clone(),
            networks: config.networks.keys().cloned().collect(),
            compiler_version: config.solidity.version.clone(),
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        format!(
            "{} (default network: {}, networks: {}, solc {})",
            self.message,
            self.default_network,
            self.networks.join(", "),
            self.compiler_version
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(_args: CheckArgs, loader: &ConfigLoader, json_mode: bool) -> Result<()> {
    let config = loader
        .load_global()
        .context("Failed to load configuration")?;

    output(&CheckOutput::from_config(config), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output_human() {
        let out = CheckOutput::from_config(&DevnetConfig::default());
        assert_eq!(
            out.to_human(),
            "Configuration is valid (default network: hardhat, networks: hardhat, solc 0.8.7)"
        );
    }

    #[test]
    fn test_check_output_json() {
        let json = CheckOutput::from_config(&DevnetConfig::default()).to_json();
        assert_eq!(json["success"], true);
        assert_eq!(json["networks"][0], "hardhat");
        assert_eq!(json["compiler_version"], "0.8.7");
    }
}

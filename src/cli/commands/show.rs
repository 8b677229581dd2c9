//! Implementation of the `devnet-config show` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::DevnetConfig;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::SecretScrubber;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print the fork URL and mnemonic unredacted
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct ShowOutput {
    pub config: DevnetConfig,
}

impl ShowOutput {
    /// Wrap `config`, masking secrets unless `reveal` is set
    pub fn new(config: &DevnetConfig, reveal: bool) -> Self {
        let mut config = config.clone();
        if !reveal {
            let scrubber = SecretScrubber::new();
            for network in config.networks.values_mut() {
                network.fork_url = scrubber.redact_url(&network.fork_url);
                network.account_mnemonic = scrubber.redact_mnemonic(&network.account_mnemonic);
            }
        }
        Self { config }
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let config = &self.config;
        let mut lines = vec![format!("default network: {}", config.default_network)];

        for (name, network) in &config.networks {
            lines.push(format!("\nnetwork {name}:"));
            lines.push(format!("  chain id:        {}", network.chain_id));
            lines.push(format!("  fork url:        {}", network.fork_url));
            lines.push(format!("  fork block:      {}", network.fork_block_number));
            lines.push(format!("  auto mining:     {}", network.auto_mining));
            lines.push(format!("  gas price:       {}", network.gas_price));
            lines.push(format!("  base fee:        {}", network.base_fee));
            lines.push(format!("  mnemonic:        {}", network.account_mnemonic));
        }

        lines.push("\nsolidity:".to_string());
        lines.push(format!("  version:         {}", config.solidity.version));
        lines.push(format!("  optimizer:       {}", config.solidity.optimizer_enabled));
        lines.push(format!("  optimizer runs:  {}", config.solidity.optimizer_runs));

        lines.push("\nmocha:".to_string());
        lines.push(format!("  timeout (ms):    {}", config.mocha.timeout_millis));

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

pub fn execute(args: ShowArgs, loader: &ConfigLoader, json_mode: bool) -> Result<()> {
    let config = loader
        .load_global()
        .context("Failed to load configuration")?;

    output(&ShowOutput::new(config, args.reveal), json_mode);
    Ok(())
}

//! Implementation of the `devnet-config export` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::{to_tool_json, ConfigLoader};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Select this network as the default before exporting
    #[arg(long, short)]
    pub network: Option<String>,
}

/// Tool-layout document. It is JSON in both output modes.
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct ExportOutput {
    pub document: serde_json::Value,
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        serde_json::to_string_pretty(&self.document).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        self.document.clone()
    }
}

pub fn execute(args: ExportArgs, loader: &ConfigLoader, json_mode: bool) -> Result<()> {
    let config = loader
        .load_global()
        .context("Failed to load configuration")?;

    let mut document = to_tool_json(config);
    if let Some(network) = args.network {
        if !config.networks.contains_key(&network) {
            anyhow::bail!("Unknown network '{network}'");
        }
        document["defaultNetwork"] = serde_json::Value::String(network);
    }

    output(&ExportOutput { document }, json_mode);
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the network the built-in defaults describe.
pub const DEFAULT_NETWORK: &str = "hardhat";

/// Publicly known twelve-word phrase used by the built-in defaults.
///
/// Accounts derived from it are not secret.
pub const TEST_MNEMONIC: &str = "swap swap swap swap swap swap swap swap swap swap swap swap";

/// Complete development environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DevnetConfig {
    /// Key into `networks` selected when the tool is run without a network flag
    #[serde(default = "default_network")]
    pub default_network: String,

    /// Network definitions by name
    #[serde(default = "default_networks")]
    pub networks: BTreeMap<String, NetworkConfig>,

    /// Solidity compiler settings
    #[serde(default)]
    pub solidity: CompilerConfig,

    /// Test runner settings
    #[serde(default)]
    pub mocha: TestRunnerConfig,
}

fn default_network() -> String {
    DEFAULT_NETWORK.to_string()
}

fn default_networks() -> BTreeMap<String, NetworkConfig> {
    BTreeMap::from([(DEFAULT_NETWORK.to_string(), NetworkConfig::default())])
}

impl Default for DevnetConfig {
    fn default() -> Self {
        Self {
            default_network: default_network(),
            networks: default_networks(),
            solidity: CompilerConfig::default(),
            mocha: TestRunnerConfig::default(),
        }
    }
}

impl DevnetConfig {
    /// The network selected by `default_network`, if present.
    pub fn active_network(&self) -> Option<&NetworkConfig> {
        self.networks.get(&self.default_network)
    }
}

/// Forked simulation network configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NetworkConfig {
    /// Chain id reported by the simulated network
    #[serde(default = "default_chain_id")]
    pub chain_id: i64,

    /// Upstream node endpoint to fork from. Empty until resolved from the environment.
    #[serde(default)]
    pub fork_url: String,

    /// Block the fork is pinned to
    #[serde(default = "default_fork_block_number")]
    pub fork_block_number: i64,

    /// Mine a block for every transaction
    #[serde(default = "default_true")]
    pub auto_mining: bool,

    /// Gas price in wei. Zero disables fee simulation.
    #[serde(default)]
    pub gas_price: i64,

    /// Initial base fee per gas in wei. Zero disables fee simulation.
    #[serde(default)]
    pub base_fee: i64,

    /// Phrase the local accounts are derived from
    #[serde(default = "default_mnemonic")]
    pub account_mnemonic: String,
}

const fn default_chain_id() -> i64 {
    1
}

const fn default_fork_block_number() -> i64 {
    12_489_619
}

const fn default_true() -> bool {
    true
}

fn default_mnemonic() -> String {
    TEST_MNEMONIC.to_string()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            fork_url: String::new(),
            fork_block_number: default_fork_block_number(),
            auto_mining: true,
            gas_price: 0,
            base_fee: 0,
            account_mnemonic: default_mnemonic(),
        }
    }
}

impl NetworkConfig {
    /// Whether the accounts come from the built-in test phrase
    pub fn uses_test_mnemonic(&self) -> bool {
        self.account_mnemonic.split_whitespace().eq(TEST_MNEMONIC.split_whitespace())
    }
}

/// Solidity compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompilerConfig {
    /// Compiler release, `MAJOR.MINOR.PATCH`
    #[serde(default = "default_compiler_version")]
    pub version: String,

    /// Run the optimizer
    #[serde(default = "default_true")]
    pub optimizer_enabled: bool,

    /// Expected number of contract executions the optimizer tunes for
    #[serde(default = "default_optimizer_runs")]
    pub optimizer_runs: i64,
}

fn default_compiler_version() -> String {
    "0.8.7".to_string()
}

const fn default_optimizer_runs() -> i64 {
    200
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            version: default_compiler_version(),
            optimizer_enabled: true,
            optimizer_runs: default_optimizer_runs(),
        }
    }
}

/// Test runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TestRunnerConfig {
    /// Per-test timeout in milliseconds
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: i64,
}

const fn default_timeout_millis() -> i64 {
    600_000
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        Self {
            timeout_millis: default_timeout_millis(),
        }
    }
}

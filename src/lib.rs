//! devnet-config - configuration for forked development networks
//!
//! Builds the settings an external smart-contract development tool runs with:
//! a mainnet fork pinned to a block, compiler and optimizer settings, the
//! account mnemonic and the test-runner timeout. Values come from built-in
//! defaults, optional YAML files and the environment; the node-provider URL
//! is read from `ALCHE_API` and is required.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Configuration records and the error taxonomy
//! - **Infrastructure Layer** (`infrastructure`): Layered loading, validation, export and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use devnet_config::ConfigLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::new().load_global()?;
//!     println!("forking at block {}", config.networks["hardhat"].fork_block_number);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::ConfigError;
pub use domain::models::{
    CompilerConfig, DevnetConfig, NetworkConfig, TestRunnerConfig, DEFAULT_NETWORK, TEST_MNEMONIC,
};
pub use infrastructure::config::{to_tool_json, ConfigLoader, ENV_PREFIX, FORK_URL_VAR};

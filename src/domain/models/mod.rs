pub mod config;

pub use config::{
    CompilerConfig, DevnetConfig, NetworkConfig, TestRunnerConfig, DEFAULT_NETWORK, TEST_MNEMONIC,
};

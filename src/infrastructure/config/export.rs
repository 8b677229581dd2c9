//! Rendering of a validated configuration in the development tool's own layout

use serde_json::{json, Map, Value};

use crate::domain::models::config::{DevnetConfig, NetworkConfig};

/// Render `config` as the object the development tool reads
///
/// Field names follow the tool (`forking.blockNumber`, `initialBaseFeePerGas`,
/// `mocha.timeout`) rather than this crate's snake_case records. Secrets are
/// emitted verbatim; callers decide where the output goes.
pub fn to_tool_json(config: &DevnetConfig) -> Value {
    let networks: Map<String, Value> = config
        .networks
        .iter()
        .map(|(name, network)| (name.clone(), network_json(network)))
        .collect();

    json!({
        "defaultNetwork": config.default_network,
        "networks": networks,
        "solidity": {
            "version": config.solidity.version,
            "settings": {
                "optimizer": {
                    "enabled": config.solidity.optimizer_enabled,
                    "runs": config.solidity.optimizer_runs,
                }
            }
        },
        "mocha": {
            "timeout": config.mocha.timeout_millis,
        }
    })
}

fn network_json(network: &NetworkConfig) -> Value {
    json!({
        "chainId": network.chain_id,
        "forking": {
            "url": network.fork_url,
            "blockNumber": network.fork_block_number,
        },
        "mining": {
            "auto": network.auto_mining,
        },
        "gasPrice": network.gas_price,
        "initialBaseFeePerGas": network.base_fee,
        "accounts": {
            "mnemonic": network.account_mnemonic,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::TEST_MNEMONIC;

    #[test]
    fn test_export_matches_tool_layout() {
        let mut config = DevnetConfig::default();
        config.networks.get_mut("hardhat").unwrap().fork_url = "https://example.test/v1".to_string();

        let expected = json!({
            "defaultNetwork": "hardhat",
            "networks": {
                "hardhat": {
                    "chainId": 1,
                    "forking": {
                        "url": "https://example.test/v1",
                        "blockNumber": 12_489_619
                    },
                    "mining": { "auto": true },
                    "gasPrice": 0,
                    "initialBaseFeePerGas": 0,
                    "accounts": { "mnemonic": TEST_MNEMONIC }
                }
            },
            "solidity": {
                "version": "0.8.7",
                "settings": { "optimizer": { "enabled": true, "runs": 200 } }
            },
            "mocha": { "timeout": 600_000 }
        });

        assert_eq!(to_tool_json(&config), expected);
    }

    #[test]
    fn test_export_includes_every_network() {
        let mut config = DevnetConfig::default();
        config.networks.insert(
            "local".to_string(),
            NetworkConfig {
                chain_id: 31337,
                auto_mining: false,
                ..Default::default()
            },
        );

        let exported = to_tool_json(&config);
        assert_eq!(exported["networks"]["local"]["chainId"], 31337);
        assert_eq!(exported["networks"]["local"]["mining"]["auto"], false);
        assert_eq!(exported["networks"]["hardhat"]["chainId"], 1);
    }
}

//! Field rules applied after the configuration sources are merged

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::domain::error::ConfigError;
use crate::domain::models::config::{CompilerConfig, DevnetConfig, NetworkConfig, TestRunnerConfig};
use crate::infrastructure::logging::SecretScrubber;

/// Number of words a mnemonic must contain
pub const MNEMONIC_WORDS: usize = 12;

const FORK_URL_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$").expect("version pattern is valid")
    })
}

/// Validate the whole configuration, stopping at the first violation
pub fn validate(config: &DevnetConfig) -> Result<(), ConfigError> {
    if config.networks.is_empty() {
        return Err(ConfigError::invalid(
            "networks",
            "{}",
            "at least one network must be defined",
        ));
    }

    if !config.networks.contains_key(&config.default_network) {
        return Err(ConfigError::invalid(
            "default_network",
            &config.default_network,
            "must name a network defined under networks",
        ));
    }

    for (name, network) in &config.networks {
        validate_network(name, network)?;
    }

    validate_compiler(&config.solidity)?;
    validate_test_runner(&config.mocha)?;

    Ok(())
}

/// Validate one network entry; `name` prefixes the reported field paths
pub fn validate_network(name: &str, network: &NetworkConfig) -> Result<(), ConfigError> {
    let field = |key: &str| format!("networks.{name}.{key}");

    require_positive(&field("chain_id"), network.chain_id)?;
    validate_fork_url(&field("fork_url"), &network.fork_url)?;
    require_positive(&field("fork_block_number"), network.fork_block_number)?;
    require_non_negative(&field("gas_price"), network.gas_price)?;
    require_non_negative(&field("base_fee"), network.base_fee)?;
    validate_mnemonic(&field("account_mnemonic"), &network.account_mnemonic)?;

    Ok(())
}

/// Validate compiler settings
pub fn validate_compiler(compiler: &CompilerConfig) -> Result<(), ConfigError> {
    if !version_pattern().is_match(&compiler.version) {
        return Err(ConfigError::invalid(
            "solidity.version",
            &compiler.version,
            "must be a MAJOR.MINOR.PATCH version",
        ));
    }

    require_positive("solidity.optimizer_runs", compiler.optimizer_runs)
}

/// Validate test runner settings
pub fn validate_test_runner(runner: &TestRunnerConfig) -> Result<(), ConfigError> {
    require_positive("mocha.timeout_millis", runner.timeout_millis)
}

/// Check that a mnemonic has exactly twelve words.
///
/// This is a shape check only; the words are not checked against any wordlist.
pub fn validate_mnemonic(field: &str, mnemonic: &str) -> Result<(), ConfigError> {
    let words = mnemonic.split_whitespace().count();
    if words != MNEMONIC_WORDS {
        // Never echo the phrase itself.
        return Err(ConfigError::invalid(
            field,
            format!("<{words} words>"),
            format!("must contain exactly {MNEMONIC_WORDS} whitespace-separated words"),
        ));
    }
    Ok(())
}

/// Check that a fork URL is absolute, has a host and uses a node-provider scheme
///
/// Errors carry the redacted form of the URL, never the raw value.
pub fn validate_fork_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let shown = SecretScrubber::new().redact_url(raw);
    let url = Url::parse(raw.trim())
        .map_err(|err| ConfigError::invalid(field, &shown, format!("not a valid URL: {err}")))?;

    if !FORK_URL_SCHEMES.contains(&url.scheme()) {
        return Err(ConfigError::invalid(
            field,
            &shown,
            format!("scheme must be one of {}", FORK_URL_SCHEMES.join(", ")),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::invalid(field, &shown, "URL must have a host"));
    }

    Ok(url)
}

fn require_positive(field: &str, value: i64) -> Result<(), ConfigError> {
    if value <= 0 {
        return Err(ConfigError::invalid(
            field,
            value,
            "must be a positive integer",
        ));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> Result<(), ConfigError> {
    if value < 0 {
        return Err(ConfigError::invalid(field, value, "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> DevnetConfig {
        let mut config = DevnetConfig::default();
        for network in config.networks.values_mut() {
            network.fork_url = "https://eth-mainnet.example.test/v2/key".to_string();
        }
        config
    }

    fn assert_invalid_field(result: Result<(), ConfigError>, expected: &str) {
        match result {
            Err(ConfigError::InvalidConfiguration { field, .. }) => assert_eq!(field, expected),
            other => panic!("Expected InvalidConfiguration for {expected}, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_with_fork_url_is_valid() {
        validate(&valid_config()).expect("defaults plus a fork URL should be valid");
    }

    #[test]
    fn test_default_config_without_fork_url_is_invalid() {
        let result = validate(&DevnetConfig::default());
        assert_invalid_field(result, "networks.hardhat.fork_url");
    }

    #[test]
    fn test_zero_chain_id() {
        let mut config = valid_config();
        config.networks.get_mut("hardhat").unwrap().chain_id = 0;
        assert_invalid_field(validate(&config), "networks.hardhat.chain_id");
    }

    #[test]
    fn test_negative_fork_block_number() {
        let mut config = valid_config();
        config.networks.get_mut("hardhat").unwrap().fork_block_number = -1;

        match validate(&config) {
            Err(ConfigError::InvalidConfiguration { field, value, .. }) => {
                assert_eq!(field, "networks.hardhat.fork_block_number");
                assert_eq!(value, "-1");
            }
            other => panic!("Expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_optimizer_runs() {
        let mut config = valid_config();
        config.solidity.optimizer_runs = 0;
        assert_invalid_field(validate(&config), "solidity.optimizer_runs");
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = valid_config();
        config.mocha.timeout_millis = 0;
        assert_invalid_field(validate(&config), "mocha.timeout_millis");
    }

    #[test]
    fn test_zero_fees_are_accepted() {
        let mut config = valid_config();
        let network = config.networks.get_mut("hardhat").unwrap();
        network.gas_price = 0;
        network.base_fee = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_negative_fees_are_rejected() {
        let mut config = valid_config();
        config.networks.get_mut("hardhat").unwrap().gas_price = -1;
        assert_invalid_field(validate(&config), "networks.hardhat.gas_price");

        let mut config = valid_config();
        config.networks.get_mut("hardhat").unwrap().base_fee = -7;
        assert_invalid_field(validate(&config), "networks.hardhat.base_fee");
    }

    #[test]
    fn test_mnemonic_word_count() {
        assert!(validate_mnemonic("m", "one two three four five six seven eight nine ten eleven twelve").is_ok());
        assert!(validate_mnemonic("m", "one two three four five six seven eight nine ten eleven").is_err());
        assert!(validate_mnemonic(
            "m",
            "one two three four five six seven eight nine ten eleven twelve thirteen"
        )
        .is_err());
        assert!(validate_mnemonic("m", "").is_err());
    }

    #[test]
    fn test_mnemonic_error_does_not_echo_phrase() {
        let err = validate_mnemonic("m", "secret words only").unwrap_err();
        let message = err.to_string();
        assert!(!message.contains("secret"));
        assert!(message.contains("<3 words>"));
    }

    #[test]
    fn test_compiler_version_pattern() {
        for version in ["0.8.7", "0.8.26", "1.0.0"] {
            let compiler = CompilerConfig {
                version: version.to_string(),
                ..Default::default()
            };
            assert!(validate_compiler(&compiler).is_ok(), "{version} should be accepted");
        }

        for version in ["0.8", "v0.8.7", "0.8.7-nightly", "latest", "", "00.8.7"] {
            let compiler = CompilerConfig {
                version: version.to_string(),
                ..Default::default()
            };
            assert_invalid_field(validate_compiler(&compiler), "solidity.version");
        }
    }

    #[test]
    fn test_fork_url_rules() {
        assert!(validate_fork_url("f", "https://example.test/v1").is_ok());
        assert!(validate_fork_url("f", "wss://node.example.test/ws/abc").is_ok());
        assert!(validate_fork_url("f", "http://127.0.0.1:8545").is_ok());

        assert!(validate_fork_url("f", "").is_err());
        assert!(validate_fork_url("f", "not a url").is_err());
        assert!(validate_fork_url("f", "ftp://example.test/").is_err());
        assert!(validate_fork_url("f", "example.test/v1").is_err());
    }

    #[test]
    fn test_fork_url_error_hides_provider_key() {
        for raw in [
            "eth-mainnet.alchemyapi.io/v2/providerkey42",
            "ftp://eth-mainnet.alchemyapi.io/v2/providerkey42",
        ] {
            match validate_fork_url("networks.hardhat.fork_url", raw) {
                Err(err @ ConfigError::InvalidConfiguration { .. }) => {
                    assert!(!err.to_string().contains("providerkey42"), "{raw} leaked");
                }
                other => panic!("Expected InvalidConfiguration for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_default_network_must_exist() {
        let mut config = valid_config();
        config.default_network = "sepolia".to_string();
        assert_invalid_field(validate(&config), "default_network");
    }

    #[test]
    fn test_empty_networks() {
        let mut config = valid_config();
        config.networks.clear();
        assert_invalid_field(validate(&config), "networks");
    }

    #[test]
    fn test_every_network_is_checked() {
        let mut config = valid_config();
        let extra = NetworkConfig {
            chain_id: -3,
            fork_url: "https://example.test/v1".to_string(),
            ..Default::default()
        };
        config.networks.insert("staging".to_string(), extra);
        assert_invalid_field(validate(&config), "networks.staging.chain_id");
    }
}

use std::env::{self, VarError};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use figment::error::Kind;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use tracing::{debug, info, warn};

use super::validation;
use crate::domain::error::ConfigError;
use crate::domain::models::config::DevnetConfig;
use crate::infrastructure::logging::SecretScrubber;

/// Environment variable holding the node-provider URL networks fork from
pub const FORK_URL_VAR: &str = "ALCHE_API";

/// Prefix of environment variables that override configuration fields
pub const ENV_PREFIX: &str = "DEVNET_";

/// Project configuration file, relative to the project directory
pub const PROJECT_CONFIG_FILE: &str = ".devnet/config.yaml";

/// Project local overrides, relative to the project directory
pub const LOCAL_CONFIG_FILE: &str = ".devnet/local.yaml";

/// Dotenv file read before the environment, relative to the project directory
pub const DOTENV_FILE: &str = ".env";

/// Process-wide configuration, set once by [`ConfigLoader::load_global`]
static DEVNET_CONFIG: OnceLock<DevnetConfig> = OnceLock::new();

/// Configuration loader with hierarchical merging
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    project_dir: PathBuf,
    config_file: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader rooted at the current directory
    pub fn new() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            config_file: None,
            env_file: None,
        }
    }

    /// Look for `.devnet/` and `.env` under `dir` instead of the current directory
    #[must_use]
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    /// Merge an extra YAML file above the project files. The file must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Read this dotenv file instead of `<project>/.env`. The file must exist.
    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in defaults (Serialized)
    /// 2. .devnet/config.yaml (project config)
    /// 3. .devnet/local.yaml (project local overrides, optional)
    /// 4. The file given to [`with_config_file`](Self::with_config_file)
    /// 5. Environment variables (DEVNET_* prefix, `__` separates nesting)
    /// 6. `ALCHE_API` for every network without an explicit fork URL
    ///
    /// A dotenv file is read first; variables already set in the process win.
    pub fn load(&self) -> Result<DevnetConfig, ConfigError> {
        self.load_env_file()?;

        let fork_url = resolve_fork_url()?;

        let mut config: DevnetConfig = self.figment()?.extract().map_err(extraction_error)?;

        for (name, network) in &mut config.networks {
            let explicit = network.fork_url.trim();
            if explicit.is_empty() {
                network.fork_url.clone_from(&fork_url);
            } else {
                network.fork_url = explicit.to_string();
                debug!(network = %name, "network sets its own fork URL");
            }
        }

        validation::validate(&config)?;

        for (name, network) in &config.networks {
            if network.uses_test_mnemonic() {
                warn!(
                    network = %name,
                    "accounts derive from the built-in test mnemonic and are not secret"
                );
            }
        }

        if let Some(network) = config.active_network() {
            info!(
                network = %config.default_network,
                chain_id = network.chain_id,
                fork_block_number = network.fork_block_number,
                fork_url = %SecretScrubber::new().redact_url(&network.fork_url),
                compiler = %config.solidity.version,
                "configuration loaded"
            );
        }

        Ok(config)
    }

    /// Load configuration from a specific file on top of the defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<DevnetConfig, ConfigError> {
        Self::new().with_config_file(path.as_ref()).load()
    }

    /// Load once per process and return the shared, read-only configuration
    ///
    /// Later calls return the first successfully loaded value without
    /// touching the environment again.
    pub fn load_global(&self) -> Result<&'static DevnetConfig, ConfigError> {
        if let Some(config) = DEVNET_CONFIG.get() {
            return Ok(config);
        }
        let config = self.load()?;
        Ok(DEVNET_CONFIG.get_or_init(|| config))
    }

    /// The process-wide configuration, if [`load_global`](Self::load_global) succeeded
    pub fn global() -> Option<&'static DevnetConfig> {
        DEVNET_CONFIG.get()
    }

    /// Build the layered provider stack without extracting it
    pub fn figment(&self) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new()
            // 1. Start with built-in defaults
            .merge(Serialized::defaults(DevnetConfig::default()))
            // 2. Merge project config
            .merge(Yaml::file(self.project_dir.join(PROJECT_CONFIG_FILE)))
            // 3. Merge project local overrides
            .merge(Yaml::file(self.project_dir.join(LOCAL_CONFIG_FILE)));

        // 4. Merge the explicitly requested file
        if let Some(path) = &self.config_file {
            if !path.is_file() {
                return Err(ConfigError::ConfigFileNotFound(path.clone()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        // 5. Merge environment variables
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn load_env_file(&self) -> Result<(), ConfigError> {
        let (path, required) = match &self.env_file {
            Some(path) => (path.clone(), true),
            None => (self.project_dir.join(DOTENV_FILE), false),
        };

        if !required && !path.is_file() {
            return Ok(());
        }

        dotenvy::from_path(&path).map_err(|source| ConfigError::EnvFile {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded env file");
        Ok(())
    }
}

/// Read the fork URL from the environment, failing if it is absent or blank
pub fn resolve_fork_url() -> Result<String, ConfigError> {
    match env::var(FORK_URL_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(_) | Err(VarError::NotPresent) => Err(ConfigError::missing(FORK_URL_VAR)),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::invalid(
            FORK_URL_VAR,
            "<non-unicode>",
            "must be valid UTF-8",
        )),
    }
}

fn extraction_error(err: figment::Error) -> ConfigError {
    let field = if err.path.is_empty() {
        "configuration".to_string()
    } else {
        err.path.join(".")
    };
    let value = match &err.kind {
        Kind::InvalidType(actual, _) | Kind::InvalidValue(actual, _) => actual.to_string(),
        _ => "<unreadable>".to_string(),
    };
    ConfigError::invalid(field, value, err.kind.to_string())
}

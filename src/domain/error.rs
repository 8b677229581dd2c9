use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the configuration. All of them are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration: environment variable {variable} is not set or empty")]
    MissingConfiguration { variable: String },

    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingConfiguration`]
    pub fn missing(variable: impl Into<String>) -> Self {
        Self::MissingConfiguration {
            variable: variable.into(),
        }
    }

    /// Shorthand for [`ConfigError::InvalidConfiguration`]
    pub fn invalid(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// The field or variable the error is about, if it names one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingConfiguration { variable } => Some(variable),
            Self::InvalidConfiguration { field, .. } => Some(field),
            Self::ConfigFileNotFound(_) | Self::EnvFile { .. } => None,
        }
    }
}

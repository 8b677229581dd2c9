//! Domain layer for the development network configuration
//!
//! This module contains the configuration records and the error taxonomy.

pub mod error;
pub mod models;

pub use error::ConfigError;

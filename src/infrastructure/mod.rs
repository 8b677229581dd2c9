//! Infrastructure layer module
//!
//! This module contains the adapters between the domain records and the outside world:
//! - Configuration loading, validation and export
//! - Logging infrastructure and secret scrubbing

pub mod config;
pub mod logging;

//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Built-in defaults, YAML files and `DEVNET_*` overrides
//! - Fork URL resolution from `ALCHE_API` (optionally via `.env`)
//! - Field validation
//! - Export in the shape the development tool consumes

pub mod export;
pub mod loader;
pub mod validation;

pub use export::to_tool_json;
pub use loader::{ConfigLoader, ENV_PREFIX, FORK_URL_VAR};

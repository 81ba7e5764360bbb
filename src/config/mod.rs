//! Configuration module for eighttracks-shuffle.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - The collection selector
//! - Configuration validation

pub mod collection;
pub mod loader;
pub mod validation;

pub use collection::Collection;
pub use loader::{AccountConfig, Config, FollowConfig, OptionsConfig};
pub use validation::validate_config;

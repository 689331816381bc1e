//! Configuration file parsing for Code Review
//!
//! Supports `.coderev/config.toml` plus command-line and environment
//! overrides for the service endpoint.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, init_config_dir, load_settings, resolve_settings, ENDPOINT_ENV_VAR,
};
pub use types::*;

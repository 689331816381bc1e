//! Settings parser for .coderev/config.toml

use super::types::{ConfigOverrides, Settings};
use coderev_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const CODEREV_DIR: &str = ".coderev";

/// Environment variable overriding the service base URL
pub const ENDPOINT_ENV_VAR: &str = "CODEREV_ENDPOINT";

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .coderev/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(CODEREV_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply command-line and environment overrides on top of file settings
pub fn apply_overrides(mut settings: Settings, overrides: &ConfigOverrides) -> Settings {
    let env_endpoint = std::env::var(ENDPOINT_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty());

    if let Some(endpoint) = overrides.endpoint.clone().or(env_endpoint) {
        debug!("Service base URL overridden: {}", endpoint);
        settings.service.base_url = endpoint;
    }

    if let Some(timeout_ms) = overrides.timeout_ms {
        settings.service.timeout_ms = Some(timeout_ms);
    }

    settings
}

/// Load the config file and apply overrides in one step
pub fn resolve_settings(project_path: &Path, overrides: &ConfigOverrides) -> Settings {
    apply_overrides(load_settings(project_path), overrides)
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Initialization
// ─────────────────────────────────────────────────────────────────────────────

/// Create a default .coderev/config.toml.
///
/// Returns `Ok(false)` without touching anything when the file already exists.
pub fn init_config_dir(project_path: &Path) -> Result<bool> {
    let coderev_dir = project_path.join(CODEREV_DIR);

    if !coderev_dir.exists() {
        std::fs::create_dir_all(&coderev_dir)
            .map_err(|e| Error::config(format!("Failed to create .coderev dir: {}", e)))?;
    }

    let config_path = coderev_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(false);
    }

    std::fs::write(&config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created {:?}", config_path);
    Ok(true)
}

fn generate_default_config() -> String {
    r#"# Code Review Configuration
# https://github.com/code-review/code-review

[service]
# Where the analysis service listens
base_url = "http://localhost:8000"
analyze_path = "/analyze"

# Filename reported to the service for every submission
filename = "submission.py"

# Give up on a request after this many milliseconds (unset = wait forever)
# timeout_ms = 30000
"#
    .to_string()
}

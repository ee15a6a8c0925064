//! Global configuration location (`~/.config/evalview/config.toml`)

use std::path::PathBuf;

use crate::error::{EvalError, Result};

const CONFIG_DIR: &str = "evalview";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "EVALVIEW_CONFIG_DIR";

/// Path of the global configuration file
pub fn global_config_path() -> Result<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| EvalError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}

/// Returns true if the config directory is overridden via environment variable
pub fn is_config_dir_overridden() -> bool {
    std::env::var(CONFIG_DIR_ENV_VAR).is_ok()
}

/// Returns the source description for display purposes
pub fn source_display() -> String {
    if is_config_dir_overridden() {
        "custom config directory".to_string()
    } else {
        "~/.config/evalview/config.toml".to_string()
    }
}

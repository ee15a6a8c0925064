//! Configuration for evalview
//!
//! Configuration is TOML. Lookup order: an explicit `--config` file, then
//! `evalview.toml` under the root directory, then the global file, then
//! built-in defaults.

pub mod global;
pub mod types;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{EvalError, Result};
use crate::validate::ValidationOptions;

pub use types::{
    DisplayConfig, EvalviewConfig, ValidationConfig, CONFIG_FORMAT_VERSION, LOCAL_CONFIG_FILE,
};

/// Largest number of decimals `f64` formatting can meaningfully show
const MAX_PRECISION: usize = 17;

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Local(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Global(_) => f.write_str(&global::source_display()),
            ConfigSource::Defaults => f.write_str("defaults"),
        }
    }
}

impl EvalviewConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| EvalError::io_operation("read config", path.display(), e))?;
        let config: EvalviewConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EvalError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values that would make output or validation meaningless
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        let tolerance = self.validation.mean_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            bail_invalid!("validation.mean_tolerance", tolerance);
        }
        if self.display.precision > MAX_PRECISION {
            bail_invalid!("display.precision", self.display.precision);
        }
        if self.display.sample_limit == 0 {
            bail_invalid!("display.sample_limit", 0);
        }
        Ok(())
    }

    /// Resolve the effective configuration for a run
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<(Self, ConfigSource)> {
        Self::resolve_with_global(explicit, root, global::global_config_path().ok())
    }

    fn resolve_with_global(
        explicit: Option<&Path>,
        root: &Path,
        global_path: Option<PathBuf>,
    ) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            if !path.exists() {
                return Err(EvalError::not_found("config file", path.display()));
            }
            let config = Self::load(&path)?;
            return Ok((config, ConfigSource::Explicit(path)));
        }

        let local = root.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            debug!(path = %local.display(), "load_local_config");
            return Ok((Self::load(&local)?, ConfigSource::Local(local)));
        }

        if let Some(global) = global_path.filter(|p| p.is_file()) {
            debug!(path = %global.display(), "load_global_config");
            return Ok((Self::load(&global)?, ConfigSource::Global(global)));
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }
}

impl ValidationConfig {
    /// Options for [`crate::validate::check`]
    pub fn options(&self) -> ValidationOptions {
        ValidationOptions {
            mean_tolerance: self.mean_tolerance,
            check_lengths: self.check_lengths,
            require_requested_metrics: self.require_requested_metrics,
        }
    }
}

//! Configuration file resolution

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use weft::WeftConfig;

pub const ENV_CONFIG: &str = "WEFT_CONFIG";

/// `<config dir>/weft/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("weft").join("config.toml"))
}

/// Pick the config file: the explicit path, then `$WEFT_CONFIG`, then the
/// default location if a file exists there
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<String>,
    default_path: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(value));
    }
    default_path.filter(|path| path.is_file())
}

/// Load the effective configuration, then apply `WEFT_*` overrides
pub fn load_config(explicit: Option<&Path>) -> Result<WeftConfig> {
    let path = resolve_config_path(
        explicit,
        std::env::var(ENV_CONFIG).ok(),
        default_config_path(),
    );

    let mut config = match path {
        Some(path) => WeftConfig::load_from_file(&path).map_err(|e| CliError::Config(e.to_string()))?,
        None => WeftConfig::default(),
    };
    config
        .apply_env()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(config)
}

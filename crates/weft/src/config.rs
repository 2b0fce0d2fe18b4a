use serde::{Deserialize, Serialize};
use std::path::Path;
use weft_core::PromptExecutionSettings;

/// Weft configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeftConfig {
    /// Log level
    pub log_level: String,

    /// How the kernel handles function calls returned by a model
    pub function_calling: FunctionCallingConfig,

    /// Default execution settings attached to invocations
    pub execution_settings: PromptExecutionSettings,
}

impl Default for WeftConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            function_calling: FunctionCallingConfig::default(),
            execution_settings: PromptExecutionSettings::default(),
        }
    }
}

pub const ENV_LOG_LEVEL: &str = "WEFT_LOG_LEVEL";
pub const ENV_AUTO_INVOKE: &str = "WEFT_AUTO_INVOKE";
pub const ENV_MAX_FUNCTION_CALLS: &str = "WEFT_MAX_FUNCTION_CALLS";

impl WeftConfig {
    /// Load from configuration file; TOML for `.toml` paths, JSON otherwise
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
        }
    }

    /// Apply `WEFT_*` overrides from the process environment, reading `.env`
    /// first when present
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        dotenv::dotenv().ok();
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(value) = lookup(ENV_AUTO_INVOKE) {
            self.function_calling.auto_invoke = value
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid {}={:?}: {}", ENV_AUTO_INVOKE, value, e))?;
        }
        if let Some(value) = lookup(ENV_MAX_FUNCTION_CALLS) {
            self.function_calling.max_function_calls_per_message =
                value.parse().map_err(|e| {
                    anyhow::anyhow!("Invalid {}={:?}: {}", ENV_MAX_FUNCTION_CALLS, value, e)
                })?;
        }
        Ok(())
    }
}

/// Function calling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionCallingConfig {
    /// Invoke requested functions and append their results automatically
    pub auto_invoke: bool,

    /// Calls beyond this count in a single message are rejected
    pub max_function_calls_per_message: usize,

    /// Send error text back to the model when a call fails
    pub include_error_details: bool,
}

impl Default for FunctionCallingConfig {
    fn default() -> Self {
        Self {
            auto_invoke: true,
            max_function_calls_per_message: 32,
            include_error_details: true,
        }
    }
}

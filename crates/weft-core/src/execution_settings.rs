//! Prompt execution settings carried alongside kernel arguments

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service-specific settings for a prompt execution
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptExecutionSettings {
    /// Service the settings apply to; `None` means the default service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Provider-specific settings passed through untouched
    pub extension_data: HashMap<String, serde_json::Value>,
}

impl PromptExecutionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_service(service_id: impl Into<String>) -> Self {
        Self {
            service_id: Some(service_id.into()),
            ..Default::default()
        }
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extension_data.insert(key.into(), value);
        self
    }

    /// Key used when stored in a settings map
    pub fn key(&self) -> &str {
        self.service_id.as_deref().unwrap_or(DEFAULT_SERVICE_ID)
    }
}

pub const DEFAULT_SERVICE_ID: &str = "default";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_settings() {
        let settings = PromptExecutionSettings::default();
        assert!(settings.service_id.is_none());
        assert!(settings.extension_data.is_empty());
        assert_eq!(settings.key(), DEFAULT_SERVICE_ID);
    }

    #[test]
    fn test_custom_settings() {
        let settings = PromptExecutionSettings::for_service("test").with_extension("test", json!("test"));
        assert_eq!(settings.service_id.as_deref(), Some("test"));
        assert_eq!(settings.extension_data["test"], json!("test"));
        assert_eq!(settings.key(), "test");
    }
}

//! Keyed arguments passed into a function invocation

use crate::{PromptExecutionSettings, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Index;

/// Mapping from parameter name to value, plus optional execution settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelArguments {
    values: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    execution_settings: HashMap<String, PromptExecutionSettings>,
}

impl KernelArguments {
    /// Create an empty argument collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create arguments bound to a single execution setting
    pub fn with_settings(settings: PromptExecutionSettings) -> Self {
        let mut arguments = Self::new();
        arguments.add_settings(settings);
        arguments
    }

    /// Insert a value, serializing it to JSON
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.into(), value);
        Ok(())
    }

    /// Insert an already-encoded JSON value
    pub fn insert_value(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }

    /// Get a value, deserializing it into `T`
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.values.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    pub fn get_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.values.iter()
    }

    /// Merge another collection into this one; entries in `other` win
    pub fn update(&mut self, other: KernelArguments) {
        self.values.extend(other.values);
        self.execution_settings.extend(other.execution_settings);
    }

    pub fn add_settings(&mut self, settings: PromptExecutionSettings) {
        self.execution_settings
            .insert(settings.key().to_string(), settings);
    }

    pub fn execution_settings(&self) -> &HashMap<String, PromptExecutionSettings> {
        &self.execution_settings
    }
}

/// Panics when `key` is absent, like `HashMap`; use
/// [`KernelArguments::get_value`] for fallible access.
impl Index<&str> for KernelArguments {
    type Output = serde_json::Value;

    fn index(&self, key: &str) -> &Self::Output {
        &self.values[key]
    }
}

impl Extend<(String, serde_json::Value)> for KernelArguments {
    fn extend<I: IntoIterator<Item = (String, serde_json::Value)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl FromIterator<(String, serde_json::Value)> for KernelArguments {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            execution_settings: HashMap::new(),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for KernelArguments {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

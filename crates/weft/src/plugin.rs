//! Named collections of kernel functions

use crate::function::{KernelFunction, SharedFunction};
use crate::{KernelError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use weft_core::FunctionName;

/// A plugin groups functions under a name that prefixes them in function
/// calls (`<plugin>-<function>`)
#[derive(Clone)]
pub struct KernelPlugin {
    name: String,
    description: Option<String>,
    functions: HashMap<String, SharedFunction>,
}

impl KernelPlugin {
    /// Create an empty plugin
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            description: None,
            functions: HashMap::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a function, consuming and returning the plugin
    pub fn with_function(mut self, function: impl KernelFunction + 'static) -> Result<Self> {
        self.add_function(function)?;
        Ok(self)
    }

    pub fn add_function(&mut self, function: impl KernelFunction + 'static) -> Result<()> {
        self.add_shared(Arc::new(function))
    }

    pub fn add_shared(&mut self, function: SharedFunction) -> Result<()> {
        let function_name = function.metadata().name.clone();
        validate_name(&function_name)?;
        if self.functions.contains_key(&function_name) {
            return Err(KernelError::DuplicateFunction {
                plugin: self.name.clone(),
                function: function_name,
            });
        }
        self.functions.insert(function_name, function);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get(&self, function_name: &str) -> Option<SharedFunction> {
        self.functions.get(function_name).cloned()
    }

    pub fn contains(&self, function_name: &str) -> bool {
        self.functions.contains_key(function_name)
    }

    pub fn functions(&self) -> impl Iterator<Item = &SharedFunction> {
        self.functions.values()
    }

    /// Qualified names of every function, sorted
    pub fn function_names(&self) -> Vec<FunctionName> {
        let mut names: Vec<FunctionName> = self
            .functions
            .keys()
            .map(|function| FunctionName::new(self.name.clone(), function.clone()))
            .collect();
        names.sort_by(|a, b| a.function_name.cmp(&b.function_name));
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl std::fmt::Debug for KernelPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut functions: Vec<&String> = self.functions.keys().collect();
        functions.sort();
        f.debug_struct("KernelPlugin")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("functions", &functions)
            .finish()
    }
}

/// Plugin and function names are ASCII alphanumerics and underscores, so the
/// `-` separator in a qualified name stays unambiguous
pub fn validate_name(name: &str) -> Result<()> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(KernelError::InvalidPluginName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{FnFunction, FunctionMetadata};
    use serde_json::json;

    fn constant(name: &str) -> SharedFunction {
        Arc::new(FnFunction::new(FunctionMetadata::new(name), |_| Ok(json!(1))))
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("math").is_ok());
        assert!(validate_name("Text_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("my-plugin").is_err());
        assert!(validate_name("has space").is_err());
    }

    #[test]
    fn test_invalid_plugin_name() {
        let err = KernelPlugin::new("a-b").unwrap_err();
        assert!(matches!(err, KernelError::InvalidPluginName(ref name) if name == "a-b"));
    }

    #[test]
    fn test_duplicate_function() {
        let mut plugin = KernelPlugin::new("consts").unwrap();
        plugin.add_shared(constant("one")).unwrap();
        let err = plugin.add_shared(constant("one")).unwrap_err();
        assert!(matches!(err, KernelError::DuplicateFunction { .. }));
        assert_eq!(plugin.len(), 1);
    }

    #[test]
    fn test_function_names_sorted() {
        let mut plugin = KernelPlugin::new("consts").unwrap();
        plugin.add_shared(constant("zeta")).unwrap();
        plugin.add_shared(constant("alpha")).unwrap();
        let names: Vec<String> = plugin.function_names().iter().map(|n| n.qualified()).collect();
        assert_eq!(names, vec!["consts-alpha", "consts-zeta"]);
        assert!(plugin.contains("alpha"));
        assert!(plugin.get("missing").is_none());
    }
}

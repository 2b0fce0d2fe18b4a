//! Qualified function names of the form `<plugin>-<function>`

use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};

/// Separator between the plugin and function parts of a qualified name
pub const FUNCTION_NAME_SEPARATOR: char = '-';

/// A qualified name split into its plugin and function parts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionName {
    pub plugin_name: String,
    pub function_name: String,
}

impl FunctionName {
    pub fn new(plugin_name: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            function_name: function_name.into(),
        }
    }

    /// Join the parts back into `<plugin>-<function>`, or the bare function
    /// name when there is no plugin part
    pub fn qualified(&self) -> String {
        if self.plugin_name.is_empty() {
            self.function_name.clone()
        } else {
            format!(
                "{}{}{}",
                self.plugin_name, FUNCTION_NAME_SEPARATOR, self.function_name
            )
        }
    }
}

impl std::fmt::Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

/// Split on the first separator. A name without one has an empty plugin part.
pub(crate) fn split_qualified_name<'a>(
    name: Option<&'a str>,
    owner: Option<&str>,
) -> Result<(&'a str, &'a str)> {
    let name = name.ok_or_else(|| {
        ContentError::InvalidName(match owner {
            Some(id) => format!("function call {id} has no name"),
            None => "function call has no name".to_string(),
        })
    })?;
    Ok(name
        .split_once(FUNCTION_NAME_SEPARATOR)
        .unwrap_or(("", name)))
}

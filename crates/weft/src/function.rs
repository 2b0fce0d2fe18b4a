//! Kernel functions
//!
//! A `KernelFunction` is the unit the kernel dispatches function calls to.
//! It receives the call's keyed arguments and returns a JSON value that
//! becomes the function result sent back to the model.

use crate::{KernelError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use weft_core::KernelArguments;

/// Core trait for functions exposed to a model
#[async_trait]
pub trait KernelFunction: Send + Sync {
    /// Name, description and parameters of this function
    fn metadata(&self) -> &FunctionMetadata;

    /// Run the function with the given arguments
    async fn invoke(&self, arguments: KernelArguments) -> Result<serde_json::Value>;
}

/// Arc-wrapped function for sharing between plugins and the kernel
pub type SharedFunction = Arc<dyn KernelFunction>;

/// Metadata about a single function parameter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterMetadata {
    pub name: String,
    pub description: Option<String>,
    pub required: bool,
}

/// Metadata about a kernel function
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Function name, unique within its plugin
    pub name: String,
    /// Description shown to the model
    pub description: Option<String>,
    /// Declared parameters, in order
    pub parameters: Vec<ParameterMetadata>,
}

impl FunctionMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare a required parameter
    pub fn with_parameter(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameters.push(ParameterMetadata {
            name: name.into(),
            description: Some(description.into()),
            required: true,
        });
        self
    }

    /// Declare an optional parameter
    pub fn with_optional_parameter(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.push(ParameterMetadata {
            name: name.into(),
            description: Some(description.into()),
            required: false,
        });
        self
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterMetadata> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// Fail on the first required parameter missing from `arguments`
    pub fn check_arguments(&self, arguments: &KernelArguments) -> Result<()> {
        match self
            .required_parameters()
            .find(|p| !arguments.contains_key(&p.name))
        {
            Some(missing) => Err(KernelError::MissingArgument {
                function: self.name.clone(),
                argument: missing.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// A kernel function backed by a closure
pub struct FnFunction<F> {
    metadata: FunctionMetadata,
    func: F,
}

impl<F> FnFunction<F>
where
    F: Fn(KernelArguments) -> Result<serde_json::Value> + Send + Sync,
{
    pub fn new(metadata: FunctionMetadata, func: F) -> Self {
        Self { metadata, func }
    }
}

#[async_trait]
impl<F> KernelFunction for FnFunction<F>
where
    F: Fn(KernelArguments) -> Result<serde_json::Value> + Send + Sync,
{
    fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }

    async fn invoke(&self, arguments: KernelArguments) -> Result<serde_json::Value> {
        self.metadata.check_arguments(&arguments)?;
        (self.func)(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Simple echo function for testing
    struct EchoFunction {
        metadata: FunctionMetadata,
    }

    #[async_trait]
    impl KernelFunction for EchoFunction {
        fn metadata(&self) -> &FunctionMetadata {
            &self.metadata
        }

        async fn invoke(&self, arguments: KernelArguments) -> Result<serde_json::Value> {
            Ok(arguments.get_value("input").cloned().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_trait_object_invoke() {
        let echo: SharedFunction = Arc::new(EchoFunction {
            metadata: FunctionMetadata::new("echo"),
        });
        let mut arguments = KernelArguments::new();
        arguments.insert("input", "hello").unwrap();

        assert_eq!(echo.invoke(arguments).await.unwrap(), json!("hello"));
        assert_eq!(echo.metadata().name, "echo");
    }

    #[tokio::test]
    async fn test_fn_function_checks_required() {
        let metadata = FunctionMetadata::new("greet")
            .with_parameter("name", "Who to greet")
            .with_optional_parameter("punctuation", "Trailing mark");
        let greet = FnFunction::new(metadata, |arguments: KernelArguments| {
            let name: String = arguments.get("name")?.unwrap_or_default();
            let mark: String = arguments.get("punctuation")?.unwrap_or_else(|| "!".to_string());
            Ok(json!(format!("Hello, {name}{mark}")))
        });

        let missing = greet.invoke(KernelArguments::new()).await.unwrap_err();
        assert!(matches!(
            missing,
            KernelError::MissingArgument { ref argument, .. } if argument == "name"
        ));

        let mut arguments = KernelArguments::new();
        arguments.insert("name", "weft").unwrap();
        assert_eq!(greet.invoke(arguments).await.unwrap(), json!("Hello, weft!"));
    }

    #[test]
    fn test_required_parameters() {
        let metadata = FunctionMetadata::new("f")
            .with_parameter("a", "first")
            .with_optional_parameter("b", "second");
        let required: Vec<_> = metadata.required_parameters().map(|p| p.name.as_str()).collect();
        assert_eq!(required, vec!["a"]);
    }
}

//! Error types for weft crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Content error: {0}")]
    Content(#[from] weft_core::ContentError),

    #[error("Plugin not found: {0}")]
    PluginNotFound(String),

    #[error("Function not found: {0}")]
    FunctionNotFound(String),

    #[error("Function {function} is defined by several plugins: {}", .plugins.join(", "))]
    AmbiguousFunction {
        function: String,
        plugins: Vec<String>,
    },

    #[error("Plugin already registered: {0}")]
    DuplicatePlugin(String),

    #[error("Function {function} already registered in plugin {plugin}")]
    DuplicateFunction { plugin: String, function: String },

    #[error("Invalid plugin or function name: {0:?}")]
    InvalidPluginName(String),

    #[error("Missing argument {argument} for function {function}")]
    MissingArgument { function: String, argument: String },

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KernelError {
    /// Whether the model response itself was malformed, as opposed to the
    /// call failing once dispatched
    pub fn is_malformed_call(&self) -> bool {
        matches!(self, KernelError::Content(_))
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;

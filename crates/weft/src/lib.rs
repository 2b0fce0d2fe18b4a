//! Main crate for the weft kernel
//!
//! Registers plugins of kernel functions and dispatches the function calls a
//! model returns to them, answering each call with a function result.

pub mod config;
pub mod core_plugins;
pub mod error;
pub mod function;
pub mod kernel;
pub mod plugin;

// Re-export core types
pub use weft_core::{
    AuthorRole, ChatHistory, ChatMessageContent, ContentError, ContentType, FinishReason,
    FunctionCallAccumulator, FunctionCallContent, FunctionName, FunctionResultContent,
    KernelArguments, KernelContent, PromptExecutionSettings, TextContent,
};

pub use config::{FunctionCallingConfig, WeftConfig};
pub use error::{KernelError, Result};
pub use function::{FnFunction, FunctionMetadata, KernelFunction, ParameterMetadata, SharedFunction};
pub use kernel::{Kernel, KernelBuilder};
pub use plugin::KernelPlugin;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::function::{FnFunction, FunctionMetadata, KernelFunction};
    pub use crate::kernel::Kernel;
    pub use crate::plugin::KernelPlugin;
    pub use weft_core::{
        AuthorRole, ChatHistory, ChatMessageContent, FunctionCallContent, FunctionResultContent,
        KernelArguments,
    };
}

//! # weft core
//!
//! Content model for the weft kernel: chat messages, the content items they
//! carry (text, function calls, function results), and the keyed arguments
//! a function call is turned into before dispatch.

pub mod arguments;
pub mod chat;
pub mod chat_history;
pub mod content;
pub mod error;
pub mod execution_settings;
pub mod function_call;
pub mod function_result;
pub mod name;
pub mod stream;
pub mod text;

pub use arguments::KernelArguments;
pub use chat::{AuthorRole, ChatMessageContent, FinishReason};
pub use chat_history::ChatHistory;
pub use content::{ContentType, KernelContent, Metadata};
pub use error::{ContentError, Result};
pub use execution_settings::PromptExecutionSettings;
pub use function_call::FunctionCallContent;
pub use function_result::FunctionResultContent;
pub use name::{FUNCTION_NAME_SEPARATOR, FunctionName};
pub use stream::FunctionCallAccumulator;
pub use text::TextContent;

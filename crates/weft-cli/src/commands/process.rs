//! Process command handler

use crate::error::Result;
use std::path::Path;
use tracing::info;
use weft::{ChatMessageContent, Kernel};

/// Answer the function calls in a chat message file with a tool message,
/// returned in provider form: one entry per answered call
pub async fn run_process(kernel: &Kernel, file: &Path) -> Result<String> {
    let input = std::fs::read_to_string(file)?;
    let message: ChatMessageContent = serde_json::from_str(&input)?;
    info!(
        calls = message.function_calls().count(),
        "Processing function calls"
    );

    let tool_message = kernel.process_function_calls(&message).await;
    Ok(serde_json::to_string_pretty(&tool_message.to_dicts())?)
}

//! Invoke command handler

use super::read_json_input;
use crate::error::Result;
use std::path::Path;
use tracing::info;
use weft::{FunctionCallContent, Kernel};

/// Dispatch one function-call record and return the result record as JSON
pub async fn run_invoke(kernel: &Kernel, call: Option<&str>, file: Option<&Path>) -> Result<String> {
    let input = read_json_input(call, file)?;
    let call: FunctionCallContent = serde_json::from_str(&input)?;
    info!(
        call_id = call.id.as_deref().unwrap_or_default(),
        name = call.name.as_deref().unwrap_or_default(),
        "Invoking function call"
    );

    let result = kernel.invoke_function_call(&call).await?;
    Ok(serde_json::to_string(&result)?)
}

//! CLI command handlers

pub mod functions;
pub mod invoke;
pub mod process;
pub mod split;

pub use functions::run_functions;
pub use invoke::run_invoke;
pub use process::run_process;
pub use split::run_split;

use crate::error::{CliError, Result};
use std::path::Path;

/// Take JSON from an inline argument or a file, exactly one of them
pub(crate) fn read_json_input(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(json), None) => Ok(json.to_string()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (Some(_), Some(_)) => Err(CliError::InvalidInput(
            "pass either inline JSON or --file, not both".to_string(),
        )),
        (None, None) => Err(CliError::InvalidInput(
            "no input given; pass inline JSON or --file".to_string(),
        )),
    }
}

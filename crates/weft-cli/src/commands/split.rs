//! Split command handler

use crate::error::Result;
use weft::FunctionCallContent;

/// Decompose a qualified function name into its plugin and function parts
pub fn run_split(name: &str) -> Result<String> {
    let call = FunctionCallContent::default().with_name(name);
    let mapping = call.split_name_as_mapping()?;
    Ok(serde_json::to_string(&mapping)?)
}

//! Ready-made plugins

mod math;
mod text;

pub use math::{MATH_PLUGIN_NAME, math_plugin};
pub use text::{TEXT_PLUGIN_NAME, text_plugin};

use crate::{KernelError, Result};
use weft_core::KernelArguments;

/// Read a finite numeric argument, accepting JSON numbers and numeric strings
pub(crate) fn number_argument(
    arguments: &KernelArguments,
    function: &str,
    name: &str,
) -> Result<f64> {
    let value = arguments
        .get_value(name)
        .ok_or_else(|| KernelError::MissingArgument {
            function: function.to_string(),
            argument: name.to_string(),
        })?;

    let number = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    // "inf" and "NaN" parse as f64 but have no JSON form
    number.filter(|n| n.is_finite()).ok_or_else(|| {
        KernelError::Execution(format!(
            "{function}: argument {name} is not a number: {value}"
        ))
    })
}

/// Read an argument as text; non-string values use their JSON form
pub(crate) fn text_argument(
    arguments: &KernelArguments,
    function: &str,
    name: &str,
) -> Result<String> {
    match arguments.get_value(name) {
        Some(serde_json::Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(KernelError::MissingArgument {
            function: function.to_string(),
            argument: name.to_string(),
        }),
    }
}

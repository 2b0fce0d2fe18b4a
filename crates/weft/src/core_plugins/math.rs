use super::number_argument;
use crate::function::{FnFunction, FunctionMetadata};
use crate::plugin::KernelPlugin;
use crate::{KernelError, Result};
use serde_json::Value;

pub const MATH_PLUGIN_NAME: &str = "math";

/// Largest magnitude at which every integer is exactly representable as f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Arithmetic on two numbers, `input` and `amount`
pub fn math_plugin() -> Result<KernelPlugin> {
    KernelPlugin::new(MATH_PLUGIN_NAME)?
        .with_description("Basic arithmetic")
        .with_function(binary("Add", "Add amount to input", |a, b| Ok(a + b)))?
        .with_function(binary("Subtract", "Subtract amount from input", |a, b| Ok(a - b)))?
        .with_function(binary("Multiply", "Multiply input by amount", |a, b| Ok(a * b)))?
        .with_function(binary("Divide", "Divide input by amount", |a, b| {
            if b == 0.0 {
                Err(KernelError::Execution("Divide: division by zero".to_string()))
            } else {
                Ok(a / b)
            }
        }))
}

fn binary<F>(
    name: &'static str,
    description: &'static str,
    op: F,
) -> FnFunction<impl Fn(weft_core::KernelArguments) -> Result<Value> + Send + Sync>
where
    F: Fn(f64, f64) -> Result<f64> + Send + Sync,
{
    let metadata = FunctionMetadata::new(name)
        .with_description(description)
        .with_parameter("input", "The first number")
        .with_parameter("amount", "The second number");

    FnFunction::new(metadata, move |arguments| {
        let input = number_argument(&arguments, name, "input")?;
        let amount = number_argument(&arguments, name, "amount")?;
        number_value(name, op(input, amount)?)
    })
}

/// Integral results are returned as JSON integers
fn number_value(function: &str, value: f64) -> Result<Value> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Ok(Value::from(value as i64));
    }
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| KernelError::Execution(format!("{function}: result {value} is not finite")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::KernelFunction;
    use serde_json::json;
    use weft_core::KernelArguments;

    fn arguments(input: Value, amount: Value) -> KernelArguments {
        [("input".to_string(), input), ("amount".to_string(), amount)]
            .into_iter()
            .collect()
    }

    #[tokio::test]
    async fn test_add_integers() {
        let plugin = math_plugin().unwrap();
        let add = plugin.get("Add").unwrap();
        assert_eq!(add.invoke(arguments(json!(1), json!(2))).await.unwrap(), json!(3));
    }

    #[tokio::test]
    async fn test_numeric_strings() {
        let plugin = math_plugin().unwrap();
        let multiply = plugin.get("Multiply").unwrap();
        assert_eq!(
            multiply.invoke(arguments(json!("1.5"), json!(" 2 "))).await.unwrap(),
            json!(3)
        );
    }

    #[tokio::test]
    async fn test_fractional_result() {
        let plugin = math_plugin().unwrap();
        let divide = plugin.get("Divide").unwrap();
        assert_eq!(divide.invoke(arguments(json!(1), json!(4))).await.unwrap(), json!(0.25));
    }

    #[tokio::test]
    async fn test_divide_by_zero() {
        let plugin = math_plugin().unwrap();
        let divide = plugin.get("Divide").unwrap();
        let err = divide.invoke(arguments(json!(1), json!(0))).await.unwrap_err();
        assert!(matches!(err, KernelError::Execution(_)));
    }

    #[tokio::test]
    async fn test_not_a_number() {
        let plugin = math_plugin().unwrap();
        let subtract = plugin.get("Subtract").unwrap();
        let err = subtract.invoke(arguments(json!("ten"), json!(1))).await.unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[tokio::test]
    async fn test_overflow_is_an_error() {
        let plugin = math_plugin().unwrap();
        let multiply = plugin.get("Multiply").unwrap();
        let err = multiply.invoke(arguments(json!(1e308), json!(10))).await.unwrap_err();
        assert!(matches!(err, KernelError::Execution(ref message) if message.contains("not finite")));
    }

    #[tokio::test]
    async fn test_non_finite_inputs_rejected() {
        let plugin = math_plugin().unwrap();
        let add = plugin.get("Add").unwrap();
        for input in ["inf", "-infinity", "NaN"] {
            let err = add.invoke(arguments(json!(input), json!(1))).await.unwrap_err();
            assert!(err.to_string().contains("not a number"), "{input}");
        }
    }

    #[test]
    fn test_plugin_contents() {
        let plugin = math_plugin().unwrap();
        assert_eq!(plugin.len(), 4);
        assert_eq!(plugin.description(), Some("Basic arithmetic"));
    }
}

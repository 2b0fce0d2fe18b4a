use super::text_argument;
use crate::Result;
use crate::function::{FnFunction, FunctionMetadata};
use crate::plugin::KernelPlugin;
use serde_json::Value;

pub const TEXT_PLUGIN_NAME: &str = "text";

/// String helpers operating on `input`
pub fn text_plugin() -> Result<KernelPlugin> {
    KernelPlugin::new(TEXT_PLUGIN_NAME)?
        .with_description("String manipulation")
        .with_function(unary("uppercase", "Convert input to upper case", |s| s.to_uppercase()))?
        .with_function(unary("lowercase", "Convert input to lower case", |s| s.to_lowercase()))?
        .with_function(unary("trim", "Remove leading and trailing whitespace", |s| {
            s.trim().to_string()
        }))?
        .with_function(FnFunction::new(
            FunctionMetadata::new("concat")
                .with_description("Concatenate input and input2")
                .with_parameter("input", "The first string")
                .with_parameter("input2", "The second string"),
            |arguments| {
                let first = text_argument(&arguments, "concat", "input")?;
                let second = text_argument(&arguments, "concat", "input2")?;
                Ok(Value::String(first + &second))
            },
        ))
}

fn unary<F>(
    name: &'static str,
    description: &'static str,
    op: F,
) -> FnFunction<impl Fn(weft_core::KernelArguments) -> Result<Value> + Send + Sync>
where
    F: Fn(&str) -> String + Send + Sync,
{
    let metadata = FunctionMetadata::new(name)
        .with_description(description)
        .with_parameter("input", "The text to transform");

    FnFunction::new(metadata, move |arguments| {
        let input = text_argument(&arguments, name, "input")?;
        Ok(Value::String(op(&input)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KernelError;
    use crate::function::KernelFunction;
    use serde_json::json;
    use weft_core::KernelArguments;

    fn input(value: Value) -> KernelArguments {
        [("input".to_string(), value)].into_iter().collect()
    }

    #[tokio::test]
    async fn test_transforms() {
        let plugin = text_plugin().unwrap();
        let cases = [
            ("uppercase", "Hello", "HELLO"),
            ("lowercase", "Hello", "hello"),
            ("trim", "  Hello \n", "Hello"),
        ];
        for (function, given, expected) in cases {
            let result = plugin.get(function).unwrap().invoke(input(json!(given))).await.unwrap();
            assert_eq!(result, json!(expected), "{function}");
        }
    }

    #[tokio::test]
    async fn test_concat() {
        let plugin = text_plugin().unwrap();
        let mut arguments = input(json!("Hello, "));
        arguments.insert("input2", "world").unwrap();
        let result = plugin.get("concat").unwrap().invoke(arguments).await.unwrap();
        assert_eq!(result, json!("Hello, world"));
    }

    #[tokio::test]
    async fn test_non_string_input_uses_json() {
        let plugin = text_plugin().unwrap();
        let result = plugin.get("uppercase").unwrap().invoke(input(json!(true))).await.unwrap();
        assert_eq!(result, json!("TRUE"));
    }

    #[tokio::test]
    async fn test_missing_input() {
        let plugin = text_plugin().unwrap();
        let err = plugin
            .get("concat")
            .unwrap()
            .invoke(input(json!("a")))
            .await
            .unwrap_err();
        assert!(matches!(err, KernelError::MissingArgument { ref argument, .. } if argument == "input2"));
    }
}

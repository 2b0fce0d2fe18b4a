//! Model-issued requests to invoke a named function
//!
//! A `FunctionCallContent` is built by a provider connector, either whole or
//! from streamed chunks combined in arrival order, and consumed by the
//! invocation layer which parses the arguments and routes on the name.

use crate::content::{ContentType, expect_content_type};
use crate::name::split_qualified_name;
use crate::{ContentError, FunctionName, KernelArguments, Metadata, Result};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::Add;

/// One function call requested by a model
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "FunctionCallRecord")]
pub struct FunctionCallContent {
    /// Provider-assigned correlation id
    pub id: Option<String>,
    /// `<plugin>-<function>` or a bare function name
    pub name: Option<String>,
    /// Serialized JSON arguments, possibly still partial while streaming
    pub arguments: Option<String>,
    pub metadata: Metadata,
}

/// Encoded form, with the optional discriminator
#[derive(Deserialize)]
struct FunctionCallRecord {
    content_type: Option<ContentType>,
    id: Option<String>,
    name: Option<String>,
    arguments: Option<String>,
    #[serde(default)]
    metadata: Metadata,
}

impl TryFrom<FunctionCallRecord> for FunctionCallContent {
    type Error = String;

    fn try_from(record: FunctionCallRecord) -> std::result::Result<Self, Self::Error> {
        expect_content_type(record.content_type, ContentType::FunctionCall)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            arguments: record.arguments,
            metadata: record.metadata,
        })
    }
}

impl FunctionCallContent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            arguments: Some(arguments.into()),
            metadata: Metadata::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Combine with a following chunk of the same call.
    ///
    /// Arguments are concatenated as text. `id`, `name` and `metadata` are
    /// taken from `self`; `other` only fills an `id` or `name` that `self`
    /// does not have yet.
    pub fn combine(&self, other: Option<&FunctionCallContent>) -> FunctionCallContent {
        let Some(other) = other else {
            return self.clone();
        };

        let arguments = match (&self.arguments, &other.arguments) {
            (None, None) => None,
            (left, right) => Some(format!(
                "{}{}",
                left.as_deref().unwrap_or_default(),
                right.as_deref().unwrap_or_default()
            )),
        };

        FunctionCallContent {
            id: self.id.clone().or_else(|| other.id.clone()),
            name: self.name.clone().or_else(|| other.name.clone()),
            arguments,
            metadata: self.metadata.clone(),
        }
    }

    /// Fold streamed chunks into one call, in order
    pub fn accumulate<I>(chunks: I) -> Option<FunctionCallContent>
    where
        I: IntoIterator<Item = FunctionCallContent>,
    {
        chunks
            .into_iter()
            .reduce(|acc, chunk| acc.combine(Some(&chunk)))
    }

    /// Parse the arguments as a JSON object.
    ///
    /// Returns `Ok(None)` when no arguments were set. An empty string is not
    /// treated as absent and fails to parse.
    pub fn parse_arguments(&self) -> Result<Option<serde_json::Map<String, serde_json::Value>>> {
        let Some(arguments) = self.arguments.as_deref() else {
            return Ok(None);
        };
        serde_json::from_str(arguments)
            .map(Some)
            .map_err(|source| ContentError::InvalidArguments {
                arguments: arguments.to_string(),
                source,
            })
    }

    pub fn to_kernel_arguments(&self) -> Result<KernelArguments> {
        Ok(self
            .parse_arguments()?
            .map(KernelArguments::from)
            .unwrap_or_default())
    }

    /// Split `name` into `(plugin_name, function_name)`
    pub fn split_name(&self) -> Result<(&str, &str)> {
        split_qualified_name(self.name.as_deref(), self.id.as_deref())
    }

    pub fn split_name_as_mapping(&self) -> Result<FunctionName> {
        let (plugin_name, function_name) = self.split_name()?;
        Ok(FunctionName::new(plugin_name, function_name))
    }

    pub fn plugin_name(&self) -> Option<&str> {
        self.split_name().ok().map(|(plugin, _)| plugin)
    }

    pub fn function_name(&self) -> Option<&str> {
        self.split_name().ok().map(|(_, function)| function)
    }
}

impl Add for FunctionCallContent {
    type Output = FunctionCallContent;

    fn add(self, rhs: FunctionCallContent) -> Self::Output {
        self.combine(Some(&rhs))
    }
}

impl Add<Option<FunctionCallContent>> for FunctionCallContent {
    type Output = FunctionCallContent;

    fn add(self, rhs: Option<FunctionCallContent>) -> Self::Output {
        self.combine(rhs.as_ref())
    }
}

// Field order is part of the wire format: metadata, content_type, then the
// fields that are present.
impl Serialize for FunctionCallContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let present = [&self.id, &self.name, &self.arguments]
            .iter()
            .filter(|field| field.is_some())
            .count();
        let mut state = serializer.serialize_struct("FunctionCallContent", 2 + present)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("content_type", &ContentType::FunctionCall)?;
        match &self.id {
            Some(id) => state.serialize_field("id", id)?,
            None => state.skip_field("id")?,
        }
        match &self.name {
            Some(name) => state.serialize_field("name", name)?,
            None => state.skip_field("name")?,
        }
        match &self.arguments {
            Some(arguments) => state.serialize_field("arguments", arguments)?,
            None => state.skip_field("arguments")?,
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_combine_does_not_touch_inputs() {
        let first = FunctionCallContent::default()
            .with_id("call_1")
            .with_name("math-Add")
            .with_arguments("{\"input\":");
        let second = FunctionCallContent::default().with_arguments(" 1}");

        let combined = first.combine(Some(&second));

        assert_eq!(combined.arguments.as_deref(), Some("{\"input\": 1}"));
        assert_eq!(first.arguments.as_deref(), Some("{\"input\":"));
        assert_eq!(second.arguments.as_deref(), Some(" 1}"));
    }

    #[test]
    fn test_combine_keeps_first_name() {
        let first = FunctionCallContent::new("a", "first-name", "");
        let second = FunctionCallContent::new("b", "second-name", "{}");

        let combined = first + second;
        assert_eq!(combined.id.as_deref(), Some("a"));
        assert_eq!(combined.name.as_deref(), Some("first-name"));
        assert_eq!(combined.arguments.as_deref(), Some("{}"));
    }

    #[test]
    fn test_combine_fills_missing_identity() {
        let first = FunctionCallContent::default().with_arguments("{");
        let second = FunctionCallContent::default()
            .with_id("late")
            .with_name("text-trim")
            .with_arguments("}");

        let combined = first.combine(Some(&second));
        assert_eq!(combined.id.as_deref(), Some("late"));
        assert_eq!(combined.name.as_deref(), Some("text-trim"));
        assert_eq!(combined.parse_arguments().unwrap(), Some(serde_json::Map::new()));
    }

    #[test]
    fn test_combine_both_absent_stays_absent() {
        let first = FunctionCallContent::default().with_name("f");
        let combined = first.combine(Some(&FunctionCallContent::default()));
        assert!(combined.arguments.is_none());
        assert_eq!(combined.parse_arguments().unwrap(), None);
    }

    #[test]
    fn test_combine_keeps_first_metadata() {
        let first = FunctionCallContent::default().with_metadata("index", json!(0));
        let second = FunctionCallContent::default().with_metadata("index", json!(1));
        let combined = first.combine(Some(&second));
        assert_eq!(combined.metadata["index"], json!(0));
    }

    #[test]
    fn test_accumulate_in_order() {
        let chunks = vec![
            FunctionCallContent::new("call_1", "text-concat", ""),
            FunctionCallContent::default().with_arguments("{\"input\": \"a\", "),
            FunctionCallContent::default().with_arguments("\"input2\": \"b\"}"),
        ];
        let call = FunctionCallContent::accumulate(chunks).unwrap();
        let arguments = call.to_kernel_arguments().unwrap();
        assert_eq!(arguments["input"], json!("a"));
        assert_eq!(arguments["input2"], json!("b"));
        assert!(FunctionCallContent::accumulate(Vec::new()).is_none());
    }

    #[test]
    fn test_parse_empty_string_fails() {
        let call = FunctionCallContent::default().with_name("f").with_arguments("");
        assert!(call.parse_arguments().unwrap_err().is_invalid_arguments());
    }

    #[test]
    fn test_parse_non_object_fails() {
        let call = FunctionCallContent::default().with_arguments("[1, 2]");
        let err = call.parse_arguments().unwrap_err();
        assert!(err.is_invalid_arguments());
        assert!(call.to_kernel_arguments().is_err());
    }

    #[test]
    fn test_concatenated_objects_fail_to_parse() {
        let call = FunctionCallContent::default().with_arguments("{\"a\": 1}{\"b\": 2}");
        assert!(call.parse_arguments().unwrap_err().is_invalid_arguments());
    }

    #[test]
    fn test_name_accessors() {
        let call = FunctionCallContent::default().with_name("Function");
        assert_eq!(call.plugin_name(), Some(""));
        assert_eq!(call.function_name(), Some("Function"));

        let unnamed = FunctionCallContent::default();
        assert_eq!(unnamed.plugin_name(), None);
        assert_eq!(unnamed.function_name(), None);
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let call = FunctionCallContent::default().with_id("1234");
        assert_eq!(
            serde_json::to_string(&call).unwrap(),
            r#"{"metadata":{},"content_type":"function_call","id":"1234"}"#
        );
    }

    #[test]
    fn test_deserialize_with_and_without_tag() {
        let tagged: FunctionCallContent = serde_json::from_value(json!({
            "metadata": {"k": "v"},
            "content_type": "function_call",
            "id": "x",
            "name": "a-b"
        }))
        .unwrap();
        assert_eq!(tagged.name.as_deref(), Some("a-b"));
        assert!(tagged.arguments.is_none());
        assert_eq!(tagged.metadata["k"], json!("v"));

        let bare: FunctionCallContent =
            serde_json::from_value(json!({"name": "f", "arguments": "{}"})).unwrap();
        assert!(bare.metadata.is_empty());
        assert!(bare.id.is_none());
    }

    #[test]
    fn test_deserialize_rejects_other_content_type() {
        let parsed = serde_json::from_str::<FunctionCallContent>(
            r#"{"content_type":"function_result","id":"x","name":"math-Add","result":3}"#,
        );
        let err = parsed.unwrap_err();
        assert!(err.to_string().contains("expected content_type function_call"));
    }

    #[test]
    fn test_deserialize_tag_optional() {
        let tagged: FunctionCallContent = serde_json::from_value(json!({
            "content_type": "function_call", "id": "1", "name": "f"
        }))
        .unwrap();
        let untagged: FunctionCallContent =
            serde_json::from_value(json!({"id": "1", "name": "f"})).unwrap();
        assert_eq!(tagged, untagged);
        assert_eq!(tagged.arguments, None);
    }
}

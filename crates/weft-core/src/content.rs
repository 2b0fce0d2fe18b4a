//! Content items carried by chat messages

use crate::{FunctionCallContent, FunctionResultContent, TextContent};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Free-form metadata attached to a content item
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Discriminator written as `content_type` in the encoded form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentType {
    Text,
    FunctionCall,
    FunctionResult,
}

/// Check the `content_type` of a standalone record. Records nested in a
/// `KernelContent` arrive with the tag already consumed.
pub(crate) fn expect_content_type(
    found: Option<ContentType>,
    expected: ContentType,
) -> Result<(), String> {
    match found {
        Some(found) if found != expected => Err(format!(
            "expected content_type {expected}, found {found}"
        )),
        _ => Ok(()),
    }
}

/// Any content item a chat message can hold
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum KernelContent {
    Text(TextContent),
    FunctionCall(FunctionCallContent),
    FunctionResult(FunctionResultContent),
}

impl KernelContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            KernelContent::Text(_) => ContentType::Text,
            KernelContent::FunctionCall(_) => ContentType::FunctionCall,
            KernelContent::FunctionResult(_) => ContentType::FunctionResult,
        }
    }

    pub fn as_text(&self) -> Option<&TextContent> {
        match self {
            KernelContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_function_call(&self) -> Option<&FunctionCallContent> {
        match self {
            KernelContent::FunctionCall(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_function_result(&self) -> Option<&FunctionResultContent> {
        match self {
            KernelContent::FunctionResult(result) => Some(result),
            _ => None,
        }
    }
}

// Each item writes its own tag, so the variants keep the field order of
// their standalone encoding.
impl Serialize for KernelContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            KernelContent::Text(text) => text.serialize(serializer),
            KernelContent::FunctionCall(call) => call.serialize(serializer),
            KernelContent::FunctionResult(result) => result.serialize(serializer),
        }
    }
}

impl From<TextContent> for KernelContent {
    fn from(value: TextContent) -> Self {
        KernelContent::Text(value)
    }
}

impl From<FunctionCallContent> for KernelContent {
    fn from(value: FunctionCallContent) -> Self {
        KernelContent::FunctionCall(value)
    }
}

impl From<FunctionResultContent> for KernelContent {
    fn from(value: FunctionResultContent) -> Self {
        KernelContent::FunctionResult(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_content_type_names() {
        assert_eq!(ContentType::FunctionCall.to_string(), "function_call");
        assert_eq!(ContentType::from_str("function_result").unwrap(), ContentType::FunctionResult);
        let name: &'static str = ContentType::Text.into();
        assert_eq!(name, "text");
    }

    #[test]
    fn test_items_keep_standalone_encoding() {
        let call = FunctionCallContent::new("test", "Test-Function", "{}");
        let item = KernelContent::from(call.clone());
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            serde_json::to_string(&call).unwrap()
        );
    }

    #[test]
    fn test_deserialize_dispatches_on_tag() {
        let items: Vec<KernelContent> = serde_json::from_value(json!([
            {"content_type": "text", "text": "hi"},
            {"metadata": {}, "content_type": "function_call", "id": "1", "name": "f"},
            {"content_type": "function_result", "id": "1", "name": "f", "result": 3}
        ]))
        .unwrap();

        assert_eq!(items[0].as_text().unwrap().text, "hi");
        assert_eq!(items[1].as_function_call().unwrap().id.as_deref(), Some("1"));
        assert_eq!(items[2].as_function_result().unwrap().result, json!(3));
        assert_eq!(items[2].content_type(), ContentType::FunctionResult);
    }

    #[test]
    fn test_deserialize_unknown_tag_fails() {
        let parsed: Result<KernelContent, _> =
            serde_json::from_value(json!({"content_type": "image", "uri": "x"}));
        assert!(parsed.is_err());
    }
}

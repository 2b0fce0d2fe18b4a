//! Chat messages and their provider-facing encoding

use crate::{FunctionCallContent, FunctionResultContent, KernelContent, Metadata, TextContent};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthorRole {
    System,
    User,
    Assistant,
    Tool,
}

/// Why the model stopped producing a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
}

/// A single message in a conversation, made of one or more content items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageContent {
    pub role: AuthorRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<KernelContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl ChatMessageContent {
    /// Create a message holding a single text item
    pub fn new(role: AuthorRole, content: impl Into<String>) -> Self {
        Self::with_items(role, vec![TextContent::new(content).into()])
    }

    pub fn with_items(role: AuthorRole, items: Vec<KernelContent>) -> Self {
        Self {
            role,
            name: None,
            items,
            encoding: None,
            ai_model_id: None,
            finish_reason: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_finish_reason(mut self, finish_reason: FinishReason) -> Self {
        self.finish_reason = Some(finish_reason);
        self
    }

    pub fn with_ai_model_id(mut self, ai_model_id: impl Into<String>) -> Self {
        self.ai_model_id = Some(ai_model_id.into());
        self
    }

    pub fn push(&mut self, item: impl Into<KernelContent>) {
        self.items.push(item.into());
    }

    /// Append a text item after the existing ones
    pub fn push_text(&mut self, text: impl Into<String>) {
        let mut content = TextContent::new(text);
        content.encoding = self.encoding.clone();
        self.items.push(content.into());
    }

    /// Text of the first text item, or an empty string
    pub fn content(&self) -> &str {
        self.items
            .iter()
            .find_map(KernelContent::as_text)
            .map(|text| text.text.as_str())
            .unwrap_or_default()
    }

    /// Replace the first text item's text, inserting one at the front when
    /// the message has none. Empty text is ignored.
    pub fn set_content(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        let encoding = self.encoding.clone();
        let first_text = self.items.iter_mut().find_map(|item| match item {
            KernelContent::Text(text) => Some(text),
            _ => None,
        });
        if let Some(text) = first_text {
            text.text = value;
            text.encoding = encoding;
            return;
        }
        let mut text = TextContent::new(value);
        text.encoding = encoding;
        self.items.insert(0, text.into());
    }

    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionCallContent> {
        self.items.iter().filter_map(KernelContent::as_function_call)
    }

    pub fn function_results(&self) -> impl Iterator<Item = &FunctionResultContent> {
        self.items.iter().filter_map(KernelContent::as_function_result)
    }

    pub fn has_function_calls(&self) -> bool {
        self.function_calls().next().is_some()
    }

    /// Encode as a provider chat message using `role` and `content` keys.
    ///
    /// A tool message carries a single `tool_call_id`, the first result's.
    /// Use [`to_dicts`](Self::to_dicts) for tool messages answering several
    /// calls.
    pub fn to_dict(&self) -> Value {
        self.to_dict_with_keys("role", "content")
    }

    /// Encode as provider chat messages. Providers expect one tool message
    /// per call id, so a tool message with several results becomes one
    /// entry per result; every other message is a single entry.
    pub fn to_dicts(&self) -> Vec<Value> {
        if self.role != AuthorRole::Tool || self.function_results().nth(1).is_none() {
            return vec![self.to_dict()];
        }
        self.function_results()
            .map(|result| {
                ChatMessageContent::with_items(
                    AuthorRole::Tool,
                    vec![KernelContent::FunctionResult(result.clone())],
                )
                .to_dict()
            })
            .collect()
    }

    pub fn to_dict_with_keys(&self, role_key: &str, content_key: &str) -> Value {
        let mut message = Map::new();
        message.insert(role_key.to_string(), Value::String(self.role.to_string()));

        if self.has_function_calls() {
            let tool_calls = self.function_calls().map(tool_call_dict).collect();
            message.insert("tool_calls".to_string(), Value::Array(tool_calls));
        } else {
            message.insert(content_key.to_string(), self.content_value());
        }

        if self.role == AuthorRole::Tool {
            let call_id = self
                .function_results()
                .next()
                .and_then(|result| result.id.clone())
                .unwrap_or_default();
            message.insert("tool_call_id".to_string(), Value::String(call_id));
        } else if let Some(name) = &self.name {
            message.insert("name".to_string(), Value::String(name.clone()));
        }

        Value::Object(message)
    }

    fn content_value(&self) -> Value {
        let parts: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| match item {
                KernelContent::Text(text) => Some(text.text.clone()),
                KernelContent::FunctionResult(result) => Some(result.result_text()),
                KernelContent::FunctionCall(_) => None,
            })
            .collect();

        match parts.as_slice() {
            [] => Value::String(String::new()),
            [single] => Value::String(single.clone()),
            _ => Value::Array(
                parts
                    .into_iter()
                    .map(|text| json!({"type": "text", "text": text}))
                    .collect(),
            ),
        }
    }
}

fn tool_call_dict(call: &FunctionCallContent) -> Value {
    json!({
        "id": call.id.clone().unwrap_or_default(),
        "type": "function",
        "function": {
            "name": call.name.clone().unwrap_or_default(),
            "arguments": call.arguments.clone().unwrap_or_default(),
        }
    })
}

impl fmt::Display for ChatMessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content())
    }
}

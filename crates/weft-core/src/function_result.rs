//! Results returned to the model for a function call

use crate::content::{ContentType, expect_content_type};
use crate::name::split_qualified_name;
use crate::{FunctionCallContent, FunctionName, Metadata, Result};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Metadata key set on results that describe a failed call
pub const ERROR_METADATA_KEY: &str = "error";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "FunctionResultRecord")]
pub struct FunctionResultContent {
    /// Id of the call this result answers
    pub id: Option<String>,
    pub name: Option<String>,
    pub result: serde_json::Value,
    pub metadata: Metadata,
}

#[derive(Deserialize)]
struct FunctionResultRecord {
    content_type: Option<ContentType>,
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    result: serde_json::Value,
    #[serde(default)]
    metadata: Metadata,
}

impl TryFrom<FunctionResultRecord> for FunctionResultContent {
    type Error = String;

    fn try_from(record: FunctionResultRecord) -> std::result::Result<Self, Self::Error> {
        expect_content_type(record.content_type, ContentType::FunctionResult)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            result: record.result,
            metadata: record.metadata,
        })
    }
}

impl FunctionResultContent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, result: serde_json::Value) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            result,
            metadata: Metadata::new(),
        }
    }

    /// Answer `call` with `result`, carrying over its id and name
    pub fn from_function_call(call: &FunctionCallContent, result: serde_json::Value) -> Self {
        Self {
            id: call.id.clone(),
            name: call.name.clone(),
            result,
            metadata: Metadata::new(),
        }
    }

    /// Answer `call` with a failure description
    pub fn from_error(call: &FunctionCallContent, message: impl AsRef<str>) -> Self {
        let mut result = Self::from_function_call(
            call,
            serde_json::Value::String(format!("Error: {}", message.as_ref())),
        );
        result
            .metadata
            .insert(ERROR_METADATA_KEY.to_string(), serde_json::Value::Bool(true));
        result
    }

    pub fn is_error(&self) -> bool {
        self.metadata
            .get(ERROR_METADATA_KEY)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// The result as text; strings are returned without quotes
    pub fn result_text(&self) -> String {
        match &self.result {
            serde_json::Value::String(text) => text.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn split_name(&self) -> Result<(&str, &str)> {
        split_qualified_name(self.name.as_deref(), self.id.as_deref())
    }

    pub fn split_name_as_mapping(&self) -> Result<FunctionName> {
        let (plugin_name, function_name) = self.split_name()?;
        Ok(FunctionName::new(plugin_name, function_name))
    }
}

impl Serialize for FunctionResultContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.id.is_some()) + usize::from(self.name.is_some());
        let mut state = serializer.serialize_struct("FunctionResultContent", len)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("content_type", &ContentType::FunctionResult)?;
        match &self.id {
            Some(id) => state.serialize_field("id", id)?,
            None => state.skip_field("id")?,
        }
        match &self.name {
            Some(name) => state.serialize_field("name", name)?,
            None => state.skip_field("name")?,
        }
        state.serialize_field("result", &self.result)?;
        state.end()
    }
}

//! Plain text content

use crate::Metadata;
use crate::content::{ContentType, expect_content_type};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "TextRecord")]
pub struct TextContent {
    pub text: String,
    pub encoding: Option<String>,
    pub metadata: Metadata,
}

#[derive(Deserialize)]
struct TextRecord {
    content_type: Option<ContentType>,
    text: String,
    encoding: Option<String>,
    #[serde(default)]
    metadata: Metadata,
}

impl TryFrom<TextRecord> for TextContent {
    type Error = String;

    fn try_from(record: TextRecord) -> Result<Self, Self::Error> {
        expect_content_type(record.content_type, ContentType::Text)?;
        Ok(Self {
            text: record.text,
            encoding: record.encoding,
            metadata: record.metadata,
        })
    }
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}

impl fmt::Display for TextContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for TextContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.encoding.is_some());
        let mut state = serializer.serialize_struct("TextContent", len)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("content_type", &ContentType::Text)?;
        state.serialize_field("text", &self.text)?;
        match &self.encoding {
            Some(encoding) => state.serialize_field("encoding", encoding)?,
            None => state.skip_field("encoding")?,
        }
        state.end()
    }
}

//! Ordered conversation history

use crate::{AuthorRole, ChatMessageContent, FunctionResultContent, KernelContent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatHistory {
    pub messages: Vec<ChatMessageContent>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_message(content: impl Into<String>) -> Self {
        let mut history = Self::new();
        history.add_system_message(content);
        history
    }

    pub fn add_message(&mut self, message: ChatMessageContent) {
        self.messages.push(message);
    }

    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.add_message(ChatMessageContent::new(AuthorRole::System, content));
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.add_message(ChatMessageContent::new(AuthorRole::User, content));
    }

    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.add_message(ChatMessageContent::new(AuthorRole::Assistant, content));
    }

    /// Append a tool message holding the given results
    pub fn add_tool_message(&mut self, results: Vec<FunctionResultContent>) {
        let items = results.into_iter().map(KernelContent::from).collect();
        self.add_message(ChatMessageContent::with_items(AuthorRole::Tool, items));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessageContent> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessageContent> {
        self.messages.iter()
    }

    /// Provider encoding of the whole history, with multi-result tool
    /// messages expanded per call id
    pub fn to_dicts(&self) -> Vec<serde_json::Value> {
        self.messages
            .iter()
            .flat_map(ChatMessageContent::to_dicts)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ChatHistory {
    type Item = &'a ChatMessageContent;
    type IntoIter = std::slice::Iter<'a, ChatMessageContent>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

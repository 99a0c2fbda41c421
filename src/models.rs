//! Chat-completion wire types
//!
//! Request and response bodies for `POST /v1/chat/completions`. Only the
//! fields this client reads are modelled; unknown response fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    #[default]
    Assistant,
    /// Any role this client does not model (`tool`, `developer`, ...)
    #[serde(other)]
    Unknown,
}

/// A single role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of a chat-completion request
///
/// Always holds exactly one `user` message; fields are private so that
/// [`ChatCompletionRequest::from_prompt`] is the only way to build one.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

impl ChatCompletionRequest {
    /// Build a request carrying `prompt` verbatim as the sole user message
    pub fn from_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(prompt)],
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// One candidate reply
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
}

/// Token accounting reported by the API
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Body of a successful chat-completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Missing or `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or `None` when `choices` is empty
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.into_content())
    }
}

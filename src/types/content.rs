//! Content-related types: messages and their parts.

use serde::{Deserialize, Serialize};

/// A part of a content message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
    /// Inline binary data.
    InlineData {
        /// The inline data blob.
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    /// Any other part kind the provider may return (function calls, thought
    /// signatures). Kept so one unknown part never fails a whole response.
    Other(serde_json::Value),
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Creates an inline-data part from a base64 payload and its MIME type.
    pub fn inline_data(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Binary data blob with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// The MIME type of the data.
    pub mime_type: String,
    /// Base64-encoded binary data.
    pub data: String,
}

/// A content message with a role and parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Content {
    /// The role of the content author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts of the content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user message made of the given parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self { role: Some(Role::User), parts }
    }

    /// A model message made of the given parts.
    pub fn model(parts: Vec<Part>) -> Self {
        Self { role: Some(Role::Model), parts }
    }

    /// A role-less content used for system instructions.
    pub fn instruction(text: impl Into<String>) -> Self {
        Self { role: None, parts: vec![Part::text(text)] }
    }
}

/// The role of a message author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User role.
    User,
    /// Model role.
    Model,
}

//! Transcript entities

use serde::{Deserialize, Serialize};

/// Role of a message in the debate transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in the debate transcript (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Display name of the persona that produced an assistant message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            sender: None,
            content: content.into(),
        }
    }

    pub fn assistant(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            sender: Some(sender.into()),
            content: content.into(),
        }
    }

    /// Returns `true` if the message carries any visible text
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Sender label for display ("User" for user messages)
    pub fn speaker(&self) -> &str {
        self.sender.as_deref().unwrap_or("User")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("Welcome");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.speaker(), "User");
        assert!(msg.has_content());
    }

    #[test]
    fn test_assistant_message_without_text() {
        let msg = Message::assistant("Moderator", "");
        assert_eq!(msg.speaker(), "Moderator");
        assert!(!msg.has_content());
    }

    #[test]
    fn test_serialize_skips_missing_sender() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}

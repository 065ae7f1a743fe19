//! Message types
//!
//! Defines chat message structures and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Message typed by the user
    User,
    /// Message produced by the assistant, or by the session itself
    /// (greetings, failure notices, restoration notices)
    Assistant,
}

/// A single chat message. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Ordering key, strictly increasing within a session
    pub id: u64,
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub text: String,
    /// Timestamp when the message was created
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with the current time
    pub fn new(id: u64, role: Role, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Short clock label rendered next to the bubble
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::new(7, Role::User, "Hello, world!");
        assert_eq!(msg.id, 7);
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text, "Hello, world!");
    }

    #[test]
    fn test_role_equality() {
        assert_eq!(Role::User, Role::User);
        assert_ne!(Role::User, Role::Assistant);
    }

    #[test]
    fn test_time_label_format() {
        let msg = Message::new(1, Role::Assistant, "hi");
        let label = msg.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(3, Role::Assistant, "reply");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}

//! Conversation turn types exchanged with the chat client.
//!
//! The client owns the durable history and sends the whole turn list on every
//! request. Roles use the client's wire names: `human`, `ai` and `system`.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Who authored a turn in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "ai")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::Human => write!(f, "human"),
            ChatRole::Assistant => write!(f, "ai"),
            ChatRole::System => write!(f, "system"),
        }
    }
}

/// A single turn of the caller-owned conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn human(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Human,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_role_wire_names() {
        assert_eq!(serde_json::to_string(&ChatRole::Human).unwrap(), "\"human\"");
        assert_eq!(serde_json::to_string(&ChatRole::Assistant).unwrap(), "\"ai\"");
        assert_eq!(serde_json::to_string(&ChatRole::System).unwrap(), "\"system\"");
    }

    #[test]
    fn test_chat_turn_deserialize_client_payload() {
        let json = r#"[{"role":"human","text":"Hallo"},{"role":"ai","text":"Hoi!"}]"#;
        let turns: Vec<ChatTurn> = serde_json::from_str(json).unwrap();
        assert_eq!(turns, vec![ChatTurn::human("Hallo"), ChatTurn::assistant("Hoi!")]);
    }

    #[test]
    fn test_chat_turn_rejects_unknown_role() {
        let json = r#"{"role":"robot","text":"beep"}"#;
        assert!(serde_json::from_str::<ChatTurn>(json).is_err());
    }
}

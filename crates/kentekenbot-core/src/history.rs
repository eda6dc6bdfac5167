//! Conversion of the client turn list into provider messages.

use kentekenbot_types::chat::{ChatRole, ChatTurn};
use kentekenbot_types::llm::Message;

/// The client conversation rendered as provider messages.
///
/// One message per turn, in the original order. The index of the last Human
/// turn is tracked because that turn is the one scanned for a plate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    messages: Vec<Message>,
    last_human: Option<usize>,
}

impl ConversationHistory {
    /// Map every turn onto its provider role.
    ///
    /// Assistant turns become assistant messages only; they are never echoed
    /// back as additional system context.
    pub fn from_turns(turns: &[ChatTurn]) -> Self {
        let mut last_human = None;
        let messages = turns
            .iter()
            .enumerate()
            .map(|(index, turn)| match turn.role {
                ChatRole::Human => {
                    last_human = Some(index);
                    Message::user(turn.text.clone())
                }
                ChatRole::Assistant => Message::assistant(turn.text.clone()),
                ChatRole::System => Message::system(turn.text.clone()),
            })
            .collect();

        Self {
            messages,
            last_human,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Text of the most recent Human turn, if any.
    pub fn last_human_text(&self) -> Option<&str> {
        self.last_human
            .and_then(|index| self.messages.get(index))
            .map(|message| message.content.as_str())
    }

    /// Append an enrichment turn after the client history.
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.messages.push(Message::system(text));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

//! Outbound payload of a conversation turn.
//!
//! Field names follow the chat widget's contract: `response.kwargs.content`
//! carries the reply and `chatHistory` the updated turn list.

use serde::Serialize;

use kentekenbot_types::chat::ChatTurn;
use kentekenbot_types::usage::TokenUsage;
use kentekenbot_types::vehicle::EnrichmentReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantResponse {
    pub kwargs: ResponseContent,
}

/// Result of one handled turn.
///
/// `chat_history` holds the client turns plus any injected enrichment turn.
/// The reply itself is not part of it; use [`ConversationResponse::full_history`]
/// for the list including the new Assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub response: AssistantResponse,
    pub chat_history: Vec<ChatTurn>,
    pub token_usage: TokenUsage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<EnrichmentReport>,
}

impl ConversationResponse {
    pub fn reply(&self) -> &str {
        &self.response.kwargs.content
    }

    /// Updated turn list with the reply appended as an Assistant turn.
    pub fn full_history(&self) -> Vec<ChatTurn> {
        let mut turns = self.chat_history.clone();
        turns.push(ChatTurn::assistant(self.reply()));
        turns
    }
}

pub fn assemble_response(
    chat_history: Vec<ChatTurn>,
    reply: String,
    token_usage: TokenUsage,
    enrichment: Option<EnrichmentReport>,
) -> ConversationResponse {
    ConversationResponse {
        response: AssistantResponse {
            kwargs: ResponseContent { content: reply },
        },
        chat_history,
        token_usage,
        enrichment,
    }
}

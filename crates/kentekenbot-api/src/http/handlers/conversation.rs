//! Conversation turn endpoint.
//!
//! POST /api/postData - Run one turn of the vehicle chat.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::Instrument;

use kentekenbot_core::conversation::assembler::ConversationResponse;
use kentekenbot_types::chat::ChatTurn;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body: the whole client-held conversation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDataRequest {
    pub chat_history: Vec<ChatTurn>,
}

/// POST /api/postData - Enrich, invoke the model, account usage.
pub async fn post_data(
    State(state): State<AppState>,
    payload: Result<Json<PostDataRequest>, JsonRejection>,
) -> Result<Json<ConversationResponse>, AppError> {
    let Json(request) = payload?;
    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("post_data", %request_id, turns = request.chat_history.len());

    let response = state
        .conversation
        .handle_turn(request.chat_history)
        .instrument(span)
        .await?;

    Ok(Json(response))
}

//! Cumulative token usage endpoints.

use axum::extract::State;
use axum::Json;

use kentekenbot_types::usage::TokenUsage;

use crate::state::AppState;

/// GET /api/tokenUsage - Current cumulative usage.
pub async fn get_token_usage(State(state): State<AppState>) -> Json<TokenUsage> {
    Json(state.conversation.usage().snapshot())
}

/// DELETE /api/tokenUsage - Zero the counter.
pub async fn reset_token_usage(State(state): State<AppState>) -> Json<TokenUsage> {
    let usage = state.conversation.usage().reset();
    tracing::info!("token usage counter reset");
    Json(usage)
}

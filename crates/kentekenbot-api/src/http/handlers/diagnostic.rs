//! Diagnostic smoke test.
//!
//! GET /api/testchain - Push a fixed plate question through registry and
//! model. Usage of this call is not added to the shared counter.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use kentekenbot_core::conversation::service::SmokeTestReport;

use crate::http::error::AppError;
use crate::state::AppState;

pub const TESTCHAIN_QUESTION: &str = "Wat is de uitvoering voor voertuig met kenteken 8XBR35";

#[derive(Debug, Serialize)]
pub struct TestChainResponse {
    pub result: SmokeTestReport,
}

pub async fn test_chain(State(state): State<AppState>) -> Result<Json<TestChainResponse>, AppError> {
    let result = state.conversation.smoke_test(TESTCHAIN_QUESTION).await?;
    Ok(Json(TestChainResponse { result }))
}

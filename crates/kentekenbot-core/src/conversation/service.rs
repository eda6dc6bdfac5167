//! Conversation service orchestrating one turn end to end.
//!
//! ConversationService composes the pipeline: build the provider history,
//! scan the last Human turn for a plate, enrich, invoke the model once,
//! account the usage and assemble the response. Enrichment always completes
//! before invocation because its output is part of the model input.

use serde::Serialize;
use tracing::{debug, info};

use kentekenbot_types::chat::ChatTurn;
use kentekenbot_types::error::ConversationError;
use kentekenbot_types::vehicle::EnrichmentStatus;

use crate::conversation::assembler::{ConversationResponse, assemble_response};
use crate::conversation::invoker::ConversationInvoker;
use crate::conversation::prompt::{DEFAULT_SYSTEM_PREAMBLE, assemble_messages};
use crate::enrich::{Enrichment, VehicleDataEnricher};
use crate::history::ConversationHistory;
use crate::plate::extract_plate;
use crate::registry::VehicleRegistry;
use crate::usage::TokenAccountant;

/// Outcome of a diagnostic run through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmokeTestReport {
    pub question: String,
    pub answer: String,
    pub plate: Option<String>,
    pub status: Option<EnrichmentStatus>,
}

/// Handles conversation turns against a vehicle registry and a model.
///
/// Stateless between requests apart from the shared [`TokenAccountant`].
pub struct ConversationService<R: VehicleRegistry> {
    enricher: VehicleDataEnricher<R>,
    invoker: ConversationInvoker,
    accountant: TokenAccountant,
    preamble: String,
}

impl<R: VehicleRegistry> ConversationService<R> {
    pub fn new(enricher: VehicleDataEnricher<R>, invoker: ConversationInvoker) -> Self {
        Self {
            enricher,
            invoker,
            accountant: TokenAccountant::new(),
            preamble: DEFAULT_SYSTEM_PREAMBLE.to_string(),
        }
    }

    /// Replace the system preamble sent ahead of every history.
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    pub fn usage(&self) -> &TokenAccountant {
        &self.accountant
    }

    /// Run one conversation turn.
    ///
    /// An empty turn list is rejected before any outbound call. Registry
    /// failures never fail the turn; model failures always do, and leave the
    /// usage counter untouched.
    pub async fn handle_turn(
        &self,
        mut turns: Vec<ChatTurn>,
    ) -> Result<ConversationResponse, ConversationError> {
        if turns.is_empty() {
            return Err(ConversationError::InvalidRequest(
                "chatHistory bevat geen berichten".to_string(),
            ));
        }

        let (history, enrichment) = self.prepare(&mut turns).await;
        let messages = assemble_messages(&self.preamble, &history);
        let invocation = self.invoker.invoke(messages).await?;
        let token_usage = self.accountant.record(invocation.delta);

        info!(
            turns = turns.len(),
            total_tokens = token_usage.total_tokens(),
            "conversation turn handled"
        );

        Ok(assemble_response(
            turns,
            invocation.reply,
            token_usage,
            enrichment.map(|e| e.report()),
        ))
    }

    /// Send a single fixed question through the pipeline.
    ///
    /// Exercises the registry and the model like a real turn but does not
    /// touch the usage counter.
    pub async fn smoke_test(&self, question: &str) -> Result<SmokeTestReport, ConversationError> {
        let mut turns = vec![ChatTurn::human(question)];
        let (history, enrichment) = self.prepare(&mut turns).await;
        let messages = assemble_messages(&self.preamble, &history);
        let invocation = self.invoker.invoke(messages).await?;

        Ok(SmokeTestReport {
            question: question.to_string(),
            answer: invocation.reply,
            plate: enrichment.as_ref().map(|e| e.plate.clone()),
            status: enrichment.as_ref().map(|e| e.outcome.status()),
        })
    }

    /// Build the provider history and apply enrichment to both it and `turns`.
    async fn prepare(&self, turns: &mut Vec<ChatTurn>) -> (ConversationHistory, Option<Enrichment>) {
        let mut history = ConversationHistory::from_turns(turns);

        let Some(plate) = history.last_human_text().and_then(extract_plate) else {
            debug!("no plate candidate in last human turn");
            return (history, None);
        };
        debug!(plate = %plate, "plate candidate detected");

        let enrichment = self.enricher.enrich(&plate).await;
        if let Some(turn) = &enrichment.turn {
            history.push_system(turn.text.clone());
            turns.push(turn.clone());
        }

        (history, Some(enrichment))
    }
}

//! Conversation pipeline and port trait definitions for Kentekenbot.
//!
//! This crate defines the "ports" (`LlmProvider`, `VehicleRegistry`) that the
//! infrastructure layer implements, plus the plate extraction, enrichment,
//! history building and usage accounting that make up a conversation turn.
//! It depends only on `kentekenbot-types` -- never on `kentekenbot-infra` or
//! any HTTP client.

pub mod conversation;
pub mod enrich;
pub mod history;
pub mod llm;
pub mod plate;
pub mod registry;
pub mod usage;

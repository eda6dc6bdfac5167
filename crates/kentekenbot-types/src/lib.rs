//! Shared domain types for Kentekenbot.
//!
//! This crate contains the core domain types used across the workspace:
//! conversation turns, LLM request/response shapes, vehicle registry lookup
//! outcomes, token usage, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod usage;
pub mod vehicle;

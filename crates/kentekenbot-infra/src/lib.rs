//! Infrastructure layer for Kentekenbot.
//!
//! Contains implementations of the port traits defined in `kentekenbot-core`:
//! the OpenAI / Azure OpenAI chat provider, the RDW open-data registry client,
//! and the configuration loader that wires them from `kentekenbot.toml` plus
//! environment overrides.

pub mod config;
pub mod llm;
pub mod registry;

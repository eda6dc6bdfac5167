//! The per-request conversation pipeline.

pub mod assembler;
pub mod invoker;
pub mod prompt;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

//! HTTP request handlers for the REST API.

pub mod conversation;
pub mod diagnostic;
pub mod usage;

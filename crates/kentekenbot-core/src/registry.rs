//! Vehicle registry port.
//!
//! The pipeline only needs one operation from the registry: look a plate up
//! and say how it went. Implementations live in kentekenbot-infra
//! (e.g., `RdwRegistryClient`).

use kentekenbot_types::vehicle::LookupOutcome;

/// A vehicle registry that can be queried by plate.
///
/// Implementations must not fail: transport problems are reported as
/// [`LookupOutcome::TransportError`] so the caller decides how to degrade.
pub trait VehicleRegistry: Send + Sync {
    fn lookup(&self, plate: &str) -> impl std::future::Future<Output = LookupOutcome> + Send;
}

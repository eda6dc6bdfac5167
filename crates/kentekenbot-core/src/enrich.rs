//! Vehicle data enrichment.
//!
//! Turns a registry lookup for a detected plate into a synthetic System turn
//! that is injected both into the model input and into the history returned
//! to the client.

use tracing::{info, warn};

use kentekenbot_types::chat::ChatTurn;
use kentekenbot_types::vehicle::{
    EnrichmentReport, LookupOutcome, RegistryErrorPolicy, VehicleRecord,
};

use crate::registry::VehicleRegistry;

/// System turn injected when the registry has nothing for the plate.
pub const NO_DATA_MESSAGE: &str = "Geen informatie gevonden voor dit kenteken.";

/// System turn text for a registry hit: the plate plus the record verbatim.
pub fn found_message(plate: &str, record: &VehicleRecord) -> String {
    format!(
        "Informatie gevonden voor kenteken {plate}: {}",
        record.to_compact_json()
    )
}

/// What enrichment produced for one plate.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub plate: String,
    pub outcome: LookupOutcome,
    /// The turn to inject, if any.
    pub turn: Option<ChatTurn>,
}

impl Enrichment {
    pub fn report(&self) -> EnrichmentReport {
        EnrichmentReport {
            plate: self.plate.clone(),
            status: self.outcome.status(),
        }
    }
}

/// Render a lookup outcome into the turn to inject.
///
/// `NotFound` always yields the fixed "no data" turn; a transport error
/// follows `policy`.
pub fn render_outcome(
    plate: &str,
    outcome: &LookupOutcome,
    policy: RegistryErrorPolicy,
) -> Option<ChatTurn> {
    match outcome {
        LookupOutcome::Found(record) => Some(ChatTurn::system(found_message(plate, record))),
        LookupOutcome::NotFound => Some(ChatTurn::system(NO_DATA_MESSAGE)),
        LookupOutcome::TransportError(_) => match policy {
            RegistryErrorPolicy::NoData => Some(ChatTurn::system(NO_DATA_MESSAGE)),
            RegistryErrorPolicy::Skip => None,
        },
    }
}

/// Looks plates up in a [`VehicleRegistry`] and renders the result.
pub struct VehicleDataEnricher<R: VehicleRegistry> {
    registry: R,
    on_error: RegistryErrorPolicy,
}

impl<R: VehicleRegistry> VehicleDataEnricher<R> {
    pub fn new(registry: R, on_error: RegistryErrorPolicy) -> Self {
        Self { registry, on_error }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Look `plate` up once. Never fails; see [`render_outcome`].
    pub async fn enrich(&self, plate: &str) -> Enrichment {
        let outcome = self.registry.lookup(plate).await;

        match &outcome {
            LookupOutcome::Found(_) => info!(plate, "vehicle data found"),
            LookupOutcome::NotFound => info!(plate, "no vehicle data for plate"),
            LookupOutcome::TransportError(reason) => warn!(
                plate,
                reason = %reason,
                policy = ?self.on_error,
                "vehicle registry unavailable, continuing without vehicle data"
            ),
        }

        let turn = render_outcome(plate, &outcome, self.on_error);
        Enrichment {
            plate: plate.to_string(),
            outcome,
            turn,
        }
    }
}

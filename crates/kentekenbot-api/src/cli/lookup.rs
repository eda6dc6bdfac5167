//! `kbot lookup` -- one registry query, printed as-is.

use std::time::Duration;

use anyhow::Result;
use console::style;

use kentekenbot_core::plate::extract_plate;
use kentekenbot_core::registry::VehicleRegistry;
use kentekenbot_infra::registry::rdw::RdwRegistryClient;
use kentekenbot_types::config::RegistryConfig;
use kentekenbot_types::vehicle::LookupOutcome;

/// Normalize `input` the same way chat messages are scanned; fall back to
/// stripping hyphens when the extractor does not recognize it.
fn normalize_plate(input: &str) -> String {
    extract_plate(input).unwrap_or_else(|| input.replace('-', "").to_uppercase())
}

pub async fn lookup(config: &RegistryConfig, input: &str, json: bool) -> Result<()> {
    let plate = normalize_plate(input);
    if plate.is_empty() {
        anyhow::bail!("'{input}' does not contain a plate");
    }

    let client = RdwRegistryClient::new(
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    let outcome = client.lookup(&plate).await;

    if json {
        let (record, error) = match &outcome {
            LookupOutcome::Found(record) => (Some(record.0.clone()), None),
            LookupOutcome::NotFound => (None, None),
            LookupOutcome::TransportError(reason) => (None, Some(reason.clone())),
        };
        let out = serde_json::json!({
            "plate": plate,
            "status": outcome.status(),
            "record": record,
            "error": error,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    match outcome {
        LookupOutcome::Found(record) => {
            println!("  {} {}", style("✓").green(), style(&plate).cyan().bold());
            println!();
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        LookupOutcome::NotFound => {
            println!("  {} no registry data for {}", style("✗").yellow(), style(&plate).cyan());
        }
        LookupOutcome::TransportError(reason) => {
            println!("  {} registry unavailable: {reason}", style("✗").red());
        }
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("8-xbr-35"), "8XBR35");
        assert_eq!(normalize_plate("AB-12-CD"), "AB12CD");
        assert_eq!(normalize_plate("----"), "");
    }
}

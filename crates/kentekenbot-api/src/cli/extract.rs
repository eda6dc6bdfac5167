//! `kbot extract` -- run the plate extractor on a piece of text.

use anyhow::Result;
use console::style;

use kentekenbot_core::plate::extract_plate;

pub fn extract(text: &str, json: bool) -> Result<()> {
    let plate = extract_plate(text);

    if json {
        let out = serde_json::json!({ "text": text, "plate": plate });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match plate {
        Some(plate) => println!("  {} {}", style("✓").green(), style(plate).cyan().bold()),
        None => println!("  {} no plate detected", style("✗").red()),
    }
    Ok(())
}

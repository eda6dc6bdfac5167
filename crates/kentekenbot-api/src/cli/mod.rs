//! CLI command definitions for the `kbot` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the REST API;
//! `extract` and `lookup` exercise the plate extractor and the registry on
//! their own.

pub mod extract;
pub mod lookup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kentekenbot_infra::config::DEFAULT_CONFIG_FILE;

/// Vehicle chat backend with live RDW enrichment.
#[derive(Parser)]
#[command(name = "kbot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,

        /// Export spans to stdout via OpenTelemetry.
        #[arg(long)]
        otel: bool,
    },

    /// Show which plate, if any, would be detected in a message.
    Extract {
        /// Free text to scan.
        text: String,
    },

    /// Query the vehicle registry for a single plate.
    Lookup {
        /// Plate, with or without hyphens.
        plate: String,
    },
}

//! # aqara-transform
//!
//! Command-line front end for the AqaraHub value transforms.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration
//! - Install the `tracing` subscriber (stderr, so stdout carries only
//!   transform output)
//! - Apply a single transform, or route a message through the configured
//!   bindings, and print the result
//!
//! ## Dependency rule
//! This is the wiring layer — no conversion logic belongs here.

mod config;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aqara_transforms_app::binding::BindingTable;
use aqara_transforms_app::catalogue::TransformKind;
use aqara_transforms_app::transform::Transform;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Convert values between AqaraHub payloads and openHAB items
#[derive(Parser)]
#[command(name = "aqara-transform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "aqara-transform.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one transform to a single input
    Apply {
        /// Transform name (see `list`)
        transform: TransformKind,

        /// Input value; read from stdin when omitted
        input: Option<String>,
    },

    /// List the available transforms
    List,

    /// Route an inbound bridge message through the configured bindings
    Route {
        /// Topic the message arrived on
        #[arg(short, long)]
        topic: String,

        /// Message payload; read from stdin when omitted
        payload: Option<String>,
    },

    /// Turn an item command into the bridge message to publish
    Send {
        /// Item the command is addressed to
        #[arg(short, long)]
        item: String,

        /// Command text; read from stdin when omitted
        command: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Apply { transform, input } => {
            let input = read_input(input)?;
            if let Some(output) = transform.apply(&input)? {
                println!("{output}");
            }
        }
        Commands::List => {
            for kind in TransformKind::ALL {
                println!("{}\t{}", kind.name(), kind.direction());
            }
        }
        Commands::Route { topic, payload } => {
            let table = binding_table(&config, &cli.config)?;
            let payload = read_input(payload)?;
            for update in table.route_inbound(&topic, &payload)? {
                match update.state {
                    Some(state) => println!("{}\t{state}", update.item),
                    None => tracing::debug!(item = %update.item, "no state update"),
                }
            }
        }
        Commands::Send { item, command } => {
            let table = binding_table(&config, &cli.config)?;
            let command = read_input(command)?;
            if let Some(message) = table.route_outbound(&item, &command)? {
                println!("{}\t{}", message.topic, message.payload);
            }
        }
    }

    Ok(())
}

fn binding_table(config: &Config, path: &Path) -> Result<BindingTable> {
    let table = config.binding_table()?;
    if table.is_empty() {
        tracing::warn!(config = %path.display(), "no bindings configured");
    }
    Ok(table)
}

/// Use the argument when given, otherwise stdin without its trailing
/// newline.
fn read_input(arg: Option<String>) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

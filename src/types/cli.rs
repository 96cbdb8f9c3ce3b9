//! Command line interface for the EPCIS document generator
//!
//! This module contains the clap argument structure and its resolution into
//! the settings the binary acts on.

use chrono::{DateTime, SubsecRound, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use super::config::ConfigError;
use crate::generation::GenerationOptions;
use crate::hierarchy::{sscc_serial_length, Hierarchy, SerialPool};

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "epcis-generator",
    version,
    about = "EPCIS Generator - Builds GS1 EPCIS 1.2 documents for DSCSA shipments",
    long_about = "Builds a GS1 EPCIS 1.2 XML document from a packaging configuration and serial number pools: commissioning events for every packaging level, aggregation events for every parent container and a closing shipping event.

EXAMPLES:
    # Generate a configuration template
    epcis-generator --print-config > packaging.json

    # Validate configuration and serial pool sizes without generating
    epcis-generator --config packaging.json --serials serials.json --dry-run

    # Write epcis-{sender}-{receiver}-{YYMMDD}.xml into ./out
    epcis-generator --config packaging.json --serials serials.json --output-dir out

    # Try a configuration with random serials, printing the document
    epcis-generator --config packaging.json --synthesize-serials --seed 7 --stdout

CONFIGURATION:
    Packaging configuration and serial pools are JSON files. Field names may be
    snake_case or camelCase. Serial pools hold the arrays sscc, case,
    inner_case and item, in packing order."
)]
pub struct CliArgs {
    /// Packaging configuration file path (JSON format)
    #[arg(short, long, help = "Packaging configuration file (JSON)")]
    pub config: Option<String>,

    /// Serial pool file path (JSON format)
    #[arg(
        short,
        long,
        help = "Serial pool file (JSON)",
        long_help = "Path to a JSON file with the arrays sscc, case, inner_case and item. Each array must hold exactly as many serials as the packaging configuration implies."
    )]
    pub serials: Option<String>,

    /// Generate random serials instead of reading a pool file
    #[arg(long, conflicts_with = "serials", help = "Generate random serial numbers")]
    pub synthesize_serials: bool,

    /// Random seed for synthesized serials
    #[arg(long, requires = "synthesize_serials", help = "Random seed for synthesized serials")]
    pub seed: Option<u64>,

    /// Directory the document is written to
    #[arg(short, long, help = "Output directory (default: current directory)")]
    pub output_dir: Option<String>,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output_dir", help = "Print the document to stdout")]
    pub stdout: bool,

    /// Read point URN used when the shipper has no SGLN
    #[arg(long, help = "Fallback read point URN")]
    pub read_point: Option<String>,

    /// Business location URN used when the shipper has no SGLN
    #[arg(long, help = "Fallback business location URN")]
    pub biz_location: Option<String>,

    /// Time of the first event
    #[arg(
        long,
        value_parser = parse_timestamp,
        help = "Base event timestamp (RFC 3339)",
        long_help = "Time of the first event, e.g. 2025-06-01T08:00:00Z. Each later event is one second after the previous one. Default: now"
    )]
    pub timestamp: Option<DateTime<Utc>>,

    /// SBDH instance identifier
    #[arg(long, help = "Document instance identifier (default: random UUID)")]
    pub instance_id: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate inputs without generating a document
    #[arg(long, help = "Validate configuration and serial pools without generating")]
    pub dry_run: bool,

    /// Print a template configuration and exit
    #[arg(long, help = "Print a template packaging configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Errors resolving command line arguments
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No configuration file was given
    #[error("A packaging configuration is required (--config <path>)")]
    MissingConfig,

    /// Neither a serial pool nor synthesis was requested
    #[error("A serial pool is required (--serials <path> or --synthesize-serials)")]
    MissingSerials,
}

/// Where serial numbers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialSource {
    /// A JSON pool file
    File(PathBuf),
    /// Random serials, optionally seeded
    Synthesized {
        /// Seed for reproducible pools
        seed: Option<u64>,
    },
}

impl SerialSource {
    /// Load or synthesize the pool for a hierarchy
    ///
    /// Synthesized SSCC serials are sized to fill an 18-digit SSCC for the
    /// given shipper prefix.
    pub fn load(&self, hierarchy: &Hierarchy, shipper_prefix: &str) -> Result<SerialPool, ConfigError> {
        match self {
            SerialSource::File(path) => SerialPool::from_file(path),
            SerialSource::Synthesized { seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                Ok(SerialPool::synthesize(hierarchy, sscc_serial_length(shipper_prefix), &mut rng))
            }
        }
    }
}

/// Where the document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file with the conventional name inside this directory
    Directory(PathBuf),
}

/// Settings resolved from command line arguments
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Packaging configuration file
    pub config_path: PathBuf,
    /// Serial number source
    pub serial_source: SerialSource,
    /// Output destination
    pub output: OutputTarget,
    /// Generation options
    pub options: GenerationOptions,
    /// Only validate inputs
    pub dry_run: bool,
}

impl RunSettings {
    /// Resolve parsed arguments into run settings
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, CliError> {
        let config_path = args.config.as_ref().map(PathBuf::from).ok_or(CliError::MissingConfig)?;

        let serial_source = match (&args.serials, args.synthesize_serials) {
            (Some(path), _) => SerialSource::File(PathBuf::from(path)),
            (None, true) => SerialSource::Synthesized { seed: args.seed },
            (None, false) => return Err(CliError::MissingSerials),
        };

        let output = if args.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::Directory(PathBuf::from(args.output_dir.as_deref().unwrap_or(".")))
        };

        let mut options = GenerationOptions::new()
            .with_read_point(args.read_point.clone())
            .with_biz_location(args.biz_location.clone());
        if let Some(timestamp) = args.timestamp {
            options = options.with_base_timestamp(timestamp);
        }
        if let Some(instance_id) = &args.instance_id {
            options = options.with_instance_identifier(instance_id.clone());
        }

        Ok(Self { config_path, serial_source, output, options, dry_run: args.dry_run })
    }
}

/// Parse an RFC 3339 timestamp into whole-second UTC
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc).trunc_subsecs(0))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", value, e))
}

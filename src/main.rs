// EPCIS Generator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/dscsa-epcis-generator --print-config > packaging.json
// ```
//
// Then generate a document:
//
// ```console
// $ ./target/release/dscsa-epcis-generator --config packaging.json --synthesize-serials --output-dir out --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use dscsa_epcis_generator::generation::{EpcisGenerator, LoggingConfig, LoggingError, LoggingGuard};
use dscsa_epcis_generator::types::{CliArgs, OutputTarget, PackagingConfiguration, RunSettings};
use std::fs;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match PackagingConfiguration::template().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize template configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let _logging_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        error!("Document generation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(args: &CliArgs) -> Result<LoggingGuard, LoggingError> {
    if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let settings = RunSettings::from_cli_args(args)?;

    let config = PackagingConfiguration::from_file(&settings.config_path).with_context(|| {
        format!("Failed to load configuration from {}", settings.config_path.display())
    })?;
    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");

    let generator = EpcisGenerator::new(&config);
    let hierarchy = generator.hierarchy();

    let serials = settings
        .serial_source
        .load(hierarchy, &config.effective_shipper().company_prefix)
        .context("Failed to load serial pool")?;
    serials.check_sizes(hierarchy).context("Serial pool does not match the configuration")?;
    info!("Serial pool holds {} serials for {}", serials.total(), hierarchy.topology());

    if settings.dry_run {
        eprintln!("Configuration and serial pool validation successful!");
        eprintln!("Dry run mode - no document will be generated.");
        print_hierarchy_summary(&config);
        return Ok(());
    }

    let document = generator.generate(&serials, &settings.options)?;
    let xml = document.to_xml()?;

    match &settings.output {
        OutputTarget::Stdout => print!("{}", xml),
        OutputTarget::Directory(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
            let path = dir.join(document.filename());
            fs::write(&path, &xml)
                .with_context(|| format!("Failed to write document to {}", path.display()))?;
            info!("Document written to {}", path.display());
            eprintln!("Document written to: {}", path.display());
        }
    }

    eprintln!("{}", document.statistics().detailed_breakdown());
    Ok(())
}

/// Print the packaging hierarchy a configuration describes
fn print_hierarchy_summary(config: &PackagingConfiguration) {
    let generator = EpcisGenerator::new(config);
    let hierarchy = generator.hierarchy();
    eprintln!("Hierarchy: {}", hierarchy.topology());
    eprintln!("  SSCCs: {}", hierarchy.total_sscc());
    eprintln!("  Cases: {}", hierarchy.total_cases());
    eprintln!("  Inner Cases: {}", hierarchy.total_inner_cases());
    eprintln!("  Items: {}", hierarchy.total_items());
    eprintln!("  Aggregation events: {}", hierarchy.aggregation_event_count());
}

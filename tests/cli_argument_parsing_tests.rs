//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! resolved into run settings.

use chrono::{TimeZone, Utc};
use clap::Parser;
use dscsa_epcis_generator::types::{CliArgs, CliError, OutputTarget, RunSettings, SerialSource};
use std::path::PathBuf;

/// Test a typical invocation with a pool file
#[test]
fn test_basic_invocation() {
    let args = CliArgs::try_parse_from([
        "epcis-generator",
        "--config",
        "packaging.json",
        "--serials",
        "serials.json",
        "--output-dir",
        "out",
    ])
    .unwrap();

    assert_eq!(args.config.as_deref(), Some("packaging.json"));
    assert_eq!(args.serials.as_deref(), Some("serials.json"));
    assert!(!args.dry_run);

    let settings = RunSettings::from_cli_args(&args).unwrap();
    assert_eq!(settings.config_path, PathBuf::from("packaging.json"));
    assert_eq!(settings.serial_source, SerialSource::File(PathBuf::from("serials.json")));
    assert_eq!(settings.output, OutputTarget::Directory(PathBuf::from("out")));
}

/// Test short flags
#[test]
fn test_short_flags() {
    let args =
        CliArgs::try_parse_from(["epcis-generator", "-c", "a.json", "-s", "b.json", "-o", "dir", "-v"])
            .unwrap();

    assert_eq!(args.config.as_deref(), Some("a.json"));
    assert_eq!(args.serials.as_deref(), Some("b.json"));
    assert_eq!(args.output_dir.as_deref(), Some("dir"));
    assert!(args.verbose);
    assert!(!args.debug);
}

/// Test defaults when only required inputs are given
#[test]
fn test_default_output_directory() {
    let args = CliArgs::try_parse_from([
        "epcis-generator",
        "--config",
        "packaging.json",
        "--synthesize-serials",
    ])
    .unwrap();

    let settings = RunSettings::from_cli_args(&args).unwrap();
    assert_eq!(settings.output, OutputTarget::Directory(PathBuf::from(".")));
    assert_eq!(settings.serial_source, SerialSource::Synthesized { seed: None });
    assert!(settings.options.read_point.is_none());
    assert!(!settings.options.instance_identifier.is_empty());
}

/// Test generation options taken from the command line
#[test]
fn test_generation_options() {
    let args = CliArgs::try_parse_from([
        "epcis-generator",
        "--config",
        "packaging.json",
        "--synthesize-serials",
        "--seed",
        "42",
        "--stdout",
        "--timestamp",
        "2025-06-01T08:00:00Z",
        "--instance-id",
        "doc-7",
        "--read-point",
        "urn:epc:id:sgln:0999888.00001.0",
        "--biz-location",
        "urn:epc:id:sgln:0999888.00001.0",
    ])
    .unwrap();

    let settings = RunSettings::from_cli_args(&args).unwrap();
    assert_eq!(settings.serial_source, SerialSource::Synthesized { seed: Some(42) });
    assert_eq!(settings.output, OutputTarget::Stdout);
    assert_eq!(settings.options.base_timestamp, Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap());
    assert_eq!(settings.options.instance_identifier, "doc-7");
    assert_eq!(settings.options.read_point.as_deref(), Some("urn:epc:id:sgln:0999888.00001.0"));
    assert_eq!(settings.options.biz_location.as_deref(), Some("urn:epc:id:sgln:0999888.00001.0"));
}

/// Test rejected argument combinations
#[test]
fn test_conflicting_arguments() {
    // A pool file and synthesis are mutually exclusive
    assert!(CliArgs::try_parse_from([
        "epcis-generator",
        "--serials",
        "serials.json",
        "--synthesize-serials",
    ])
    .is_err());

    // Stdout and an output directory are mutually exclusive
    assert!(CliArgs::try_parse_from(["epcis-generator", "--stdout", "--output-dir", "out"]).is_err());

    // A seed only makes sense for synthesized serials
    assert!(CliArgs::try_parse_from(["epcis-generator", "--seed", "1"]).is_err());

    // Timestamps must be RFC 3339
    assert!(CliArgs::try_parse_from(["epcis-generator", "--timestamp", "June 1st"]).is_err());
}

/// Test missing inputs are reported when resolving settings
#[test]
fn test_missing_inputs() {
    let args = CliArgs::try_parse_from(["epcis-generator", "--serials", "serials.json"]).unwrap();
    assert!(matches!(RunSettings::from_cli_args(&args), Err(CliError::MissingConfig)));

    let args = CliArgs::try_parse_from(["epcis-generator", "--config", "packaging.json"]).unwrap();
    assert!(matches!(RunSettings::from_cli_args(&args), Err(CliError::MissingSerials)));
}

/// Test special flags parse without other inputs
#[test]
fn test_special_flags() {
    let args = CliArgs::try_parse_from(["epcis-generator", "--print-config"]).unwrap();
    assert!(args.print_config);

    let args = CliArgs::try_parse_from([
        "epcis-generator",
        "--config",
        "packaging.json",
        "--serials",
        "serials.json",
        "--dry-run",
        "--debug",
    ])
    .unwrap();
    assert!(args.dry_run);
    assert!(args.debug);
    assert!(RunSettings::from_cli_args(&args).unwrap().dry_run);
}

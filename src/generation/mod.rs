//! Document generation entry points
//!
//! This module contains the generation engine, its error taxonomy, statistics
//! and logging configuration.
//!
//! # Overview
//!
//! - **EpcisGenerator**: resolves the hierarchy and builds a typed document
//! - **EpcisDocument**: header, master data and events; renders to XML
//! - **generate**: one-call XML generation
//! - **GenerationError**: configuration, serial pool and assembly failures
//! - **DocumentStatistics**: event and EPC counts per document
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use dscsa_epcis_generator::generation::*;
//! use dscsa_epcis_generator::hierarchy::*;
//! use dscsa_epcis_generator::types::*;
//!
//! let config = PackagingConfiguration::template();
//! let generator = EpcisGenerator::new(&config);
//!
//! let pool = SerialPool {
//!     sscc: vec!["000000001".to_string()],
//!     case: vec!["C1".to_string(), "C2".to_string()],
//!     item: (1..=24).map(|i| format!("I{}", i)).collect(),
//!     ..Default::default()
//! };
//! pool.check_sizes(generator.hierarchy())?;
//!
//! let options = GenerationOptions::new()
//!     .with_base_timestamp(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
//! let document = generator.generate(&pool, &options)?;
//! assert_eq!(document.statistics().aggregation_events, 3);
//!
//! let xml = document.to_xml()?;
//! assert!(xml.contains("schemaVersion=\"1.2\""));
//! # Ok::<(), GenerationError>(())
//! ```

pub mod engine;
pub mod error;
pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use statistics::*;

//! DSCSA EPCIS Generator
//!
//! Builds GS1 EPCIS 1.2 XML documents describing the serialization and
//! shipment of a pharmaceutical packaging hierarchy, for DSCSA
//! track-and-trace exchange with trading partners.
//!
//! # Overview
//!
//! Given a packaging configuration (how items nest into inner cases, cases and
//! SSCC logistics units) and a pool of serial numbers for each level, the
//! generator produces one document containing:
//!
//! - **Master data**: EPCClass elements for each trade-item level and Location
//!   elements for the sender, receiver and shipper
//! - **Commissioning events**: one ObjectEvent per packaging level, bottom-up
//! - **Aggregation events**: one AggregationEvent per parent container
//! - **Shipping event**: a single closing ObjectEvent covering every SSCC
//!
//! Generation is pure and deterministic for fixed options: the same inputs,
//! base timestamp and instance identifier always produce the same document.
//!
//! ## Quick Start
//!
//! ```rust
//! use dscsa_epcis_generator::*;
//!
//! let config = PackagingConfiguration {
//!     company_prefix: "1234567".to_string(),
//!     item_indicator: "1".to_string(),
//!     item_product_code: "000000".to_string(),
//!     sscc_indicator: "3".to_string(),
//!     number_of_sscc: 1,
//!     items_per_case: 3,
//!     shipper: TradingPartner { company_prefix: "0999888".to_string(), ..Default::default() },
//!     ..Default::default()
//! };
//! let serials = SerialPool {
//!     sscc: vec!["SSCC001".to_string()],
//!     item: vec!["A".to_string(), "B".to_string(), "C".to_string()],
//!     ..Default::default()
//! };
//!
//! let xml = generate(&config, &serials, None, None)?;
//! assert!(xml.contains("<parentID>urn:epc:id:sscc:0999888.3SSCC001</parentID>"));
//! # Ok::<(), GenerationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: configuration, GS1 identifiers, CBV enums and CLI arguments
//! - [`hierarchy`]: topology resolution and serial pool partitioning
//! - [`vocabulary`]: EPCClass and Location master data
//! - [`events`]: typed events and the timestamp sequencer
//! - [`document`]: SBDH header, XML assembly and file naming
//! - [`generation`]: the engine, errors, statistics and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Hierarchy  │    │ Vocabulary  │
//! │             │    │             │    │             │
//! │ Config      │───►│ Topology    │───►│ EPCClass    │
//! │ Identifiers │    │ Partition   │    │ Location    │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                           │                  │
//!                           ▼                  ▼
//!                    ┌─────────────┐    ┌─────────────┐
//!                    │   Events    │───►│  Document   │
//!                    │             │    │             │
//!                    │ Sequencer   │    │ SBDH        │
//!                    │ Builder     │    │ XML         │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod document;
pub mod events;
pub mod generation;
pub mod hierarchy;
pub mod types;
pub mod vocabulary;

// Configuration, identifiers and vocabulary tags
pub use types::{
    sgln_epc,
    sgtin_epc,
    sgtin_pattern,
    sscc_epc,
    Action,
    BizStep,
    BizTransactionType,
    CliArgs,
    ConfigError,
    ConfigValidationError,
    Disposition,
    EpcIdentifier,
    PackagingConfiguration,
    PackagingLevel,
    SourceDestType,
    TradingPartner,
};

// Hierarchy and serial pools
pub use hierarchy::{partition, Hierarchy, LevelTransition, SerialPool, Topology};

// Master data
pub use vocabulary::{normalize_ndc, MasterData, VocabularyBuilder, VocabularyElement};

// Events
pub use events::{EpcisEvent, EventBuilder, TimestampSequencer};

// Document assembly
pub use document::{document_filename, DocumentAssembler, SbdhHeader};

// Generation
pub use generation::{
    generate, DocumentStatistics, EpcisDocument, EpcisGenerator, GenerationError,
    GenerationOptions, GenerationResult, LoggingConfig,
};

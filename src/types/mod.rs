//! Core types, identifiers and configuration for the EPCIS document generator
//!
//! This module contains the fundamental types used throughout the generator.
//!
//! # Overview
//!
//! - **Identifiers**: GS1 EPC encoding (SSCC, SGTIN, SGTIN pattern, SGLN)
//! - **Enums**: packaging levels and Core Business Vocabulary tags
//! - **Configuration**: the packaging configuration, its ingestion and validation
//! - **CLI**: command line arguments and their resolution
//!
//! # Usage Example
//!
//! ```rust
//! use dscsa_epcis_generator::types::*;
//!
//! let epc = sgtin_epc("1234567", "1", "000000", "ITEM001").unwrap();
//! assert_eq!(epc.as_str(), "urn:epc:id:sgtin:1234567.1000000.ITEM001");
//!
//! // Field names may arrive in either convention
//! let config = PackagingConfiguration::from_json_str(
//!     r#"{"companyPrefix": "1234567", "number_of_sscc": 1, "itemsPerCase": 10}"#,
//! ).unwrap();
//! assert_eq!(config.company_prefix, "1234567");
//! assert_eq!(PackagingLevel::Item.to_string(), "Item");
//! ```

pub mod cli;
pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use cli::*;
pub use config::*;
pub use enums::*;
pub use identifiers::*;

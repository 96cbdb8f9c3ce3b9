//! Header master data: product classes and trading-partner locations
//!
//! # Overview
//!
//! - **VocabularyBuilder**: builds EPCClass elements (Item, Inner Case, Case)
//!   and Location elements for the sender, receiver and shipper
//! - **normalize_ndc**: converts a package NDC to its 11-digit form
//!
//! # Usage Example
//!
//! ```rust
//! use dscsa_epcis_generator::hierarchy::Hierarchy;
//! use dscsa_epcis_generator::types::PackagingConfiguration;
//! use dscsa_epcis_generator::vocabulary::*;
//!
//! let config = PackagingConfiguration::template();
//! let hierarchy = Hierarchy::resolve(&config);
//! let master_data = VocabularyBuilder::new(&config, &hierarchy).build().unwrap();
//!
//! assert_eq!(master_data.epc_classes.len(), 2);
//! assert_eq!(normalize_ndc("12345-678-90"), "12345067890");
//! ```

pub mod builder;
pub mod ndc;

pub use builder::*;
pub use ndc::*;

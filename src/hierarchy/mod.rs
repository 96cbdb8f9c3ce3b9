//! Packaging hierarchy resolution and serial pool partitioning
//!
//! # Overview
//!
//! - **Hierarchy**: resolves a configuration into one of three topologies
//!   (SSCC > Item, SSCC > Case > Item, SSCC > Case > Inner Case > Item) and the
//!   derived unit totals per level
//! - **SerialPool**: the caller-supplied serial numbers for each level
//! - **partition**: slices a flat pool into per-parent groups
//!
//! # Usage Example
//!
//! ```rust
//! use dscsa_epcis_generator::hierarchy::*;
//! use dscsa_epcis_generator::types::*;
//!
//! let config = PackagingConfiguration {
//!     number_of_sscc: 1,
//!     cases_per_sscc: 2,
//!     items_per_case: 3,
//!     ..Default::default()
//! };
//!
//! let hierarchy = Hierarchy::resolve(&config);
//! assert_eq!(hierarchy.topology(), Topology::ThreeLevel);
//! assert_eq!(hierarchy.total_items(), 6);
//!
//! let items: Vec<String> = (1..=6).map(|i| format!("I{}", i)).collect();
//! let per_case = partition(&items, 3);
//! assert_eq!(per_case.len(), 2);
//! ```

pub mod partition;
pub mod resolver;

pub use partition::*;
pub use resolver::*;

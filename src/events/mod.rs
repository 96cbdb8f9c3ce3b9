//! Event construction
//!
//! This module turns a resolved hierarchy and serial pools into the typed,
//! ordered list of EPCIS events.
//!
//! # Overview
//!
//! - **EpcisEvent**: commissioning, aggregation and shipping events
//! - **EventBuilder**: emits events in document order
//! - **TimestampSequencer**: hands out one strictly increasing time per event
//!
//! # Usage Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use dscsa_epcis_generator::events::*;
//! use dscsa_epcis_generator::hierarchy::*;
//! use dscsa_epcis_generator::types::*;
//!
//! let config = PackagingConfiguration::template();
//! let hierarchy = Hierarchy::resolve(&config);
//! let pool = SerialPool {
//!     sscc: vec!["000000001".to_string()],
//!     case: vec!["C1".to_string(), "C2".to_string()],
//!     item: (1..=24).map(|i| format!("I{}", i)).collect(),
//!     ..Default::default()
//! };
//!
//! let mut sequencer = TimestampSequencer::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
//! let events = EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer).unwrap();
//!
//! // Item, Case and SSCC commissioning, 2 + 1 aggregations, shipping
//! assert_eq!(events.len(), 7);
//! assert!(matches!(events.last(), Some(EpcisEvent::Shipping(_))));
//! ```

pub mod builder;
pub mod epcis_event;
pub mod sequencer;

pub use builder::*;
pub use epcis_event::*;
pub use sequencer::*;

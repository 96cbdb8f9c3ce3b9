//! Document assembly and serialization
//!
//! # Overview
//!
//! - **SbdhHeader**: sender, receiver and document identification
//! - **DocumentAssembler**: renders header, master data and events to XML
//! - **document_filename**: the conventional output file name
//!
//! # Usage Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dscsa_epcis_generator::document::*;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
//! assert_eq!(document_filename("", "", date), "epcis-250307.xml");
//! ```

pub mod assembler;
pub mod filename;
pub mod header;

pub use assembler::*;
pub use filename::*;
pub use header::*;

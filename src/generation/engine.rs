//! Document generation engine
//!
//! This module wires the hierarchy resolver, vocabulary builder, event builder
//! and document assembler into one synchronous call. Each call owns its own
//! timestamp sequencer; nothing is shared between calls.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use super::error::GenerationResult;
use super::statistics::DocumentStatistics;
use crate::document::{document_filename, DocumentAssembler, SbdhHeader};
use crate::events::{EpcisEvent, EventBuilder, TimestampSequencer};
use crate::hierarchy::{Hierarchy, SerialPool};
use crate::types::PackagingConfiguration;
use crate::vocabulary::{MasterData, VocabularyBuilder};

/// Per-call inputs other than configuration and serials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Time of the first event
    pub base_timestamp: DateTime<Utc>,
    /// SBDH instance identifier
    pub instance_identifier: String,
    /// Read point used when the shipper has no SGLN
    pub read_point: Option<String>,
    /// Business location used when the shipper has no SGLN
    pub biz_location: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            base_timestamp: Utc::now().trunc_subsecs(0),
            instance_identifier: Uuid::new_v4().to_string(),
            read_point: None,
            biz_location: None,
        }
    }
}

impl GenerationOptions {
    /// Options starting now with a fresh instance identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base timestamp
    pub fn with_base_timestamp(mut self, base_timestamp: DateTime<Utc>) -> Self {
        self.base_timestamp = base_timestamp;
        self
    }

    /// Set the SBDH instance identifier
    pub fn with_instance_identifier(mut self, instance_identifier: impl Into<String>) -> Self {
        self.instance_identifier = instance_identifier.into();
        self
    }

    /// Set the fallback read point
    pub fn with_read_point(mut self, read_point: Option<String>) -> Self {
        self.read_point = read_point;
        self
    }

    /// Set the fallback business location
    pub fn with_biz_location(mut self, biz_location: Option<String>) -> Self {
        self.biz_location = biz_location;
        self
    }
}

/// A generated document in typed form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpcisDocument {
    header: SbdhHeader,
    master_data: MasterData,
    events: Vec<EpcisEvent>,
    statistics: DocumentStatistics,
}

impl EpcisDocument {
    /// SBDH header
    pub fn header(&self) -> &SbdhHeader {
        &self.header
    }

    /// EPCClass and Location master data
    pub fn master_data(&self) -> &MasterData {
        &self.master_data
    }

    /// Events in document order
    pub fn events(&self) -> &[EpcisEvent] {
        &self.events
    }

    /// Event and EPC counts
    pub fn statistics(&self) -> &DocumentStatistics {
        &self.statistics
    }

    /// Conventional file name, dated by the document creation time
    pub fn filename(&self) -> String {
        document_filename(
            self.header.sender_gln.as_deref().unwrap_or_default(),
            self.header.receiver_gln.as_deref().unwrap_or_default(),
            self.header.creation_date_and_time.date_naive(),
        )
    }

    /// Serialize to EPCIS 1.2 XML
    pub fn to_xml(&self) -> GenerationResult<String> {
        DocumentAssembler::new(&self.header, &self.master_data, &self.events).to_xml()
    }
}

/// Generates documents for one packaging configuration
#[derive(Debug)]
pub struct EpcisGenerator<'a> {
    config: &'a PackagingConfiguration,
    hierarchy: Hierarchy,
}

impl<'a> EpcisGenerator<'a> {
    /// Resolve the hierarchy once for a configuration
    pub fn new(config: &'a PackagingConfiguration) -> Self {
        Self { config, hierarchy: Hierarchy::resolve(config) }
    }

    /// Resolved hierarchy
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Build a complete document
    ///
    /// Serial pool sizes are not re-checked beyond what packing requires;
    /// callers run [`SerialPool::check_sizes`] first.
    #[instrument(skip_all, fields(topology = %self.hierarchy.topology(), instance = %options.instance_identifier))]
    pub fn generate(
        &self,
        serials: &SerialPool,
        options: &GenerationOptions,
    ) -> GenerationResult<EpcisDocument> {
        let master_data = VocabularyBuilder::new(self.config, &self.hierarchy).build()?;

        let mut sequencer = TimestampSequencer::new(options.base_timestamp);
        let events = EventBuilder::new(self.config, &self.hierarchy, serials)
            .with_locations(options.read_point.as_deref(), options.biz_location.as_deref())?
            .build(&mut sequencer)?;

        let header =
            SbdhHeader::new(self.config, &options.instance_identifier, sequencer.creation_timestamp());
        let statistics =
            DocumentStatistics::from_events(self.hierarchy.topology(), &events, &master_data);

        info!("Generated EPCIS document: {}", statistics);
        Ok(EpcisDocument { header, master_data, events, statistics })
    }
}

/// Generate an EPCIS 1.2 XML document starting now, with a fresh instance id
///
/// A shipper SGLN in the configuration overrides `read_point` and
/// `biz_location`.
pub fn generate(
    config: &PackagingConfiguration,
    serials: &SerialPool,
    read_point: Option<&str>,
    biz_location: Option<&str>,
) -> GenerationResult<String> {
    let options = GenerationOptions::new()
        .with_read_point(read_point.map(str::to_string))
        .with_biz_location(biz_location.map(str::to_string));
    EpcisGenerator::new(config).generate(serials, &options)?.to_xml()
}

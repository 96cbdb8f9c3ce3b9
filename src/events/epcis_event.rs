//! Typed EPCIS events
//!
//! This module contains the event values produced by the event builder. They
//! describe what the document says; the document assembler decides how each
//! one is shaped as XML.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::hierarchy::LevelTransition;
use crate::types::{
    Action, BizStep, BizTransactionType, Disposition, EpcIdentifier, PackagingLevel, SourceDestType,
};

/// Instance/lot master data attached to commissioning events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ilmd {
    /// Lot number
    pub lot_number: Option<String>,
    /// Expiration date
    pub expiration_date: Option<NaiveDate>,
}

/// A business transaction reference on the shipping event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BizTransaction {
    /// Transaction type
    pub kind: BizTransactionType,
    /// Transaction URN
    pub id: String,
}

/// A source or destination entry on the shipping event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDestination {
    /// Entry type
    pub kind: SourceDestType,
    /// SGLN URN
    pub id: String,
}

/// Commissioning ObjectEvent covering every unit at one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissioningEvent {
    /// Event time
    pub event_time: DateTime<Utc>,
    /// Packaging level being commissioned
    pub level: PackagingLevel,
    /// All EPCs at the level, in pool order
    pub epcs: Vec<EpcIdentifier>,
    /// Read point SGLN URN
    pub read_point: Option<String>,
    /// Business location SGLN URN
    pub biz_location: Option<String>,
    /// Lot and expiry; never set for SSCC
    pub ilmd: Option<Ilmd>,
}

/// AggregationEvent packing one parent's children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationEvent {
    /// Event time
    pub event_time: DateTime<Utc>,
    /// Level transition this event belongs to
    pub transition: LevelTransition,
    /// Parent container EPC
    pub parent: EpcIdentifier,
    /// Child EPCs, in pool order
    pub children: Vec<EpcIdentifier>,
    /// Read point SGLN URN
    pub read_point: Option<String>,
    /// Business location SGLN URN
    pub biz_location: Option<String>,
}

/// Shipping ObjectEvent covering every SSCC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingEvent {
    /// Event time
    pub event_time: DateTime<Utc>,
    /// SSCC EPCs
    pub epcs: Vec<EpcIdentifier>,
    /// Read point SGLN URN
    pub read_point: Option<String>,
    /// Business location SGLN URN
    pub biz_location: Option<String>,
    /// Purchase order and despatch advice references
    pub biz_transactions: Vec<BizTransaction>,
    /// Ship-from entries
    pub sources: Vec<SourceDestination>,
    /// Ship-to entries
    pub destinations: Vec<SourceDestination>,
}

/// An event in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EpcisEvent {
    /// Bulk commissioning of one level
    Commissioning(CommissioningEvent),
    /// Packing of one parent unit
    Aggregation(AggregationEvent),
    /// Trailing shipment of all SSCCs
    Shipping(ShippingEvent),
}

impl EpcisEvent {
    /// Event time
    pub fn event_time(&self) -> DateTime<Utc> {
        match self {
            EpcisEvent::Commissioning(e) => e.event_time,
            EpcisEvent::Aggregation(e) => e.event_time,
            EpcisEvent::Shipping(e) => e.event_time,
        }
    }

    /// EPCIS action
    pub fn action(&self) -> Action {
        match self {
            EpcisEvent::Commissioning(_) | EpcisEvent::Aggregation(_) => Action::Add,
            EpcisEvent::Shipping(_) => Action::Observe,
        }
    }

    /// CBV business step
    pub fn biz_step(&self) -> BizStep {
        match self {
            EpcisEvent::Commissioning(_) => BizStep::Commissioning,
            EpcisEvent::Aggregation(_) => BizStep::Packing,
            EpcisEvent::Shipping(_) => BizStep::Shipping,
        }
    }

    /// CBV disposition
    pub fn disposition(&self) -> Disposition {
        match self {
            EpcisEvent::Commissioning(_) => Disposition::Active,
            EpcisEvent::Aggregation(_) => Disposition::InProgress,
            EpcisEvent::Shipping(_) => Disposition::InTransit,
        }
    }

    /// Read point URN
    pub fn read_point(&self) -> Option<&str> {
        match self {
            EpcisEvent::Commissioning(e) => e.read_point.as_deref(),
            EpcisEvent::Aggregation(e) => e.read_point.as_deref(),
            EpcisEvent::Shipping(e) => e.read_point.as_deref(),
        }
    }

    /// Business location URN
    pub fn biz_location(&self) -> Option<&str> {
        match self {
            EpcisEvent::Commissioning(e) => e.biz_location.as_deref(),
            EpcisEvent::Aggregation(e) => e.biz_location.as_deref(),
            EpcisEvent::Shipping(e) => e.biz_location.as_deref(),
        }
    }

    /// Whether this renders as an ObjectEvent
    pub fn is_object_event(&self) -> bool {
        !matches!(self, EpcisEvent::Aggregation(_))
    }

    /// XML element name
    pub fn element_name(&self) -> &'static str {
        if self.is_object_event() {
            "ObjectEvent"
        } else {
            "AggregationEvent"
        }
    }

    /// Every EPC the event mentions, parent first for aggregations
    pub fn epcs(&self) -> Vec<&EpcIdentifier> {
        match self {
            EpcisEvent::Commissioning(e) => e.epcs.iter().collect(),
            EpcisEvent::Aggregation(e) => std::iter::once(&e.parent).chain(e.children.iter()).collect(),
            EpcisEvent::Shipping(e) => e.epcs.iter().collect(),
        }
    }
}

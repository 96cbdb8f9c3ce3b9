//! Enumeration types for the EPCIS document generator
//!
//! This module contains the packaging levels and the Core Business Vocabulary
//! (CBV) tags that appear on generated events: actions, business steps,
//! dispositions, source/destination types and business transaction types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical packaging levels, ordered bottom-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingLevel {
    /// Individual saleable unit
    Item,
    /// Optional intermediate container between items and cases
    InnerCase,
    /// Homogeneous case of items or inner cases
    Case,
    /// Logistics unit (pallet or shipper) identified by an SSCC
    Sscc,
}

impl PackagingLevel {
    /// All levels in bottom-up order
    pub const BOTTOM_UP: [PackagingLevel; 4] =
        [PackagingLevel::Item, PackagingLevel::InnerCase, PackagingLevel::Case, PackagingLevel::Sscc];

    /// Whether units at this level are identified by SGTIN (everything except SSCC)
    pub fn is_trade_item(&self) -> bool {
        !matches!(self, PackagingLevel::Sscc)
    }

    /// Whether commissioning events at this level may carry lot/expiry ILMD
    pub fn carries_ilmd(&self) -> bool {
        self.is_trade_item()
    }
}

impl fmt::Display for PackagingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackagingLevel::Item => write!(f, "Item"),
            PackagingLevel::InnerCase => write!(f, "Inner Case"),
            PackagingLevel::Case => write!(f, "Case"),
            PackagingLevel::Sscc => write!(f, "SSCC"),
        }
    }
}

impl FromStr for PackagingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "item" | "items" => Ok(PackagingLevel::Item),
            "inner case" | "inner_case" | "innercase" => Ok(PackagingLevel::InnerCase),
            "case" | "cases" => Ok(PackagingLevel::Case),
            "sscc" | "pallet" => Ok(PackagingLevel::Sscc),
            _ => Err(format!("Unknown packaging level: {}", s)),
        }
    }
}

/// EPCIS event action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// EPCs are created or added to a parent
    Add,
    /// EPCs are observed without change
    Observe,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add => write!(f, "ADD"),
            Action::Observe => write!(f, "OBSERVE"),
        }
    }
}

/// CBV business steps used by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BizStep {
    /// Serial numbers are assigned to physical units
    Commissioning,
    /// Children are packed into a parent container
    Packing,
    /// Logistics units leave the shipper
    Shipping,
}

impl BizStep {
    /// CBV URN for this business step
    pub fn urn(&self) -> &'static str {
        match self {
            BizStep::Commissioning => "urn:epcglobal:cbv:bizstep:commissioning",
            BizStep::Packing => "urn:epcglobal:cbv:bizstep:packing",
            BizStep::Shipping => "urn:epcglobal:cbv:bizstep:shipping",
        }
    }
}

impl fmt::Display for BizStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.urn())
    }
}

/// CBV dispositions used by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// Commissioned and available
    Active,
    /// Packing in progress
    InProgress,
    /// Shipped, not yet received
    InTransit,
}

impl Disposition {
    /// CBV URN for this disposition
    pub fn urn(&self) -> &'static str {
        match self {
            Disposition::Active => "urn:epcglobal:cbv:disp:active",
            Disposition::InProgress => "urn:epcglobal:cbv:disp:in_progress",
            Disposition::InTransit => "urn:epcglobal:cbv:disp:in_transit",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.urn())
    }
}

/// CBV source/destination types on the shipping event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceDestType {
    /// Party that owns the goods
    OwningParty,
    /// Physical location
    Location,
}

impl SourceDestType {
    /// CBV URN for this source/destination type
    pub fn urn(&self) -> &'static str {
        match self {
            SourceDestType::OwningParty => "urn:epcglobal:cbv:sdt:owning_party",
            SourceDestType::Location => "urn:epcglobal:cbv:sdt:location",
        }
    }
}

/// CBV business transaction types on the shipping event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BizTransactionType {
    /// Purchase order
    PurchaseOrder,
    /// Despatch advice (advance ship notice)
    DespatchAdvice,
}

impl BizTransactionType {
    /// CBV URN for this business transaction type
    pub fn urn(&self) -> &'static str {
        match self {
            BizTransactionType::PurchaseOrder => "urn:epcglobal:cbv:btt:po",
            BizTransactionType::DespatchAdvice => "urn:epcglobal:cbv:btt:desadv",
        }
    }
}

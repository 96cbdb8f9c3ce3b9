//! EPCClass and Location master data
//!
//! This module builds the vocabulary elements carried in the document header:
//! one EPCClass element per active trade-item level and Location elements for
//! every distinct trading-partner site.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

use super::ndc::normalize_ndc;
use crate::generation::{GenerationError, GenerationResult};
use crate::hierarchy::Hierarchy;
use crate::types::identifiers::{is_present, pgln_epc, sgln_epc, sgtin_pattern};
use crate::types::{PackagingConfiguration, PackagingLevel, TradingPartner};

/// Vocabulary type URN for product master data
pub const EPC_CLASS_VOCABULARY: &str = "urn:epcglobal:epcis:vtype:EPCClass";
/// Vocabulary type URN for location master data
pub const LOCATION_VOCABULARY: &str = "urn:epcglobal:epcis:vtype:Location";

/// Type code accompanying a normalized NDC
pub const NDC11_TYPE_CODE: &str = "FDA_NDC_11";

/// CBV master data attribute names
pub mod attr {
    /// Product identifier (normalized NDC)
    pub const ADDITIONAL_TRADE_ITEM_ID: &str = "urn:epcglobal:cbv:mda#additionalTradeItemIdentification";
    /// Product identifier type code
    pub const ADDITIONAL_TRADE_ITEM_ID_TYPE: &str =
        "urn:epcglobal:cbv:mda#additionalTradeItemIdentificationTypeCode";
    /// Regulated product name
    pub const REGULATED_PRODUCT_NAME: &str = "urn:epcglobal:cbv:mda#regulatedProductName";
    /// Manufacturer name
    pub const MANUFACTURER: &str = "urn:epcglobal:cbv:mda#manufacturerOfTradeItemPartyName";
    /// Dosage form
    pub const DOSAGE_FORM: &str = "urn:epcglobal:cbv:mda#dosageFormType";
    /// Strength
    pub const STRENGTH: &str = "urn:epcglobal:cbv:mda#strengthDescription";
    /// Net content
    pub const NET_CONTENT: &str = "urn:epcglobal:cbv:mda#netContentDescription";
    /// Party or site name
    pub const NAME: &str = "urn:epcglobal:cbv:mda#name";
    /// Street address
    pub const STREET: &str = "urn:epcglobal:cbv:mda#streetAddressOne";
    /// City
    pub const CITY: &str = "urn:epcglobal:cbv:mda#city";
    /// State or province
    pub const STATE: &str = "urn:epcglobal:cbv:mda#state";
    /// Postal code
    pub const POSTAL_CODE: &str = "urn:epcglobal:cbv:mda#postalCode";
    /// Country code
    pub const COUNTRY_CODE: &str = "urn:epcglobal:cbv:mda#countryCode";
}

/// A single master data attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyAttribute {
    /// Attribute name URN
    pub id: String,
    /// Attribute value
    pub value: String,
}

/// A vocabulary element: an identifier and its ordered attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyElement {
    /// Element identifier (EPC pattern or SGLN URN)
    pub id: String,
    /// Attributes in document order
    pub attributes: Vec<VocabularyAttribute>,
}

impl VocabularyElement {
    fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), attributes: Vec::new() }
    }

    /// Append an attribute when the value is present
    fn with_optional(mut self, id: &str, value: &str) -> Self {
        if is_present(value) {
            self.attributes.push(VocabularyAttribute {
                id: id.to_string(),
                value: value.trim().to_string(),
            });
        }
        self
    }

    /// Value of an attribute by name
    pub fn attribute(&self, id: &str) -> Option<&str> {
        self.attributes.iter().find(|a| a.id == id).map(|a| a.value.as_str())
    }
}

/// Master data carried in the EPCIS header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterData {
    /// EPCClass elements, Item first, then Inner Case and Case when active
    pub epc_classes: Vec<VocabularyElement>,
    /// Location elements for trading-partner sites
    pub locations: Vec<VocabularyElement>,
}

impl MasterData {
    /// Whether there is anything to emit
    pub fn is_empty(&self) -> bool {
        self.epc_classes.is_empty() && self.locations.is_empty()
    }
}

/// Builds header master data for a resolved hierarchy
#[derive(Debug)]
pub struct VocabularyBuilder<'a> {
    config: &'a PackagingConfiguration,
    hierarchy: &'a Hierarchy,
}

impl<'a> VocabularyBuilder<'a> {
    /// Create a builder over a configuration and its resolved hierarchy
    pub fn new(config: &'a PackagingConfiguration, hierarchy: &'a Hierarchy) -> Self {
        Self { config, hierarchy }
    }

    /// Build all master data
    #[instrument(skip(self), fields(topology = %self.hierarchy.topology()))]
    pub fn build(&self) -> GenerationResult<MasterData> {
        let epc_classes = self
            .hierarchy
            .trade_item_levels()
            .into_iter()
            .map(|level| self.epc_class_element(level))
            .collect::<GenerationResult<Vec<_>>>()?;
        let locations = self.location_elements()?;

        debug!(
            "Built {} EPCClass and {} Location vocabulary elements",
            epc_classes.len(),
            locations.len()
        );
        Ok(MasterData { epc_classes, locations })
    }

    /// EPCClass element for one active trade-item level
    pub fn epc_class_element(&self, level: PackagingLevel) -> GenerationResult<VocabularyElement> {
        if !level.is_trade_item() {
            return Err(GenerationError::assembly_error("SSCC is never an EPCClass"));
        }
        if !self.hierarchy.is_active(level) {
            return Err(GenerationError::assembly_error(format!(
                "{} level is not part of a {} hierarchy",
                level,
                self.hierarchy.topology()
            )));
        }

        let config = self.config;
        let (indicator, product_code) = config.trade_item_codes(level)?;
        let pattern = sgtin_pattern(&config.company_prefix, indicator, product_code)?;

        let ndc = if is_present(&config.package_ndc) {
            normalize_ndc(&config.package_ndc)
        } else {
            String::new()
        };
        let ndc_type = if ndc.is_empty() { "" } else { NDC11_TYPE_CODE };

        Ok(VocabularyElement::new(pattern)
            .with_optional(attr::ADDITIONAL_TRADE_ITEM_ID, &ndc)
            .with_optional(attr::ADDITIONAL_TRADE_ITEM_ID_TYPE, ndc_type)
            .with_optional(attr::REGULATED_PRODUCT_NAME, &config.regulated_product_name)
            .with_optional(attr::MANUFACTURER, &config.manufacturer_name)
            .with_optional(attr::DOSAGE_FORM, &config.dosage_form)
            .with_optional(attr::STRENGTH, &config.strength)
            .with_optional(attr::NET_CONTENT, &config.net_content))
    }

    /// Location elements for sender, receiver and (when distinct) shipper
    ///
    /// Each partner contributes one element for its GLN (as a PGLN URN) and
    /// one for its SGLN; identifiers already emitted are skipped.
    pub fn location_elements(&self) -> GenerationResult<Vec<VocabularyElement>> {
        let mut partners: Vec<&TradingPartner> = vec![&self.config.sender, &self.config.receiver];
        if !self.config.shipper_same_as_sender {
            partners.push(&self.config.shipper);
        }

        let mut seen_pairs = HashSet::new();
        let mut seen_ids = HashSet::new();
        let mut elements = Vec::new();

        for partner in partners {
            if !partner.has_location() {
                continue;
            }
            if !seen_pairs.insert((partner.gln.trim(), partner.sgln.trim())) {
                continue;
            }
            let mut ids = Vec::with_capacity(2);
            if is_present(&partner.gln) {
                ids.push(pgln_epc(&partner.company_prefix, &partner.gln)?);
            }
            if is_present(&partner.sgln) {
                ids.push(sgln_epc(&partner.sgln)?);
            }
            for id in ids {
                if seen_ids.insert(id.clone()) {
                    elements.push(location_element(id, partner));
                }
            }
        }

        Ok(elements)
    }
}

fn location_element(id: String, partner: &TradingPartner) -> VocabularyElement {
    VocabularyElement::new(id)
        .with_optional(attr::NAME, &partner.name)
        .with_optional(attr::STREET, &partner.street_address)
        .with_optional(attr::CITY, &partner.city)
        .with_optional(attr::STATE, &partner.state)
        .with_optional(attr::POSTAL_CODE, &partner.postal_code)
        .with_optional(attr::COUNTRY_CODE, &partner.country_code)
}

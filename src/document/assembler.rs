//! EPCIS 1.2 XML serialization
//!
//! This module renders a header, master data and event list into the final
//! document in a single pass. Element order follows the EPCIS 1.2 schema;
//! master data sits under `EPCISHeader/extension`.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use super::header::{SbdhHeader, SBDH_AUTHORITY};
use crate::events::{AggregationEvent, CommissioningEvent, EpcisEvent, Ilmd, ShippingEvent};
use crate::generation::{GenerationError, GenerationResult};
use crate::types::EpcIdentifier;
use crate::vocabulary::{MasterData, VocabularyElement, EPC_CLASS_VOCABULARY, LOCATION_VOCABULARY};

/// EPCIS 1.2 schema version
pub const SCHEMA_VERSION: &str = "1.2";

/// Namespace declarations on the root element
pub const ROOT_NAMESPACES: [(&str, &str); 4] = [
    ("xmlns:epcis", "urn:epcglobal:epcis:xsd:1"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("xmlns:gs1ushc", "http://epcis.gs1us.org/hc/ns"),
    ("xmlns:sbdh", "http://www.unece.org/cefact/namespaces/StandardBusinessDocumentHeader"),
];

/// CBV master data namespace used inside ILMD
pub const CBVMDA_NAMESPACE: &str = "urn:epcglobal:cbv:mda";

/// Time zone offset written on every event; all times are UTC
pub const EVENT_TIME_ZONE_OFFSET: &str = "+00:00";

/// Render a timestamp as RFC 3339 UTC with milliseconds
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serializes a complete document
#[derive(Debug)]
pub struct DocumentAssembler<'a> {
    header: &'a SbdhHeader,
    master_data: &'a MasterData,
    events: &'a [EpcisEvent],
}

impl<'a> DocumentAssembler<'a> {
    /// Create an assembler over the document parts
    pub fn new(header: &'a SbdhHeader, master_data: &'a MasterData, events: &'a [EpcisEvent]) -> Self {
        Self { header, master_data, events }
    }

    /// Render the document as indented UTF-8 XML with a declaration
    pub fn to_xml(&self) -> GenerationResult<String> {
        let mut xml = XmlWriter::new();
        xml.declaration()?;

        let creation_date = format_timestamp(&self.header.creation_date_and_time);
        let mut root: Vec<(&str, &str)> = ROOT_NAMESPACES.to_vec();
        root.push(("schemaVersion", SCHEMA_VERSION));
        root.push(("creationDate", creation_date.as_str()));
        xml.start("epcis:EPCISDocument", &root)?;

        xml.start("EPCISHeader", &[])?;
        self.write_sbdh(&mut xml)?;
        self.write_master_data(&mut xml)?;
        xml.end("EPCISHeader")?;

        xml.start("EPCISBody", &[])?;
        xml.start("EventList", &[])?;
        for event in self.events {
            write_event(&mut xml, event)?;
        }
        xml.end("EventList")?;
        xml.end("EPCISBody")?;

        xml.end("epcis:EPCISDocument")?;
        let document = xml.finish()?;
        debug!("Serialized document of {} bytes", document.len());
        Ok(document)
    }

    fn write_sbdh(&self, xml: &mut XmlWriter) -> GenerationResult<()> {
        let header = self.header;
        xml.start("sbdh:StandardBusinessDocumentHeader", &[])?;
        xml.text_element("sbdh:HeaderVersion", &[], &header.header_version)?;
        for (element, gln) in [("sbdh:Sender", &header.sender_gln), ("sbdh:Receiver", &header.receiver_gln)] {
            if let Some(gln) = gln {
                xml.start(element, &[])?;
                xml.text_element("sbdh:Identifier", &[("Authority", SBDH_AUTHORITY)], gln)?;
                xml.end(element)?;
            }
        }
        xml.start("sbdh:DocumentIdentification", &[])?;
        xml.text_element("sbdh:Standard", &[], &header.standard)?;
        xml.text_element("sbdh:TypeVersion", &[], &header.type_version)?;
        xml.text_element("sbdh:InstanceIdentifier", &[], &header.instance_identifier)?;
        xml.text_element("sbdh:Type", &[], &header.document_type)?;
        xml.text_element(
            "sbdh:CreationDateAndTime",
            &[],
            &format_timestamp(&header.creation_date_and_time),
        )?;
        xml.end("sbdh:DocumentIdentification")?;
        xml.end("sbdh:StandardBusinessDocumentHeader")
    }

    fn write_master_data(&self, xml: &mut XmlWriter) -> GenerationResult<()> {
        if self.master_data.is_empty() {
            return Ok(());
        }
        xml.start("extension", &[])?;
        xml.start("EPCISMasterData", &[])?;
        xml.start("VocabularyList", &[])?;
        for (vocabulary_type, elements) in [
            (EPC_CLASS_VOCABULARY, &self.master_data.epc_classes),
            (LOCATION_VOCABULARY, &self.master_data.locations),
        ] {
            if elements.is_empty() {
                continue;
            }
            xml.start("Vocabulary", &[("type", vocabulary_type)])?;
            xml.start("VocabularyElementList", &[])?;
            for element in elements {
                write_vocabulary_element(xml, element)?;
            }
            xml.end("VocabularyElementList")?;
            xml.end("Vocabulary")?;
        }
        xml.end("VocabularyList")?;
        xml.end("EPCISMasterData")?;
        xml.end("extension")
    }
}

fn write_vocabulary_element(xml: &mut XmlWriter, element: &VocabularyElement) -> GenerationResult<()> {
    xml.start("VocabularyElement", &[("id", element.id.as_str())])?;
    for attribute in &element.attributes {
        xml.text_element("attribute", &[("id", attribute.id.as_str())], &attribute.value)?;
    }
    xml.end("VocabularyElement")
}

fn write_event(xml: &mut XmlWriter, event: &EpcisEvent) -> GenerationResult<()> {
    let name = event.element_name();
    xml.start(name, &[])?;
    xml.text_element("eventTime", &[], &format_timestamp(&event.event_time()))?;
    xml.text_element("eventTimeZoneOffset", &[], EVENT_TIME_ZONE_OFFSET)?;

    match event {
        EpcisEvent::Commissioning(CommissioningEvent { epcs, .. })
        | EpcisEvent::Shipping(ShippingEvent { epcs, .. }) => {
            write_epc_list(xml, "epcList", epcs)?;
        }
        EpcisEvent::Aggregation(AggregationEvent { parent, children, .. }) => {
            xml.text_element("parentID", &[], parent.as_str())?;
            write_epc_list(xml, "childEPCs", children)?;
        }
    }

    xml.text_element("action", &[], &event.action().to_string())?;
    xml.text_element("bizStep", &[], event.biz_step().urn())?;
    xml.text_element("disposition", &[], event.disposition().urn())?;
    for (element, location) in [("readPoint", event.read_point()), ("bizLocation", event.biz_location())] {
        if let Some(location) = location {
            xml.start(element, &[])?;
            xml.text_element("id", &[], location)?;
            xml.end(element)?;
        }
    }

    match event {
        EpcisEvent::Commissioning(CommissioningEvent { ilmd: Some(ilmd), .. }) => {
            xml.start("extension", &[])?;
            write_ilmd(xml, ilmd)?;
            xml.end("extension")?;
        }
        EpcisEvent::Shipping(shipping) => write_shipping_details(xml, shipping)?,
        _ => {}
    }

    xml.end(name)
}

fn write_epc_list(xml: &mut XmlWriter, element: &str, epcs: &[EpcIdentifier]) -> GenerationResult<()> {
    xml.start(element, &[])?;
    for epc in epcs {
        xml.text_element("epc", &[], epc.as_str())?;
    }
    xml.end(element)
}

fn write_ilmd(xml: &mut XmlWriter, ilmd: &Ilmd) -> GenerationResult<()> {
    xml.start("ilmd", &[("xmlns:cbvmda", CBVMDA_NAMESPACE)])?;
    if let Some(lot) = &ilmd.lot_number {
        xml.text_element("cbvmda:lotNumber", &[], lot)?;
    }
    if let Some(date) = ilmd.expiration_date {
        xml.text_element("cbvmda:itemExpirationDate", &[], &date.format("%Y-%m-%d").to_string())?;
    }
    xml.end("ilmd")
}

fn write_shipping_details(xml: &mut XmlWriter, shipping: &ShippingEvent) -> GenerationResult<()> {
    if !shipping.biz_transactions.is_empty() {
        xml.start("bizTransactionList", &[])?;
        for transaction in &shipping.biz_transactions {
            xml.text_element("bizTransaction", &[("type", transaction.kind.urn())], &transaction.id)?;
        }
        xml.end("bizTransactionList")?;
    }

    if shipping.sources.is_empty() && shipping.destinations.is_empty() {
        return Ok(());
    }
    xml.start("extension", &[])?;
    for (list, element, entries) in [
        ("sourceList", "source", &shipping.sources),
        ("destinationList", "destination", &shipping.destinations),
    ] {
        if entries.is_empty() {
            continue;
        }
        xml.start(list, &[])?;
        for entry in entries {
            xml.text_element(element, &[("type", entry.kind.urn())], &entry.id)?;
        }
        xml.end(list)?;
    }
    xml.end("extension")
}

/// Thin wrapper over the quick-xml writer that maps failures to assembly errors
struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    fn new() -> Self {
        Self { writer: Writer::new_with_indent(Vec::new(), b' ', 2) }
    }

    fn write(&mut self, event: Event<'_>) -> GenerationResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| GenerationError::assembly_error(format!("XML write failed: {}", e)))
    }

    fn declaration(&mut self) -> GenerationResult<()> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> GenerationResult<()> {
        let mut start = BytesStart::new(name);
        for &attribute in attributes {
            start.push_attribute(attribute);
        }
        self.write(Event::Start(start))
    }

    fn end(&mut self, name: &str) -> GenerationResult<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) -> GenerationResult<()> {
        self.start(name, attributes)?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn finish(self) -> GenerationResult<String> {
        let mut document = String::from_utf8(self.writer.into_inner())
            .map_err(|e| GenerationError::assembly_error(format!("document is not UTF-8: {}", e)))?;
        document.push('\n');
        Ok(document)
    }
}

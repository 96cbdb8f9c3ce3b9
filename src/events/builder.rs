//! Event builder
//!
//! This module turns a resolved hierarchy and its serial pools into the
//! ordered event list: bulk commissioning per level, per-parent aggregations
//! per transition, then a single shipping event.

use std::collections::BTreeMap;
use tracing::{debug, instrument};

use super::epcis_event::*;
use super::sequencer::TimestampSequencer;
use crate::generation::{GenerationError, GenerationResult};
use crate::hierarchy::{partition, Hierarchy, LevelTransition, SerialPool};
use crate::types::identifiers::{is_present, sgln_epc, sgtin_epc, sscc_epc};
use crate::types::{
    BizTransactionType, EpcIdentifier, PackagingConfiguration, PackagingLevel, SourceDestType,
    TradingPartner,
};

const BIZ_TRANSACTION_PREFIX: &str = "urn:epcglobal:cbv:bt:";

/// Builds the ordered event list for one document
#[derive(Debug)]
pub struct EventBuilder<'a> {
    config: &'a PackagingConfiguration,
    hierarchy: &'a Hierarchy,
    pool: &'a SerialPool,
    read_point: Option<String>,
    biz_location: Option<String>,
}

impl<'a> EventBuilder<'a> {
    /// Create a builder with no fallback locations
    pub fn new(
        config: &'a PackagingConfiguration,
        hierarchy: &'a Hierarchy,
        pool: &'a SerialPool,
    ) -> Self {
        Self { config, hierarchy, pool, read_point: None, biz_location: None }
    }

    /// Set read point and business location
    ///
    /// The shipper's SGLN takes precedence over both; the values given here
    /// are only used when the shipper has none.
    pub fn with_locations(
        mut self,
        read_point: Option<&str>,
        biz_location: Option<&str>,
    ) -> GenerationResult<Self> {
        let shipper = self.config.effective_shipper();
        if is_present(&shipper.sgln) {
            let sgln = sgln_epc(&shipper.sgln)?;
            self.read_point = Some(sgln.clone());
            self.biz_location = Some(sgln);
        } else {
            self.read_point = read_point.filter(|v| is_present(v)).map(|v| v.trim().to_string());
            self.biz_location = biz_location.filter(|v| is_present(v)).map(|v| v.trim().to_string());
        }
        Ok(self)
    }

    /// Effective read point
    pub fn read_point(&self) -> Option<&str> {
        self.read_point.as_deref()
    }

    /// Effective business location
    pub fn biz_location(&self) -> Option<&str> {
        self.biz_location.as_deref()
    }

    /// Build every event in document order
    ///
    /// Each event takes exactly one timestamp from `sequencer`.
    #[instrument(skip_all, fields(topology = %self.hierarchy.topology()))]
    pub fn build(&self, sequencer: &mut TimestampSequencer) -> GenerationResult<Vec<EpcisEvent>> {
        let epcs = self.encode_levels()?;
        let mut events = Vec::with_capacity(
            epcs.len() + self.hierarchy.aggregation_event_count() + 1,
        );

        for (&level, encoded) in &epcs {
            events.push(self.commissioning_event(level, encoded.clone(), sequencer));
        }

        for transition in self.hierarchy.transitions() {
            let parents = level_epcs(&epcs, transition.parent)?;
            let children = level_epcs(&epcs, transition.child)?;
            self.aggregation_events(transition, parents, children, sequencer, &mut events)?;
        }

        let ssccs = level_epcs(&epcs, PackagingLevel::Sscc)?.to_vec();
        events.push(self.shipping_event(ssccs, sequencer)?);

        debug!("Built {} events", events.len());
        Ok(events)
    }

    /// Encode every serial of every active level, keyed bottom-up
    fn encode_levels(&self) -> GenerationResult<BTreeMap<PackagingLevel, Vec<EpcIdentifier>>> {
        let config = self.config;
        let shipper_prefix = &config.effective_shipper().company_prefix;
        let mut epcs = BTreeMap::new();

        for level in self.hierarchy.active_levels() {
            let serials = self.pool.serials(level);
            let encoded = if level.is_trade_item() {
                let (indicator, product_code) = config.trade_item_codes(level)?;
                serials
                    .iter()
                    .map(|serial| sgtin_epc(&config.company_prefix, indicator, product_code, serial))
                    .collect::<GenerationResult<Vec<_>>>()?
            } else {
                serials
                    .iter()
                    .map(|serial| sscc_epc(shipper_prefix, &config.sscc_indicator, serial))
                    .collect::<GenerationResult<Vec<_>>>()?
            };
            debug!("Encoded {} {} EPCs", encoded.len(), level);
            epcs.insert(level, encoded);
        }

        Ok(epcs)
    }

    fn commissioning_event(
        &self,
        level: PackagingLevel,
        epcs: Vec<EpcIdentifier>,
        sequencer: &mut TimestampSequencer,
    ) -> EpcisEvent {
        let ilmd = if level.carries_ilmd() && self.config.has_ilmd() {
            Some(Ilmd {
                lot_number: Some(self.config.lot_number.trim().to_string())
                    .filter(|lot| is_present(lot)),
                expiration_date: self.config.expiration_date,
            })
        } else {
            None
        };

        EpcisEvent::Commissioning(CommissioningEvent {
            event_time: sequencer.next(),
            level,
            epcs,
            read_point: self.read_point.clone(),
            biz_location: self.biz_location.clone(),
            ilmd,
        })
    }

    fn aggregation_events(
        &self,
        transition: &LevelTransition,
        parents: &[EpcIdentifier],
        children: &[EpcIdentifier],
        sequencer: &mut TimestampSequencer,
        events: &mut Vec<EpcisEvent>,
    ) -> GenerationResult<()> {
        let group_size = transition.children_per_parent;
        if group_size == 0 || children.len() != parents.len() * group_size {
            return Err(GenerationError::assembly_error(format!(
                "cannot pack {} {} units into {} {} units of {}",
                children.len(),
                transition.child,
                parents.len(),
                transition.parent,
                group_size
            )));
        }

        debug!("Packing {}", transition);
        for (parent, group) in parents.iter().zip(partition(children, group_size)) {
            events.push(EpcisEvent::Aggregation(AggregationEvent {
                event_time: sequencer.next(),
                transition: *transition,
                parent: parent.clone(),
                children: group,
                read_point: self.read_point.clone(),
                biz_location: self.biz_location.clone(),
            }));
        }
        Ok(())
    }

    fn shipping_event(
        &self,
        epcs: Vec<EpcIdentifier>,
        sequencer: &mut TimestampSequencer,
    ) -> GenerationResult<EpcisEvent> {
        let config = self.config;
        let shipper = config.effective_shipper();

        let sources = source_destinations(&config.sender, shipper)?;
        let destinations = source_destinations(&config.receiver, &config.receiver)?;

        Ok(EpcisEvent::Shipping(ShippingEvent {
            event_time: sequencer.next(),
            epcs,
            read_point: self.read_point.clone(),
            biz_location: self.biz_location.clone(),
            biz_transactions: self.biz_transactions(),
            sources,
            destinations,
        }))
    }

    fn biz_transactions(&self) -> Vec<BizTransaction> {
        let sender_gln = self.config.sender.gln.trim();
        [
            (BizTransactionType::PurchaseOrder, &self.config.purchase_order_number),
            (BizTransactionType::DespatchAdvice, &self.config.despatch_advice_number),
        ]
        .into_iter()
        .filter(|(_, reference)| is_present(reference))
        .map(|(kind, reference)| BizTransaction {
            kind,
            id: biz_transaction_urn(sender_gln, reference.trim()),
        })
        .collect()
    }
}

/// URN for a business transaction reference
///
/// References that are already URNs pass through unchanged.
pub fn biz_transaction_urn(sender_gln: &str, reference: &str) -> String {
    if reference.starts_with("urn:") {
        reference.to_string()
    } else if is_present(sender_gln) {
        format!("{}{}:{}", BIZ_TRANSACTION_PREFIX, sender_gln.trim(), reference)
    } else {
        format!("{}{}", BIZ_TRANSACTION_PREFIX, reference)
    }
}

fn level_epcs(
    epcs: &BTreeMap<PackagingLevel, Vec<EpcIdentifier>>,
    level: PackagingLevel,
) -> GenerationResult<&[EpcIdentifier]> {
    epcs.get(&level)
        .map(Vec::as_slice)
        .ok_or_else(|| GenerationError::assembly_error(format!("{} level is not active", level)))
}

/// Owning-party entry from `party`, location entry from `site`
fn source_destinations(
    party: &TradingPartner,
    site: &TradingPartner,
) -> GenerationResult<Vec<SourceDestination>> {
    let mut entries = Vec::with_capacity(2);
    if is_present(&party.sgln) {
        entries.push(SourceDestination {
            kind: SourceDestType::OwningParty,
            id: sgln_epc(&party.sgln)?,
        });
    }
    if is_present(&site.sgln) {
        entries.push(SourceDestination { kind: SourceDestType::Location, id: sgln_epc(&site.sgln)? });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn direct_config() -> PackagingConfiguration {
        PackagingConfiguration {
            company_prefix: "1234567".to_string(),
            item_indicator: "1".to_string(),
            item_product_code: "000000".to_string(),
            sscc_indicator: "3".to_string(),
            number_of_sscc: 1,
            cases_per_sscc: 0,
            items_per_case: 10,
            shipper: TradingPartner {
                company_prefix: "0999888".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn direct_pool() -> SerialPool {
        SerialPool {
            sscc: vec!["SSCC001".to_string()],
            item: (1..=10).map(|i| format!("ITEM{:03}", i)).collect(),
            ..Default::default()
        }
    }

    fn sequencer() -> TimestampSequencer {
        TimestampSequencer::new(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap())
    }

    #[test]
    fn test_direct_topology_events() {
        let config = direct_config();
        let hierarchy = Hierarchy::resolve(&config);
        let pool = direct_pool();
        let mut sequencer = sequencer();
        let events = EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer).unwrap();

        assert_eq!(events.len(), 4);
        match &events[0] {
            EpcisEvent::Commissioning(e) => {
                assert_eq!(e.level, PackagingLevel::Item);
                assert_eq!(e.epcs.len(), 10);
            }
            other => panic!("expected item commissioning, got {:?}", other),
        }
        match &events[1] {
            EpcisEvent::Commissioning(e) => assert_eq!(e.level, PackagingLevel::Sscc),
            other => panic!("expected SSCC commissioning, got {:?}", other),
        }
        match &events[2] {
            EpcisEvent::Aggregation(e) => {
                assert_eq!(e.parent.as_str(), "urn:epc:id:sscc:0999888.3SSCC001");
                assert_eq!(e.children.len(), 10);
                assert_eq!(e.children[0].as_str(), "urn:epc:id:sgtin:1234567.1000000.ITEM001");
                assert_eq!(e.children[9].as_str(), "urn:epc:id:sgtin:1234567.1000000.ITEM010");
            }
            other => panic!("expected aggregation, got {:?}", other),
        }
        assert!(matches!(events[3], EpcisEvent::Shipping(_)));
        assert_eq!(sequencer.issued(), events.len());
    }

    #[test]
    fn test_event_times_follow_document_order() {
        let config = direct_config();
        let hierarchy = Hierarchy::resolve(&config);
        let pool = direct_pool();
        let mut sequencer = sequencer();
        let events = EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer).unwrap();

        for pair in events.windows(2) {
            assert!(pair[0].event_time() < pair[1].event_time());
        }
        assert!(sequencer.creation_timestamp() > events[events.len() - 1].event_time());
    }

    #[test]
    fn test_ilmd_only_on_trade_item_levels() {
        let mut config = direct_config();
        config.lot_number = "LOT42".to_string();
        let hierarchy = Hierarchy::resolve(&config);
        let pool = direct_pool();
        let events =
            EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer()).unwrap();

        for event in &events {
            if let EpcisEvent::Commissioning(e) = event {
                match e.level {
                    PackagingLevel::Sscc => assert!(e.ilmd.is_none()),
                    _ => {
                        let ilmd = e.ilmd.as_ref().unwrap();
                        assert_eq!(ilmd.lot_number.as_deref(), Some("LOT42"));
                        assert!(ilmd.expiration_date.is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn test_shipper_sgln_overrides_locations() {
        let mut config = direct_config();
        let hierarchy = Hierarchy::resolve(&config);
        let pool = direct_pool();

        let builder = EventBuilder::new(&config, &hierarchy, &pool)
            .with_locations(Some("urn:epc:id:sgln:1111111.00001.0"), None)
            .unwrap();
        assert_eq!(builder.read_point(), Some("urn:epc:id:sgln:1111111.00001.0"));
        assert_eq!(builder.biz_location(), None);

        config.shipper.sgln = "0999888.00005.0".to_string();
        let builder = EventBuilder::new(&config, &hierarchy, &pool)
            .with_locations(Some("urn:epc:id:sgln:1111111.00001.0"), None)
            .unwrap();
        assert_eq!(builder.read_point(), Some("urn:epc:id:sgln:0999888.00005.0"));
        assert_eq!(builder.biz_location(), Some("urn:epc:id:sgln:0999888.00005.0"));
    }

    #[test]
    fn test_shipping_event_transactions_and_parties() {
        let mut config = direct_config();
        config.sender.gln = "1234567000019".to_string();
        config.sender.sgln = "1234567.00001.0".to_string();
        config.shipper.sgln = "0999888.00005.0".to_string();
        config.receiver.sgln = "7654321.00002.0".to_string();
        config.purchase_order_number = "PO-77".to_string();
        config.despatch_advice_number = "urn:epcglobal:cbv:bt:7654321000029:ASN9".to_string();
        let hierarchy = Hierarchy::resolve(&config);
        let pool = direct_pool();
        let events =
            EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer()).unwrap();

        let shipping = match events.last() {
            Some(EpcisEvent::Shipping(e)) => e,
            other => panic!("expected trailing shipping event, got {:?}", other),
        };
        assert_eq!(shipping.epcs.len(), 1);
        assert_eq!(shipping.biz_transactions.len(), 2);
        assert_eq!(shipping.biz_transactions[0].id, "urn:epcglobal:cbv:bt:1234567000019:PO-77");
        assert_eq!(shipping.biz_transactions[1].id, "urn:epcglobal:cbv:bt:7654321000029:ASN9");
        assert_eq!(
            shipping.sources,
            vec![
                SourceDestination {
                    kind: SourceDestType::OwningParty,
                    id: "urn:epc:id:sgln:1234567.00001.0".to_string()
                },
                SourceDestination {
                    kind: SourceDestType::Location,
                    id: "urn:epc:id:sgln:0999888.00005.0".to_string()
                },
            ]
        );
        assert_eq!(shipping.destinations.len(), 2);
    }

    #[test]
    fn test_sscc_uses_shipper_prefix_even_when_shared() {
        let mut config = direct_config();
        config.shipper.company_prefix = config.company_prefix.clone();
        config.sscc_indicator = "0".to_string();
        let hierarchy = Hierarchy::resolve(&config);
        let pool = direct_pool();
        let events =
            EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer()).unwrap();
        match &events[2] {
            EpcisEvent::Aggregation(e) => {
                assert_eq!(e.parent.as_str(), "urn:epc:id:sscc:1234567.0SSCC001")
            }
            other => panic!("expected aggregation, got {:?}", other),
        }
    }

    #[test]
    fn test_short_pool_is_an_assembly_error() {
        let config = direct_config();
        let hierarchy = Hierarchy::resolve(&config);
        let mut pool = direct_pool();
        pool.item.pop();
        let result = EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer());
        assert!(matches!(result, Err(GenerationError::AssemblyError(_))));
    }

    #[test]
    fn test_missing_shipper_prefix_fails() {
        let mut config = direct_config();
        config.shipper.company_prefix = "None".to_string();
        let hierarchy = Hierarchy::resolve(&config);
        let pool = direct_pool();
        let result = EventBuilder::new(&config, &hierarchy, &pool).build(&mut sequencer());
        assert!(matches!(result, Err(GenerationError::ConfigurationIncomplete { .. })));
    }

    #[test]
    fn test_biz_transaction_urn() {
        assert_eq!(biz_transaction_urn("123", "PO1"), "urn:epcglobal:cbv:bt:123:PO1");
        assert_eq!(biz_transaction_urn("", "PO1"), "urn:epcglobal:cbv:bt:PO1");
        assert_eq!(biz_transaction_urn("123", "urn:x:y"), "urn:x:y");
    }
}

//! Document statistics
//!
//! Counts derived from the typed event list of a generated document, used for
//! log lines and the CLI summary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::events::EpcisEvent;
use crate::hierarchy::Topology;
use crate::types::PackagingLevel;
use crate::vocabulary::MasterData;

/// Event and identifier counts for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// Packaging topology of the document
    pub topology: Topology,
    /// Commissioning ObjectEvents (one per active level)
    pub commissioning_events: usize,
    /// AggregationEvents (one per parent unit)
    pub aggregation_events: usize,
    /// Shipping ObjectEvents (always one)
    pub shipping_events: usize,
    /// Commissioned EPCs per packaging level
    pub epcs_per_level: BTreeMap<PackagingLevel, usize>,
    /// EPCClass vocabulary elements
    pub epc_class_elements: usize,
    /// Location vocabulary elements
    pub location_elements: usize,
}

impl DocumentStatistics {
    /// Count events and vocabulary elements
    pub fn from_events(topology: Topology, events: &[EpcisEvent], master_data: &MasterData) -> Self {
        let mut stats = Self {
            topology,
            commissioning_events: 0,
            aggregation_events: 0,
            shipping_events: 0,
            epcs_per_level: BTreeMap::new(),
            epc_class_elements: master_data.epc_classes.len(),
            location_elements: master_data.locations.len(),
        };

        for event in events {
            match event {
                EpcisEvent::Commissioning(e) => {
                    stats.commissioning_events += 1;
                    *stats.epcs_per_level.entry(e.level).or_insert(0) += e.epcs.len();
                }
                EpcisEvent::Aggregation(_) => stats.aggregation_events += 1,
                EpcisEvent::Shipping(_) => stats.shipping_events += 1,
            }
        }
        stats
    }

    /// ObjectEvents: commissioning plus shipping
    pub fn object_events(&self) -> usize {
        self.commissioning_events + self.shipping_events
    }

    /// All events
    pub fn total_events(&self) -> usize {
        self.object_events() + self.aggregation_events
    }

    /// All commissioned EPCs
    pub fn total_epcs(&self) -> usize {
        self.epcs_per_level.values().sum()
    }

    /// Commissioned EPCs at one level
    pub fn epcs_at(&self, level: PackagingLevel) -> usize {
        self.epcs_per_level.get(&level).copied().unwrap_or(0)
    }

    /// Multi-line breakdown for terminal output
    pub fn detailed_breakdown(&self) -> String {
        let mut breakdown = String::new();
        breakdown.push_str("=== EPCIS Document Summary ===\n");
        breakdown.push_str(&format!("Hierarchy: {}\n\n", self.topology));

        breakdown.push_str("Events:\n");
        breakdown.push_str(&format!("  • Commissioning: {}\n", self.commissioning_events));
        breakdown.push_str(&format!("  • Aggregation: {}\n", self.aggregation_events));
        breakdown.push_str(&format!("  • Shipping: {}\n", self.shipping_events));

        breakdown.push_str("\nCommissioned EPCs:\n");
        for (level, count) in &self.epcs_per_level {
            breakdown.push_str(&format!("  • {}: {}\n", level, count));
        }

        breakdown.push_str(&format!(
            "\nMaster data: {} EPCClass, {} Location\n",
            self.epc_class_elements, self.location_elements
        ));
        breakdown
    }
}

impl fmt::Display for DocumentStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} events ({} ObjectEvent, {} AggregationEvent), {} EPCs",
            self.topology,
            self.total_events(),
            self.object_events(),
            self.aggregation_events,
            self.total_epcs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AggregationEvent, CommissioningEvent, ShippingEvent};
    use crate::hierarchy::LevelTransition;
    use crate::types::sgtin_epc;
    use chrono::Utc;

    fn events() -> Vec<EpcisEvent> {
        let now = Utc::now();
        let item = sgtin_epc("1234567", "1", "000000", "A").unwrap();
        vec![
            EpcisEvent::Commissioning(CommissioningEvent {
                event_time: now,
                level: PackagingLevel::Item,
                epcs: vec![item.clone(), item.clone()],
                read_point: None,
                biz_location: None,
                ilmd: None,
            }),
            EpcisEvent::Aggregation(AggregationEvent {
                event_time: now,
                transition: LevelTransition {
                    child: PackagingLevel::Item,
                    parent: PackagingLevel::Sscc,
                    children_per_parent: 2,
                },
                parent: item.clone(),
                children: vec![item.clone(), item],
                read_point: None,
                biz_location: None,
            }),
            EpcisEvent::Shipping(ShippingEvent {
                event_time: now,
                epcs: vec![],
                read_point: None,
                biz_location: None,
                biz_transactions: vec![],
                sources: vec![],
                destinations: vec![],
            }),
        ]
    }

    #[test]
    fn test_counts() {
        let stats = DocumentStatistics::from_events(Topology::Direct, &events(), &MasterData::default());
        assert_eq!(stats.commissioning_events, 1);
        assert_eq!(stats.aggregation_events, 1);
        assert_eq!(stats.shipping_events, 1);
        assert_eq!(stats.object_events(), 2);
        assert_eq!(stats.total_events(), 3);
        assert_eq!(stats.epcs_at(PackagingLevel::Item), 2);
        assert_eq!(stats.epcs_at(PackagingLevel::Case), 0);
    }

    #[test]
    fn test_summary_text() {
        let stats = DocumentStatistics::from_events(Topology::Direct, &events(), &MasterData::default());
        assert_eq!(
            stats.to_string(),
            "SSCC > Item: 3 events (2 ObjectEvent, 1 AggregationEvent), 2 EPCs"
        );
        let breakdown = stats.detailed_breakdown();
        assert!(breakdown.contains("Aggregation: 1"));
        assert!(breakdown.contains("Item: 2"));
    }
}

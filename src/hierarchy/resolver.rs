//! Packaging hierarchy resolution
//!
//! This module inspects a packaging configuration once and produces the
//! topology tag and derived unit totals that every other component consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::types::{PackagingConfiguration, PackagingLevel};

/// The three packaging topologies a configuration can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// SSCC → Items
    Direct,
    /// SSCC → Cases → Items
    ThreeLevel,
    /// SSCC → Cases → Inner Cases → Items
    FourLevel,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Direct => write!(f, "SSCC > Item"),
            Topology::ThreeLevel => write!(f, "SSCC > Case > Item"),
            Topology::FourLevel => write!(f, "SSCC > Case > Inner Case > Item"),
        }
    }
}

/// A parent/child step in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelTransition {
    /// Contained level
    pub child: PackagingLevel,
    /// Containing level
    pub parent: PackagingLevel,
    /// Number of children packed into each parent
    pub children_per_parent: usize,
}

impl fmt::Display for LevelTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} per parent)", self.child, self.parent, self.children_per_parent)
    }
}

/// Resolved packaging hierarchy with derived unit totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    topology: Topology,
    total_sscc: usize,
    total_cases: usize,
    total_inner_cases: usize,
    total_items: usize,
    transitions: Vec<LevelTransition>,
}

impl Hierarchy {
    /// Resolve the hierarchy described by a configuration
    ///
    /// `cases_per_sscc == 0` selects the direct topology even when inner cases
    /// are enabled, since inner cases cannot exist without cases. Totals
    /// saturate at `usize::MAX`; [`PackagingConfiguration::validate`] rejects
    /// such configurations.
    pub fn resolve(config: &PackagingConfiguration) -> Self {
        let total_sscc = config.number_of_sscc;

        let hierarchy = if config.cases_per_sscc == 0 {
            // items_per_case doubles as items per SSCC here
            Self {
                topology: Topology::Direct,
                total_sscc,
                total_cases: 0,
                total_inner_cases: 0,
                total_items: config.items_per_case.saturating_mul(total_sscc),
                transitions: vec![LevelTransition {
                    child: PackagingLevel::Item,
                    parent: PackagingLevel::Sscc,
                    children_per_parent: config.items_per_case,
                }],
            }
        } else if !config.use_inner_cases {
            let total_cases = config.cases_per_sscc.saturating_mul(total_sscc);
            Self {
                topology: Topology::ThreeLevel,
                total_sscc,
                total_cases,
                total_inner_cases: 0,
                total_items: config.items_per_case.saturating_mul(total_cases),
                transitions: vec![
                    LevelTransition {
                        child: PackagingLevel::Item,
                        parent: PackagingLevel::Case,
                        children_per_parent: config.items_per_case,
                    },
                    LevelTransition {
                        child: PackagingLevel::Case,
                        parent: PackagingLevel::Sscc,
                        children_per_parent: config.cases_per_sscc,
                    },
                ],
            }
        } else {
            let total_cases = config.cases_per_sscc.saturating_mul(total_sscc);
            let total_inner_cases = config.inner_cases_per_case.saturating_mul(total_cases);
            Self {
                topology: Topology::FourLevel,
                total_sscc,
                total_cases,
                total_inner_cases,
                total_items: config.items_per_inner_case.saturating_mul(total_inner_cases),
                transitions: vec![
                    LevelTransition {
                        child: PackagingLevel::Item,
                        parent: PackagingLevel::InnerCase,
                        children_per_parent: config.items_per_inner_case,
                    },
                    LevelTransition {
                        child: PackagingLevel::InnerCase,
                        parent: PackagingLevel::Case,
                        children_per_parent: config.inner_cases_per_case,
                    },
                    LevelTransition {
                        child: PackagingLevel::Case,
                        parent: PackagingLevel::Sscc,
                        children_per_parent: config.cases_per_sscc,
                    },
                ],
            }
        };

        debug!(
            topology = %hierarchy.topology,
            sscc = hierarchy.total_sscc,
            cases = hierarchy.total_cases,
            inner_cases = hierarchy.total_inner_cases,
            items = hierarchy.total_items,
            "Resolved packaging hierarchy"
        );
        hierarchy
    }

    /// Topology tag
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of SSCC logistics units
    pub fn total_sscc(&self) -> usize {
        self.total_sscc
    }

    /// Number of cases (zero for the direct topology)
    pub fn total_cases(&self) -> usize {
        self.total_cases
    }

    /// Number of inner cases (zero unless four-level)
    pub fn total_inner_cases(&self) -> usize {
        self.total_inner_cases
    }

    /// Number of items
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of units at a level; zero for inactive levels
    pub fn unit_count(&self, level: PackagingLevel) -> usize {
        match level {
            PackagingLevel::Item => self.total_items,
            PackagingLevel::InnerCase => self.total_inner_cases,
            PackagingLevel::Case => self.total_cases,
            PackagingLevel::Sscc => self.total_sscc,
        }
    }

    /// Whether a level exists in this topology
    pub fn is_active(&self, level: PackagingLevel) -> bool {
        match (self.topology, level) {
            (_, PackagingLevel::Item) | (_, PackagingLevel::Sscc) => true,
            (Topology::Direct, _) => false,
            (Topology::ThreeLevel, PackagingLevel::Case) => true,
            (Topology::ThreeLevel, PackagingLevel::InnerCase) => false,
            (Topology::FourLevel, _) => true,
        }
    }

    /// Active levels, bottom-up
    pub fn active_levels(&self) -> Vec<PackagingLevel> {
        PackagingLevel::BOTTOM_UP.into_iter().filter(|level| self.is_active(*level)).collect()
    }

    /// Active SGTIN-identified levels, bottom-up
    pub fn trade_item_levels(&self) -> Vec<PackagingLevel> {
        self.active_levels().into_iter().filter(PackagingLevel::is_trade_item).collect()
    }

    /// Parent/child transitions, bottom-up
    pub fn transitions(&self) -> &[LevelTransition] {
        &self.transitions
    }

    /// Number of aggregation events the hierarchy implies (one per parent unit)
    pub fn aggregation_event_count(&self) -> usize {
        self.transitions.iter().fold(0usize, |count, t| count.saturating_add(self.unit_count(t.parent)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cases_per_sscc: usize, use_inner_cases: bool) -> PackagingConfiguration {
        PackagingConfiguration {
            number_of_sscc: 2,
            cases_per_sscc,
            inner_cases_per_case: 3,
            items_per_inner_case: 4,
            items_per_case: 10,
            use_inner_cases,
            ..Default::default()
        }
    }

    #[test]
    fn test_direct_topology() {
        let hierarchy = Hierarchy::resolve(&config(0, false));
        assert_eq!(hierarchy.topology(), Topology::Direct);
        assert_eq!(hierarchy.total_cases(), 0);
        assert_eq!(hierarchy.total_inner_cases(), 0);
        assert_eq!(hierarchy.total_items(), 20);
        assert_eq!(hierarchy.active_levels(), vec![PackagingLevel::Item, PackagingLevel::Sscc]);
        assert_eq!(hierarchy.aggregation_event_count(), 2);
    }

    #[test]
    fn test_direct_topology_ignores_inner_case_flag() {
        let hierarchy = Hierarchy::resolve(&config(0, true));
        assert_eq!(hierarchy.topology(), Topology::Direct);
        assert!(!hierarchy.is_active(PackagingLevel::InnerCase));
    }

    #[test]
    fn test_three_level_topology() {
        let hierarchy = Hierarchy::resolve(&config(5, false));
        assert_eq!(hierarchy.topology(), Topology::ThreeLevel);
        assert_eq!(hierarchy.total_cases(), 10);
        assert_eq!(hierarchy.total_items(), 100);
        assert_eq!(
            hierarchy.trade_item_levels(),
            vec![PackagingLevel::Item, PackagingLevel::Case]
        );
        // 10 case parents + 2 SSCC parents
        assert_eq!(hierarchy.aggregation_event_count(), 12);
    }

    #[test]
    fn test_four_level_topology() {
        let hierarchy = Hierarchy::resolve(&config(5, true));
        assert_eq!(hierarchy.topology(), Topology::FourLevel);
        assert_eq!(hierarchy.total_cases(), 10);
        assert_eq!(hierarchy.total_inner_cases(), 30);
        assert_eq!(hierarchy.total_items(), 120);
        assert_eq!(hierarchy.active_levels().len(), 4);
        assert_eq!(hierarchy.aggregation_event_count(), 30 + 10 + 2);

        let transitions = hierarchy.transitions();
        assert_eq!(transitions[0].parent, PackagingLevel::InnerCase);
        assert_eq!(transitions[0].children_per_parent, 4);
        assert_eq!(transitions[1].parent, PackagingLevel::Case);
        assert_eq!(transitions[2].parent, PackagingLevel::Sscc);
        assert_eq!(transitions[2].children_per_parent, 5);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let config = PackagingConfiguration {
            number_of_sscc: 4,
            cases_per_sscc: usize::MAX / 2,
            items_per_case: 2,
            ..Default::default()
        };
        let hierarchy = Hierarchy::resolve(&config);
        assert_eq!(hierarchy.total_cases(), usize::MAX);
        assert_eq!(hierarchy.total_items(), usize::MAX);
        assert_eq!(hierarchy.aggregation_event_count(), usize::MAX);
    }

    #[test]
    fn test_unit_count_for_inactive_levels_is_zero() {
        let hierarchy = Hierarchy::resolve(&config(5, false));
        assert_eq!(hierarchy.unit_count(PackagingLevel::InnerCase), 0);
        assert_eq!(hierarchy.unit_count(PackagingLevel::Sscc), 2);
    }
}

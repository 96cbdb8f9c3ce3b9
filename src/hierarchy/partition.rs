//! Serial pools and pool partitioning
//!
//! This module contains the per-level serial number pools supplied by the
//! caller, the size check performed before partitioning, the partitioner that
//! pairs children with parents, and seeded pool synthesis for dry runs.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::Hierarchy;
use crate::generation::{GenerationError, GenerationResult};
use crate::types::config::{normalize_keys, ConfigError};
use crate::types::PackagingLevel;

/// Length of synthesized SGTIN serial numbers
const SGTIN_SERIAL_LENGTH: usize = 12;

/// Split a pool into consecutive, non-overlapping groups of `group_size`
///
/// Callers guarantee `pool.len()` is a multiple of `group_size`. A zero group
/// size yields no groups.
pub fn partition<T: Clone>(pool: &[T], group_size: usize) -> Vec<Vec<T>> {
    if group_size == 0 {
        return Vec::new();
    }
    debug_assert_eq!(pool.len() % group_size, 0, "pool length must be a multiple of group size");
    pool.chunks(group_size).map(<[T]>::to_vec).collect()
}

/// Serial numbers for each packaging level, in packing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialPool {
    /// SSCC serial references
    #[serde(alias = "sscc_serials")]
    pub sscc: Vec<String>,
    /// Case serial numbers (empty for the direct topology)
    #[serde(alias = "case_serials")]
    pub case: Vec<String>,
    /// Inner case serial numbers (empty unless inner cases are active)
    #[serde(alias = "inner_case_serials")]
    pub inner_case: Vec<String>,
    /// Item serial numbers
    #[serde(alias = "item_serials")]
    pub item: Vec<String>,
}

impl SerialPool {
    /// Serials supplied for a level
    pub fn serials(&self, level: PackagingLevel) -> &[String] {
        match level {
            PackagingLevel::Item => &self.item,
            PackagingLevel::InnerCase => &self.inner_case,
            PackagingLevel::Case => &self.case,
            PackagingLevel::Sscc => &self.sscc,
        }
    }

    /// Total number of serials across all levels
    pub fn total(&self) -> usize {
        PackagingLevel::BOTTOM_UP.iter().map(|level| self.serials(*level).len()).sum()
    }

    /// Parse a pool from JSON text in either naming convention
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content)?;
        Ok(serde_json::from_value(normalize_keys(value))?)
    }

    /// Load a pool from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check every pool against the count the hierarchy implies
    ///
    /// Inactive levels must be empty.
    pub fn check_sizes(&self, hierarchy: &Hierarchy) -> GenerationResult<()> {
        for level in PackagingLevel::BOTTOM_UP {
            let expected = hierarchy.unit_count(level);
            let actual = self.serials(level).len();
            if expected != actual {
                return Err(GenerationError::pool_size_mismatch(level, expected, actual));
            }
        }
        Ok(())
    }

    /// Generate a pool of unique random serials sized for the hierarchy
    ///
    /// SSCC serial references are numeric and `sscc_serial_length` digits long;
    /// SGTIN serials are uppercase alphanumeric.
    pub fn synthesize<R: Rng>(hierarchy: &Hierarchy, sscc_serial_length: usize, rng: &mut R) -> Self {
        let sscc_serial_length = sscc_serial_length.max(1);
        let pool = Self {
            sscc: unique_serials(hierarchy.total_sscc(), rng, |rng| {
                (0..sscc_serial_length).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
            }),
            case: unique_serials(hierarchy.total_cases(), rng, alphanumeric_serial),
            inner_case: unique_serials(hierarchy.total_inner_cases(), rng, alphanumeric_serial),
            item: unique_serials(hierarchy.total_items(), rng, alphanumeric_serial),
        };
        info!("Synthesized {} serial numbers for {}", pool.total(), hierarchy.topology());
        pool
    }
}

/// Digits left for the serial reference of an SSCC with the given prefix
///
/// An SSCC is 18 digits: extension digit, company prefix, serial reference
/// and check digit.
pub fn sscc_serial_length(shipper_prefix: &str) -> usize {
    16usize.saturating_sub(shipper_prefix.trim().len())
}

fn alphanumeric_serial<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(SGTIN_SERIAL_LENGTH)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect()
}

fn unique_serials<R, F>(count: usize, rng: &mut R, mut make: F) -> Vec<String>
where
    R: Rng,
    F: FnMut(&mut R) -> String,
{
    let mut seen = HashSet::with_capacity(count);
    let mut serials = Vec::with_capacity(count);
    while serials.len() < count {
        let serial = make(rng);
        if seen.insert(serial.clone()) {
            serials.push(serial);
        } else {
            debug!("Discarding duplicate synthesized serial {}", serial);
        }
    }
    serials
}

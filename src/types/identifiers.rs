//! GS1 identifier types for the EPCIS document generator
//!
//! This module contains the EPC URN newtype and the pure encoding functions
//! for SSCC, SGTIN, SGTIN pattern and SGLN identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::generation::{GenerationError, GenerationResult};

const SSCC_PREFIX: &str = "urn:epc:id:sscc:";
const SGTIN_PREFIX: &str = "urn:epc:id:sgtin:";
const SGTIN_PATTERN_PREFIX: &str = "urn:epc:idpat:sgtin:";
const SGLN_PREFIX: &str = "urn:epc:id:sgln:";
const PGLN_PREFIX: &str = "urn:epc:id:pgln:";

/// Digits in a GLN, check digit included
const GLN_LENGTH: usize = 13;

/// Separator between URN key segments
const SEGMENT_DELIMITER: char = '.';

/// Values that upstream systems write into empty fields
const PLACEHOLDER_TOKENS: [&str; 3] = ["none", "null", "undefined"];

/// A GS1 EPC in pure-identity URN form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpcIdentifier(String);

impl EpcIdentifier {
    /// URN text of this identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an SSCC identifier
    pub fn is_sscc(&self) -> bool {
        self.0.starts_with(SSCC_PREFIX)
    }

    /// Whether this is an SGTIN identifier
    pub fn is_sgtin(&self) -> bool {
        self.0.starts_with(SGTIN_PREFIX)
    }
}

impl fmt::Display for EpcIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EpcIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for EpcIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EpcIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.starts_with("urn:epc:id:") {
            Ok(EpcIdentifier(s))
        } else {
            Err(serde::de::Error::custom(format!("not an EPC URN: {}", s)))
        }
    }
}

/// Return the trimmed value, or fail if it is blank or a placeholder token
pub fn require_field<'a>(field: &str, value: &'a str) -> GenerationResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || PLACEHOLDER_TOKENS.iter().any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return Err(GenerationError::configuration_incomplete(field));
    }
    Ok(trimmed)
}

/// Return the trimmed value, or fail unless it is all ASCII digits
pub fn require_digits<'a>(field: &str, value: &'a str) -> GenerationResult<&'a str> {
    let value = require_field(field, value)?;
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(GenerationError::invalid_identifier(field, value))
    }
}

/// Serial numbers may be alphanumeric but never carry the segment delimiter
fn require_serial<'a>(field: &str, value: &'a str) -> GenerationResult<&'a str> {
    let value = require_field(field, value)?;
    if value.contains(SEGMENT_DELIMITER) {
        return Err(GenerationError::invalid_identifier(field, value));
    }
    Ok(value)
}

/// Whether a free-text field carries a usable value
pub fn is_present(value: &str) -> bool {
    require_field("", value).is_ok()
}

/// Encode an SSCC: `urn:epc:id:sscc:{prefix}.{indicator}{serial}`
///
/// Callers pass the shipper's company prefix, never the product prefix.
pub fn sscc_epc(
    shipper_prefix: &str,
    sscc_indicator: &str,
    serial: &str,
) -> GenerationResult<EpcIdentifier> {
    let prefix = require_digits("shipper company prefix", shipper_prefix)?;
    let indicator = require_digits("SSCC indicator digit", sscc_indicator)?;
    let serial = require_serial("SSCC serial number", serial)?;
    Ok(EpcIdentifier(format!("{}{}.{}{}", SSCC_PREFIX, prefix, indicator, serial)))
}

/// Encode an SGTIN: `urn:epc:id:sgtin:{prefix}.{indicator}{product_code}.{serial}`
pub fn sgtin_epc(
    company_prefix: &str,
    indicator_digit: &str,
    product_code: &str,
    serial: &str,
) -> GenerationResult<EpcIdentifier> {
    let prefix = require_digits("company prefix", company_prefix)?;
    let item_reference = item_reference(indicator_digit, product_code)?;
    let serial = require_serial("SGTIN serial number", serial)?;
    Ok(EpcIdentifier(format!("{}{}.{}.{}", SGTIN_PREFIX, prefix, item_reference, serial)))
}

/// Encode an SGTIN class pattern: `urn:epc:idpat:sgtin:{prefix}.{indicator}{product_code}.*`
pub fn sgtin_pattern(
    company_prefix: &str,
    indicator_digit: &str,
    product_code: &str,
) -> GenerationResult<String> {
    let prefix = require_digits("company prefix", company_prefix)?;
    let item_reference = item_reference(indicator_digit, product_code)?;
    Ok(format!("{}{}.{}.*", SGTIN_PATTERN_PREFIX, prefix, item_reference))
}

/// Encode an SGLN: `urn:epc:id:sgln:{sgln}`
///
/// A value that is already an SGLN URN is passed through unchanged.
pub fn sgln_epc(sgln: &str) -> GenerationResult<String> {
    let sgln = require_field("SGLN", sgln)?;
    let body = sgln.strip_prefix(SGLN_PREFIX).unwrap_or(sgln);
    let body = require_field("SGLN", body)?;
    if body.split(SEGMENT_DELIMITER).any(str::is_empty) {
        return Err(GenerationError::invalid_identifier("SGLN", body));
    }
    Ok(format!("{}{}", SGLN_PREFIX, body))
}

/// Encode a party GLN: `urn:epc:id:pgln:{prefix}.{party_reference}`
///
/// The 13-digit GLN is split after the partner's company prefix and its check
/// digit dropped. A value that is already a PGLN URN is passed through.
pub fn pgln_epc(company_prefix: &str, gln: &str) -> GenerationResult<String> {
    let gln = require_field("GLN", gln)?;
    if gln.starts_with(PGLN_PREFIX) {
        return Ok(gln.to_string());
    }
    let gln = require_digits("GLN", gln)?;
    let prefix = require_digits("company prefix", company_prefix)?;
    if gln.len() != GLN_LENGTH || prefix.len() >= GLN_LENGTH || !gln.starts_with(prefix) {
        return Err(GenerationError::invalid_identifier("GLN", gln));
    }
    Ok(format!("{}{}.{}", PGLN_PREFIX, prefix, &gln[prefix.len()..GLN_LENGTH - 1]))
}

fn item_reference(indicator_digit: &str, product_code: &str) -> GenerationResult<String> {
    let indicator = require_digits("indicator digit", indicator_digit)?;
    let product_code = require_digits("product code", product_code)?;
    Ok(format!("{}{}", indicator, product_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sscc_encoding() {
        let epc = sscc_epc("0999888", "3", "SSCC001").unwrap();
        assert_eq!(epc.as_str(), "urn:epc:id:sscc:0999888.3SSCC001");
        assert!(epc.is_sscc());
        assert!(!epc.is_sgtin());
    }

    #[test]
    fn test_sgtin_encoding() {
        let epc = sgtin_epc("1234567", "1", "000000", "ITEM001").unwrap();
        assert_eq!(epc.as_str(), "urn:epc:id:sgtin:1234567.1000000.ITEM001");
        assert!(epc.is_sgtin());
    }

    #[test]
    fn test_sgtin_pattern_encoding() {
        let pattern = sgtin_pattern("1234567", "5", "012345").unwrap();
        assert_eq!(pattern, "urn:epc:idpat:sgtin:1234567.5012345.*");
    }

    #[test]
    fn test_sgln_encoding_is_idempotent() {
        let sgln = sgln_epc("0614141.00001.0").unwrap();
        assert_eq!(sgln, "urn:epc:id:sgln:0614141.00001.0");
        assert_eq!(sgln_epc(&sgln).unwrap(), sgln);
    }

    #[test]
    fn test_empty_fields_fail_loudly() {
        let err = sgtin_epc("", "1", "000000", "ITEM001").unwrap_err();
        assert!(matches!(err, GenerationError::ConfigurationIncomplete { .. }));

        assert!(sgtin_epc("1234567", "  ", "000000", "ITEM001").is_err());
        assert!(sgtin_epc("1234567", "1", "", "ITEM001").is_err());
        assert!(sgtin_epc("1234567", "1", "000000", "").is_err());
        assert!(sscc_epc("", "3", "SSCC001").is_err());
        assert!(sscc_epc("0999888", "", "SSCC001").is_err());
        assert!(sgln_epc("").is_err());
        assert!(sgln_epc("urn:epc:id:sgln:").is_err());

        // a trailing delimiter would otherwise render as "1234567..1000000"
        let err = sgtin_epc("1234567.", "1", "000000", "ITEM001").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidIdentifier { .. }));
        assert!(sscc_epc("0999888", "3.", "SSCC001").is_err());
    }

    #[test]
    fn test_delimiters_in_key_segments_are_rejected() {
        let err = sgtin_epc("0312345.", "0", "67890", "ITEM001").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidIdentifier { .. }));

        assert!(sgtin_pattern("0312345", "0.", "67890").is_err());
        assert!(sgtin_pattern("0312345", "0", ".67890").is_err());
        assert!(sgtin_epc("0312345", "0", "67890", ".ITEM001").is_err());
        assert!(sscc_epc("0999888.", "3", "000000001").is_err());
        assert!(sscc_epc("0999888", "3a", "000000001").is_err());
        assert!(sgln_epc("0312345..0").is_err());
    }

    #[test]
    fn test_pgln_encoding() {
        assert_eq!(pgln_epc("0312345", "0312345000011").unwrap(), "urn:epc:id:pgln:0312345.00001");
        assert_eq!(
            pgln_epc("", "urn:epc:id:pgln:0312345.00001").unwrap(),
            "urn:epc:id:pgln:0312345.00001"
        );

        // Wrong length, foreign prefix and missing prefix
        assert!(pgln_epc("0312345", "031234500001").is_err());
        assert!(pgln_epc("0398765", "0312345000011").is_err());
        assert!(pgln_epc("", "0312345000011").is_err());
    }

    #[test]
    fn test_placeholder_tokens_are_rejected() {
        assert!(sgtin_epc("None", "1", "000000", "ITEM001").is_err());
        assert!(sgtin_pattern("1234567", "null", "000000").is_err());
        assert!(sscc_epc("0999888", "3", "NONE").is_err());
        assert!(!is_present("None"));
        assert!(is_present("Acme"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let epc = sgtin_epc(" 1234567 ", "1", "000000 ", " A1").unwrap();
        assert_eq!(epc.as_str(), "urn:epc:id:sgtin:1234567.1000000.A1");
    }

    #[test]
    fn test_epc_serialization() {
        let epc = sscc_epc("0999888", "3", "SSCC001").unwrap();
        let json = serde_json::to_string(&epc).unwrap();
        assert_eq!(json, "\"urn:epc:id:sscc:0999888.3SSCC001\"");
        let back: EpcIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, epc);

        assert!(serde_json::from_str::<EpcIdentifier>("\"SSCC001\"").is_err());
    }
}

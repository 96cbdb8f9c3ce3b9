//! Packaging configuration for the EPCIS document generator
//!
//! This module contains the packaging-hierarchy configuration record, the
//! trading-partner records it carries, the ingestion step that normalizes the
//! two field naming conventions used upstream, and configuration validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::identifiers::{is_present, require_digits, require_field};
use super::PackagingLevel;
use crate::generation::{GenerationError, GenerationResult};
use crate::hierarchy::{Hierarchy, Topology};

/// Field names carried by a trading-partner record
const PARTNER_FIELDS: [&str; 9] = [
    "company_prefix",
    "gln",
    "sgln",
    "name",
    "street_address",
    "city",
    "state",
    "postal_code",
    "country_code",
];

/// Keys that hold trading-partner records
const PARTNER_ROLES: [&str; 3] = ["sender", "receiver", "shipper"];

/// Count fields that upstream forms sometimes submit as strings
const COUNT_FIELDS: [&str; 5] = [
    "number_of_sscc",
    "cases_per_sscc",
    "inner_cases_per_case",
    "items_per_inner_case",
    "items_per_case",
];

/// Flag fields that upstream forms sometimes submit as strings
const FLAG_FIELDS: [&str; 2] = ["use_inner_cases", "shipper_same_as_sender"];

/// A trading partner (sender, receiver or shipper)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingPartner {
    /// GS1 company prefix of the partner
    pub company_prefix: String,
    /// Global Location Number of the partner
    pub gln: String,
    /// Serialized GLN of the partner's site
    pub sgln: String,
    /// Legal name
    pub name: String,
    /// Street address line
    pub street_address: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub postal_code: String,
    /// ISO country code
    pub country_code: String,
}

impl TradingPartner {
    /// Whether the partner carries any location identifier
    pub fn has_location(&self) -> bool {
        is_present(&self.gln) || is_present(&self.sgln)
    }
}

/// Packaging hierarchy and product configuration for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingConfiguration {
    /// Product (SGTIN) company prefix
    pub company_prefix: String,

    /// Item indicator digit
    pub item_indicator: String,
    /// Item product code (item reference without indicator)
    pub item_product_code: String,
    /// Case indicator digit
    pub case_indicator: String,
    /// Case product code
    pub case_product_code: String,
    /// Inner case indicator digit
    pub inner_case_indicator: String,
    /// Inner case product code
    pub inner_case_product_code: String,
    /// SSCC extension digit
    pub sscc_indicator: String,

    /// Number of SSCC logistics units
    pub number_of_sscc: usize,
    /// Cases per SSCC; zero means items pack directly into SSCCs
    pub cases_per_sscc: usize,
    /// Inner cases per case (inner cases enabled)
    pub inner_cases_per_case: usize,
    /// Items per inner case (inner cases enabled)
    pub items_per_inner_case: usize,
    /// Items per case, or items per SSCC when there are no cases
    pub items_per_case: usize,
    /// Whether the inner case level is active
    pub use_inner_cases: bool,

    /// Lot number carried as ILMD
    pub lot_number: String,
    /// Expiration date carried as ILMD
    pub expiration_date: Option<NaiveDate>,

    /// Document sender (seller)
    pub sender: TradingPartner,
    /// Document receiver (buyer)
    pub receiver: TradingPartner,
    /// Physical shipper, when different from the sender
    pub shipper: TradingPartner,
    /// Whether the sender record also acts as shipper
    pub shipper_same_as_sender: bool,

    /// Package NDC, with or without hyphens
    pub package_ndc: String,
    /// Regulated product name
    pub regulated_product_name: String,
    /// Manufacturer name
    pub manufacturer_name: String,
    /// Dosage form
    pub dosage_form: String,
    /// Strength description
    pub strength: String,
    /// Net content description
    pub net_content: String,

    /// Purchase order reference for the shipping event
    pub purchase_order_number: String,
    /// Despatch advice reference for the shipping event
    pub despatch_advice_number: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("Configuration must be a JSON object, got {0}")]
    NotAnObject(String),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for a packaging configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// SSCC count is invalid
    #[error("Number of SSCCs must be greater than 0, got {0}")]
    InvalidSsccCount(usize),

    /// A multiplicity required by the topology is zero
    #[error("{field} must be greater than 0 for a {topology} hierarchy")]
    MissingMultiplicity {
        /// Name of the zero-valued field
        field: &'static str,
        /// Topology that requires it
        topology: Topology,
    },

    /// A required identifier field is blank
    #[error("Required field {0} is empty")]
    MissingField(String),

    /// An identifier field is not a valid GS1 key segment
    #[error("Field {field} must be numeric, got '{value}'")]
    InvalidField {
        /// Name of the offending field
        field: String,
        /// Value as supplied
        value: String,
    },

    /// Unit totals exceed what can be counted
    #[error("Packaging counts overflow the unit totals of a {0} hierarchy")]
    CountOverflow(Topology),
}

impl PackagingConfiguration {
    /// Parse a configuration from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json_value(value)
    }

    /// Build a configuration from a JSON value in either naming convention
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        let normalized = normalize_config_value(value)?;
        Ok(serde_json::from_value(normalized)?)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                Self::from_json_str(&content)
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A filled-in three-level configuration used as a starting template
    pub fn template() -> Self {
        let partner = |prefix: &str, location: &str, check_digit: char, name: &str| TradingPartner {
            company_prefix: prefix.to_string(),
            gln: format!("{}{}{}", prefix, location, check_digit),
            sgln: format!("{}.{}.0", prefix, location),
            name: name.to_string(),
            street_address: "100 Main Street".to_string(),
            city: "Springfield".to_string(),
            state: "NJ".to_string(),
            postal_code: "07081".to_string(),
            country_code: "US".to_string(),
        };

        Self {
            company_prefix: "0312345".to_string(),
            item_indicator: "0".to_string(),
            item_product_code: "67890".to_string(),
            case_indicator: "5".to_string(),
            case_product_code: "67890".to_string(),
            sscc_indicator: "0".to_string(),
            number_of_sscc: 1,
            cases_per_sscc: 2,
            items_per_case: 12,
            lot_number: "LOT0001".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2027, 12, 31),
            sender: partner("0312345", "00001", '1', "Example Pharma Inc."),
            receiver: partner("0398765", "00002", '2', "Example Distributor LLC"),
            shipper_same_as_sender: true,
            package_ndc: "12345-678-90".to_string(),
            regulated_product_name: "Examplamab".to_string(),
            manufacturer_name: "Example Pharma Inc.".to_string(),
            dosage_form: "TABLET".to_string(),
            strength: "10 mg".to_string(),
            net_content: "30 tablets".to_string(),
            ..Default::default()
        }
    }

    /// Partner that physically ships the goods
    pub fn effective_shipper(&self) -> &TradingPartner {
        if self.shipper_same_as_sender {
            &self.sender
        } else {
            &self.shipper
        }
    }

    /// Whether commissioning events carry lot/expiry master data
    pub fn has_ilmd(&self) -> bool {
        is_present(&self.lot_number) || self.expiration_date.is_some()
    }

    /// Indicator digit and product code for a trade-item level
    pub fn trade_item_codes(&self, level: PackagingLevel) -> GenerationResult<(&str, &str)> {
        let (indicator_field, indicator, code_field, code) = match level {
            PackagingLevel::Item => (
                "item_indicator",
                &self.item_indicator,
                "item_product_code",
                &self.item_product_code,
            ),
            PackagingLevel::InnerCase => (
                "inner_case_indicator",
                &self.inner_case_indicator,
                "inner_case_product_code",
                &self.inner_case_product_code,
            ),
            PackagingLevel::Case => (
                "case_indicator",
                &self.case_indicator,
                "case_product_code",
                &self.case_product_code,
            ),
            PackagingLevel::Sscc => {
                return Err(GenerationError::assembly_error(
                    "SSCC units are not trade items and have no product code",
                ))
            }
        };

        Ok((require_field(indicator_field, indicator)?, require_field(code_field, code)?))
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.number_of_sscc == 0 {
            return Err(ConfigValidationError::InvalidSsccCount(self.number_of_sscc));
        }

        let hierarchy = Hierarchy::resolve(self);
        let topology = hierarchy.topology();
        let required: Vec<(&'static str, usize)> = match topology {
            Topology::Direct | Topology::ThreeLevel => vec![("items_per_case", self.items_per_case)],
            Topology::FourLevel => vec![
                ("inner_cases_per_case", self.inner_cases_per_case),
                ("items_per_inner_case", self.items_per_inner_case),
            ],
        };
        for (field, value) in required {
            if value == 0 {
                return Err(ConfigValidationError::MissingMultiplicity { field, topology });
            }
        }
        self.check_unit_totals(topology)?;

        require_numeric_field("company_prefix", &self.company_prefix)?;
        require_numeric_field("sscc_indicator", &self.sscc_indicator)?;
        require_numeric_field(
            if self.shipper_same_as_sender { "sender.company_prefix" } else { "shipper.company_prefix" },
            &self.effective_shipper().company_prefix,
        )?;
        for level in hierarchy.active_levels() {
            if level.is_trade_item() {
                let (indicator, product_code) =
                    self.trade_item_codes(level).map_err(|e| match e {
                        GenerationError::ConfigurationIncomplete { field } => {
                            ConfigValidationError::MissingField(field)
                        }
                        other => ConfigValidationError::MissingField(other.to_string()),
                    })?;
                let (indicator_field, code_field) = match level {
                    PackagingLevel::Item => ("item_indicator", "item_product_code"),
                    PackagingLevel::InnerCase => ("inner_case_indicator", "inner_case_product_code"),
                    _ => ("case_indicator", "case_product_code"),
                };
                require_numeric_field(indicator_field, indicator)?;
                require_numeric_field(code_field, product_code)?;
            }
        }

        Ok(())
    }

    /// Every unit total is a product of these counts; the item total is the
    /// largest, so checking it covers the others
    fn check_unit_totals(&self, topology: Topology) -> Result<(), ConfigValidationError> {
        let factors: Vec<usize> = match topology {
            Topology::Direct => vec![self.number_of_sscc, self.items_per_case],
            Topology::ThreeLevel => vec![self.number_of_sscc, self.cases_per_sscc, self.items_per_case],
            Topology::FourLevel => vec![
                self.number_of_sscc,
                self.cases_per_sscc,
                self.inner_cases_per_case,
                self.items_per_inner_case,
            ],
        };
        factors
            .into_iter()
            .try_fold(1usize, |total, factor| total.checked_mul(factor))
            .map(|_| ())
            .ok_or(ConfigValidationError::CountOverflow(topology))
    }
}

fn require_numeric_field(field: &str, value: &str) -> Result<(), ConfigValidationError> {
    match require_digits(field, value) {
        Ok(_) => Ok(()),
        Err(GenerationError::InvalidIdentifier { field, value }) => {
            Err(ConfigValidationError::InvalidField { field, value })
        }
        Err(_) => Err(ConfigValidationError::MissingField(field.to_string())),
    }
}

/// Normalize an upstream configuration object into canonical snake_case form
///
/// Keys are converted from camelCase; flat `sender_gln`-style keys fold into
/// the nested partner records; numeric and boolean fields submitted as strings
/// are coerced; blank expiration dates become null.
pub fn normalize_config_value(value: Value) -> Result<Value, ConfigError> {
    let object = match normalize_keys(value) {
        Value::Object(object) => object,
        other => return Err(ConfigError::NotAnObject(json_type_name(&other).to_string())),
    };

    let mut object = fold_partner_fields(object);

    for field in COUNT_FIELDS {
        if let Some(Value::String(text)) = object.get(field) {
            let coerced = match text.trim() {
                "" => Value::from(0u64),
                digits => match digits.parse::<u64>() {
                    Ok(n) => Value::from(n),
                    Err(_) => continue,
                },
            };
            object.insert(field.to_string(), coerced);
        }
    }

    for field in FLAG_FIELDS {
        if let Some(Value::String(text)) = object.get(field) {
            let flag = matches!(text.trim().to_lowercase().as_str(), "true" | "yes" | "1" | "on");
            object.insert(field.to_string(), Value::Bool(flag));
        }
    }

    if let Some(Value::String(date)) = object.get("expiration_date") {
        if !is_present(date) {
            object.insert("expiration_date".to_string(), Value::Null);
        }
    }

    Ok(Value::Object(object))
}

/// Recursively rewrite object keys to snake_case, merging duplicate spellings
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::new();
            for (key, value) in map {
                let canonical = camel_to_snake(&key);
                let value = normalize_keys(value);
                let was_canonical = canonical == key;
                match normalized.get(&canonical) {
                    None => {
                        normalized.insert(canonical, value);
                    }
                    Some(existing) => {
                        // Non-empty beats empty; on a tie the snake_case spelling wins
                        let replace = if is_blank(existing) {
                            !is_blank(&value)
                        } else {
                            was_canonical && !is_blank(&value)
                        };
                        if replace {
                            normalized.insert(canonical, value);
                        }
                    }
                }
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Convert a camelCase key to snake_case, keeping acronyms together
pub fn camel_to_snake(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.map_or(false, |n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn fold_partner_fields(mut object: Map<String, Value>) -> Map<String, Value> {
    for role in PARTNER_ROLES {
        let mut partner = match object.remove(role) {
            Some(Value::Object(partner)) => partner,
            _ => Map::new(),
        };
        for field in PARTNER_FIELDS {
            let flat_key = format!("{}_{}", role, field);
            if let Some(value) = object.remove(&flat_key) {
                let nested_blank = partner.get(field).map_or(true, is_blank);
                if nested_blank {
                    partner.insert(field.to_string(), value);
                }
            }
        }
        object.insert(role.to_string(), Value::Object(partner));
    }
    object
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => !is_present(s),
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("companyPrefix"), "company_prefix");
        assert_eq!(camel_to_snake("numberOfSscc"), "number_of_sscc");
        assert_eq!(camel_to_snake("numberOfSSCC"), "number_of_sscc");
        assert_eq!(camel_to_snake("packageNDC"), "package_ndc");
        assert_eq!(camel_to_snake("SSCCIndicator"), "sscc_indicator");
        assert_eq!(camel_to_snake("items_per_case"), "items_per_case");
        assert_eq!(camel_to_snake("gln"), "gln");
    }

    #[test]
    fn test_mixed_naming_conventions() {
        let config = PackagingConfiguration::from_json_value(json!({
            "companyPrefix": "1234567",
            "item_indicator": "1",
            "itemProductCode": "000000",
            "numberOfSscc": 2,
            "cases_per_sscc": 0,
            "itemsPerCase": 10,
            "useInnerCases": false,
        }))
        .unwrap();

        assert_eq!(config.company_prefix, "1234567");
        assert_eq!(config.item_indicator, "1");
        assert_eq!(config.item_product_code, "000000");
        assert_eq!(config.number_of_sscc, 2);
        assert_eq!(config.items_per_case, 10);
        assert!(!config.use_inner_cases);
    }

    #[test]
    fn test_duplicate_spellings_prefer_non_empty() {
        let config = PackagingConfiguration::from_json_value(json!({
            "company_prefix": "",
            "companyPrefix": "1234567",
            "lotNumber": "LOT-A",
            "lot_number": "LOT-B",
        }))
        .unwrap();

        assert_eq!(config.company_prefix, "1234567");
        assert_eq!(config.lot_number, "LOT-B");
    }

    #[test]
    fn test_flat_partner_fields_fold_into_records() {
        let config = PackagingConfiguration::from_json_value(json!({
            "senderGln": "0312345000011",
            "sender_sgln": "0312345.00001.0",
            "receiver": { "gln": "0398765000021", "name": "Distributor" },
            "receiverName": "Ignored",
            "shipperCompanyPrefix": "0999888",
        }))
        .unwrap();

        assert_eq!(config.sender.gln, "0312345000011");
        assert_eq!(config.sender.sgln, "0312345.00001.0");
        assert_eq!(config.receiver.name, "Distributor");
        assert_eq!(config.shipper.company_prefix, "0999888");
    }

    #[test]
    fn test_string_counts_and_flags_are_coerced() {
        let config = PackagingConfiguration::from_json_value(json!({
            "number_of_sscc": "3",
            "casesPerSscc": "",
            "use_inner_cases": "true",
            "shipperSameAsSender": "no",
            "expiration_date": "",
        }))
        .unwrap();

        assert_eq!(config.number_of_sscc, 3);
        assert_eq!(config.cases_per_sscc, 0);
        assert!(config.use_inner_cases);
        assert!(!config.shipper_same_as_sender);
        assert!(config.expiration_date.is_none());
    }

    #[test]
    fn test_expiration_date_parsing() {
        let config =
            PackagingConfiguration::from_json_value(json!({ "expirationDate": "2026-05-31" })).unwrap();
        assert_eq!(config.expiration_date, NaiveDate::from_ymd_opt(2026, 5, 31));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = PackagingConfiguration::from_json_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject(_)));
    }

    #[test]
    fn test_effective_shipper() {
        let mut config = PackagingConfiguration::template();
        config.shipper.company_prefix = "0999888".to_string();

        config.shipper_same_as_sender = true;
        assert_eq!(config.effective_shipper().company_prefix, "0312345");

        config.shipper_same_as_sender = false;
        assert_eq!(config.effective_shipper().company_prefix, "0999888");
    }

    #[test]
    fn test_template_is_valid() {
        let config = PackagingConfiguration::template();
        config.validate().unwrap();
        assert!(config.has_ilmd());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = PackagingConfiguration::template();
        config.number_of_sscc = 0;
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidSsccCount(0))));

        let mut config = PackagingConfiguration::template();
        config.use_inner_cases = true;
        config.inner_cases_per_case = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::MissingMultiplicity { field: "inner_cases_per_case", .. })
        ));

        let mut config = PackagingConfiguration::template();
        config.case_product_code = "None".to_string();
        match config.validate() {
            Err(ConfigValidationError::MissingField(field)) => assert_eq!(field, "case_product_code"),
            other => panic!("unexpected validation result: {:?}", other),
        }
    }

    #[test]
    fn test_count_overflow_is_a_validation_error() {
        let config = PackagingConfiguration {
            number_of_sscc: 4,
            cases_per_sscc: usize::MAX / 2,
            items_per_case: 2,
            ..PackagingConfiguration::template()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::CountOverflow(Topology::ThreeLevel))
        ));

        let config = PackagingConfiguration {
            use_inner_cases: true,
            inner_cases_per_case: usize::MAX,
            items_per_inner_case: 2,
            case_product_code: "67890".to_string(),
            inner_case_indicator: "3".to_string(),
            inner_case_product_code: "67890".to_string(),
            ..PackagingConfiguration::template()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::CountOverflow(Topology::FourLevel))
        ));
    }

    #[test]
    fn test_non_numeric_key_segments_fail_validation() {
        let mut config = PackagingConfiguration::template();
        config.company_prefix = "0312345.".to_string();
        match config.validate() {
            Err(ConfigValidationError::InvalidField { field, value }) => {
                assert_eq!(field, "company_prefix");
                assert_eq!(value, "0312345.");
            }
            other => panic!("unexpected validation result: {:?}", other),
        }

        let mut config = PackagingConfiguration::template();
        config.item_product_code = "67-890".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidField { ref field, .. }) if field == "item_product_code"
        ));
    }

    #[test]
    fn test_trade_item_codes() {
        let config = PackagingConfiguration::template();
        assert_eq!(config.trade_item_codes(PackagingLevel::Case).unwrap(), ("5", "67890"));
        assert!(matches!(
            config.trade_item_codes(PackagingLevel::InnerCase),
            Err(GenerationError::ConfigurationIncomplete { .. })
        ));
        assert!(matches!(
            config.trade_item_codes(PackagingLevel::Sscc),
            Err(GenerationError::AssemblyError(_))
        ));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packaging.json");
        let config = PackagingConfiguration::template();
        config.save_to_file(&path).unwrap();

        let loaded = PackagingConfiguration::from_file(&path).unwrap();
        assert_eq!(loaded, config);

        let missing = PackagingConfiguration::from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));
    }
}

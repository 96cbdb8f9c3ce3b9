//! Standard Business Document Header

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::is_present;
use crate::types::PackagingConfiguration;

/// SBDH header version
pub const SBDH_HEADER_VERSION: &str = "1.0";
/// Document standard named in the SBDH
pub const SBDH_STANDARD: &str = "EPCglobal";
/// Document type named in the SBDH
pub const SBDH_DOCUMENT_TYPE: &str = "Events";
/// Identifier authority for sender and receiver
pub const SBDH_AUTHORITY: &str = "GS1";

/// Envelope metadata identifying who sent the document to whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbdhHeader {
    /// Header version
    pub header_version: String,
    /// Sender GLN
    pub sender_gln: Option<String>,
    /// Receiver GLN
    pub receiver_gln: Option<String>,
    /// Document standard
    pub standard: String,
    /// Version of the document standard
    pub type_version: String,
    /// Unique document instance identifier
    pub instance_identifier: String,
    /// Document type
    pub document_type: String,
    /// Creation time, after every event time in the document
    pub creation_date_and_time: DateTime<Utc>,
}

impl SbdhHeader {
    /// Header for a configuration's sender and receiver
    pub fn new(
        config: &PackagingConfiguration,
        instance_identifier: impl Into<String>,
        creation_date_and_time: DateTime<Utc>,
    ) -> Self {
        let gln = |value: &str| Some(value.trim().to_string()).filter(|v| is_present(v));
        Self {
            header_version: SBDH_HEADER_VERSION.to_string(),
            sender_gln: gln(&config.sender.gln),
            receiver_gln: gln(&config.receiver.gln),
            standard: SBDH_STANDARD.to_string(),
            type_version: SBDH_HEADER_VERSION.to_string(),
            instance_identifier: instance_identifier.into(),
            document_type: SBDH_DOCUMENT_TYPE.to_string(),
            creation_date_and_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_header_from_template() {
        let config = PackagingConfiguration::template();
        let created = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        let header = SbdhHeader::new(&config, "abc-123", created);

        assert_eq!(header.sender_gln.as_deref(), Some("0312345000011"));
        assert_eq!(header.receiver_gln.as_deref(), Some("0398765000022"));
        assert_eq!(header.instance_identifier, "abc-123");
        assert_eq!(header.document_type, "Events");
        assert_eq!(header.creation_date_and_time, created);
    }

    #[test]
    fn test_blank_glns_are_omitted() {
        let config = PackagingConfiguration::default();
        let header = SbdhHeader::new(&config, "id", Utc::now());
        assert!(header.sender_gln.is_none());
        assert!(header.receiver_gln.is_none());
    }
}

//! Conventional document file names

use chrono::NaiveDate;

use crate::types::identifiers::is_present;

/// `epcis-{sender}-{receiver}-{YYMMDD}.xml`, or `epcis-{YYMMDD}.xml` when
/// either GLN is blank
pub fn document_filename(sender_gln: &str, receiver_gln: &str, date: NaiveDate) -> String {
    let stamp = date.format("%y%m%d");
    if is_present(sender_gln) && is_present(receiver_gln) {
        format!("epcis-{}-{}-{}.xml", sender_gln.trim(), receiver_gln.trim(), stamp)
    } else {
        format!("epcis-{}.xml", stamp)
    }
}

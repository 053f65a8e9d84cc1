use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use zonedns_domain::{DnsClass, RecordType};

/// Bidirectional mapper between domain and hickory record types and classes.
///
/// Both sides carry unknown codes, so the mapping goes through the numeric
/// value and never fails.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }

    pub fn class_from_hickory(class: DNSClass) -> DnsClass {
        DnsClass::from_u16(u16::from(class))
    }

    /// Returns `None` for classes hickory cannot represent on a record.
    pub fn class_to_hickory(class: &DnsClass) -> Option<DNSClass> {
        match class {
            DnsClass::IN => Some(DNSClass::IN),
            DnsClass::CH => Some(DNSClass::CH),
            DnsClass::HS => Some(DNSClass::HS),
            DnsClass::NONE => Some(DNSClass::NONE),
            DnsClass::ANY => Some(DNSClass::ANY),
            DnsClass::Unknown(_) => None,
        }
    }
}

mod dns_class;
mod rdata;
mod record;
mod record_type;

pub use dns_class::DnsClass;
pub use rdata::{RecordData, SoaData};
pub use record::{RecordSet, ResourceRecord};
pub use record_type::RecordType;

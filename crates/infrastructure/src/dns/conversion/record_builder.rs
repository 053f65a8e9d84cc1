use super::RecordTypeMapper;
use hickory_proto::rr::rdata::{CNAME, MX, NS, PTR, SOA, SRV, TXT};
use hickory_proto::rr::{rdata, Name, RData, Record};
use std::str::FromStr;
use zonedns_domain::{DomainError, RecordData, ResourceRecord};

/// Builds hickory wire records from zone records.
pub struct RecordBuilder;

impl RecordBuilder {
    pub fn to_hickory(record: &ResourceRecord) -> Result<Record, DomainError> {
        let mut built = Record::from_rdata(
            parse_name(&record.name)?,
            record.ttl,
            Self::rdata(&record.data)?,
        );
        if let Some(class) = RecordTypeMapper::class_to_hickory(&record.class) {
            built.set_dns_class(class);
        }
        Ok(built)
    }

    fn rdata(data: &RecordData) -> Result<RData, DomainError> {
        Ok(match data {
            RecordData::A(ip) => RData::A(rdata::A(*ip)),
            RecordData::AAAA(ip) => RData::AAAA(rdata::AAAA(*ip)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(parse_name(target)?)),
            RecordData::NS(target) => RData::NS(NS(parse_name(target)?)),
            RecordData::PTR(target) => RData::PTR(PTR(parse_name(target)?)),
            RecordData::MX {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, parse_name(exchange)?)),
            RecordData::TXT(strings) => RData::TXT(TXT::new(strings.clone())),
            RecordData::SOA(soa) => RData::SOA(SOA::new(
                parse_name(&soa.mname)?,
                parse_name(&soa.rname)?,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum,
            )),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => RData::SRV(SRV::new(*priority, *weight, *port, parse_name(target)?)),
        })
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name).map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}
